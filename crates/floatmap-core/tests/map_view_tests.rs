// Host-side tests for the map view composition: catalog + surface + divider.

mod common;

use common::{FakeListeners, FakeSurface};
use floatmap_core::{
    Catalog, DragEnd, DragPhase, DragUpdate, LayoutConfig, MapConfig, MapView,
};
use glam::DVec2;
use std::rc::Rc;

fn view() -> MapView<FakeSurface, FakeListeners> {
    let catalog = Rc::new(Catalog::builtin().unwrap());
    MapView::new(
        catalog,
        MapConfig::default(),
        LayoutConfig::default(),
        FakeListeners::default(),
    )
}

#[test]
fn attaching_surface_draws_whole_catalog() {
    let mut v = view();
    assert!(v.surface().is_none());
    v.attach_surface(FakeSurface::default());
    let s = v.surface().unwrap();
    assert_eq!(s.overlays.borrow().len(), v.catalog().len());
    assert_eq!(s.invalidations.get(), 0);
}

#[test]
fn refresh_does_not_duplicate_overlays() {
    let mut v = view();
    v.attach_surface(FakeSurface::default());
    v.refresh_overlays();
    v.refresh_overlays();
    let s = v.surface().unwrap();
    assert_eq!(s.overlays.borrow().len(), v.catalog().len());
    assert_eq!(s.placements.get(), 3 * v.catalog().len());
}

#[test]
fn completed_drag_resizes_mounted_surface_once() {
    let mut v = view();
    v.attach_surface(FakeSurface::default());

    assert!(v.divider_pointer_down());
    assert_eq!(v.pointer_move(500, 1600), DragUpdate::Accepted(500));
    assert_eq!(v.pointer_move(50, 1600), DragUpdate::Rejected);
    assert_eq!(v.surface().unwrap().invalidations.get(), 0);
    v.pointer_up();

    assert_eq!(v.panel_width_px(), 500);
    assert_eq!(v.surface().unwrap().invalidations.get(), 1);
    assert_eq!(v.phase(), DragPhase::Idle);
}

#[test]
fn drag_before_surface_mount_is_harmless() {
    let mut v = view();
    v.divider_pointer_down();
    v.pointer_move(480, 1400);
    assert_eq!(
        v.pointer_up(),
        DragEnd::Completed {
            panel_width_px: 480,
            surface_notified: false
        }
    );
    v.attach_surface(FakeSurface::default());
    assert_eq!(v.surface().unwrap().invalidations.get(), 0);
}

#[test]
fn unmount_mid_drag_releases_listeners_and_returns_surface() {
    let mut v = view();
    let (attached, _, detaches) = v.split().listeners().probes();
    v.attach_surface(FakeSurface::default());
    v.divider_pointer_down();
    v.pointer_move(600, 1600);

    let surface = v.unmount().expect("surface handed back");
    assert!(!attached.get());
    assert_eq!(detaches.get(), 1);
    assert_eq!(surface.invalidations.get(), 0);
    assert!(v.surface().is_none());
}

#[test]
fn surface_is_never_invalidated_without_a_drag() {
    let mut v = view();
    v.attach_surface(FakeSurface::default());
    v.refresh_overlays();
    assert_eq!(v.pointer_move(500, 1600), DragUpdate::Ignored);
    assert_eq!(v.pointer_up(), DragEnd::Ignored);
    assert_eq!(v.surface().unwrap().invalidations.get(), 0);
    assert_eq!(v.panel_width_px(), 350);
}

#[test]
fn initial_viewport_fits_builtin_catalog() {
    let v = view();
    let vp = v.initial_viewport(DVec2::new(1200.0, 800.0));
    let b = v.catalog().bounds().unwrap();
    assert!(vp.center.latitude() > b.south && vp.center.latitude() < b.north);
    assert!(vp.center.longitude() > b.west && vp.center.longitude() < b.east);
    assert!(vp.zoom >= 2.0 && vp.zoom <= 8.0);
}

#[test]
fn initial_viewport_falls_back_for_empty_catalog() {
    let v: MapView<FakeSurface, FakeListeners> = MapView::new(
        Rc::new(Catalog::default()),
        MapConfig::default(),
        LayoutConfig::default(),
        FakeListeners::default(),
    );
    let vp = v.initial_viewport(DVec2::new(1200.0, 800.0));
    assert_eq!(vp, MapConfig::default().fallback_view);
}
