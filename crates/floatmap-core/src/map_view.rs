use std::rc::Rc;

use glam::DVec2;

use crate::catalog::Catalog;
use crate::config::{LayoutConfig, MapConfig};
use crate::geo::{fit_bounds, MapViewport};
use crate::layout::{DragEnd, DragPhase, DragUpdate, SplitLayout};
use crate::overlay;
use crate::surface::{MapSurface, WindowListeners};

/// Side panel + divider + map surface.
///
/// Owns the only handle to the map engine. The handle is absent until the
/// host has mounted the engine; every path that needs it tolerates that.
pub struct MapView<M: MapSurface, W: WindowListeners> {
    catalog: Rc<Catalog>,
    config: MapConfig,
    surface: Option<M>,
    split: SplitLayout<W>,
}

impl<M: MapSurface, W: WindowListeners> MapView<M, W> {
    pub fn new(catalog: Rc<Catalog>, config: MapConfig, layout: LayoutConfig, listeners: W) -> Self {
        Self {
            catalog,
            config,
            surface: None,
            split: SplitLayout::new(layout, listeners),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn split(&self) -> &SplitLayout<W> {
        &self.split
    }

    #[inline]
    pub fn panel_width_px(&self) -> i32 {
        self.split.panel_width_px()
    }

    #[inline]
    pub fn phase(&self) -> DragPhase {
        self.split.phase()
    }

    pub fn surface(&self) -> Option<&M> {
        self.surface.as_ref()
    }

    /// Center/zoom to mount the engine with, fitted to the catalog for a map
    /// container of `container_px`.
    pub fn initial_viewport(&self, container_px: DVec2) -> MapViewport {
        self.catalog
            .bounds()
            .and_then(|b| {
                fit_bounds(
                    &b,
                    container_px,
                    self.config.fit_padding_px,
                    self.config.min_fit_zoom,
                    self.config.max_fit_zoom,
                )
            })
            .unwrap_or(self.config.fallback_view)
    }

    /// Hand over the mounted engine and draw the catalog on it.
    pub fn attach_surface(&mut self, surface: M) {
        overlay::render_catalog(&self.catalog, &self.config.overlay, &surface);
        self.surface = Some(surface);
    }

    pub fn refresh_overlays(&self) {
        if let Some(s) = &self.surface {
            overlay::render_catalog(&self.catalog, &self.config.overlay, s);
        }
    }

    pub fn divider_pointer_down(&mut self) -> bool {
        self.split.pointer_down()
    }

    pub fn pointer_move(&mut self, client_x: i32, viewport_width_px: i32) -> DragUpdate {
        self.split.pointer_move(client_x, viewport_width_px)
    }

    pub fn pointer_up(&mut self) -> DragEnd {
        self.split.pointer_up(self.surface.as_ref())
    }

    /// Release listeners and give the engine handle back for disposal.
    pub fn unmount(&mut self) -> Option<M> {
        self.split.release();
        self.surface.take()
    }
}
