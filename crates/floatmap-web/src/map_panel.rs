use std::cell::RefCell;
use std::rc::{Rc, Weak};

use floatmap_core::chat::{ChartIds, ChatMode};
use floatmap_core::{Catalog, LayoutConfig, MapConfig, MapView};
use glam::DVec2;
use wasm_bindgen::closure::Closure;
use web_sys as web;

use crate::chat::ChatPanel;
use crate::dom;
use crate::events::{self, WebMapView, WindowPointerListeners};
use crate::leaflet::LeafletSurface;

/// Live map view: chat side panel, divider and Leaflet map.
///
/// Dropping it tears everything down: DOM removed, window listeners
/// detached, Leaflet map removed.
pub struct MountedMap {
    root: web::HtmlElement,
    view: Rc<RefCell<WebMapView>>,
    _chat: ChatPanel,
    _divider_down: Closure<dyn FnMut(web::PointerEvent)>,
}

impl MountedMap {
    pub fn mount(
        document: &web::Document,
        parent: &web::Element,
        catalog: Rc<Catalog>,
        ids: Rc<RefCell<ChartIds>>,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

        let root = dom::create(document, "div", "map-view")?;
        let panel = dom::create(document, "div", "side-panel")?;
        let divider = dom::create(document, "div", "resizer")?;
        let map_el = dom::create(document, "div", "map-container")?;

        let chat = ChatPanel::mount(document, ChatMode::Map, ids, |_| {})?;
        dom::append(&panel, &chat.root)?;
        dom::append(&root, &panel)?;
        dom::append(&root, &divider)?;
        dom::append(&root, &map_el)?;
        dom::append(parent, &root)?;

        let layout = LayoutConfig::default();
        dom::set_width_px(&panel, layout.default_panel_width_px);

        let view = Rc::new_cyclic(|weak: &Weak<RefCell<WebMapView>>| {
            let listeners = WindowPointerListeners::new(window.clone(), weak.clone(), panel.clone());
            RefCell::new(MapView::new(catalog, MapConfig::default(), layout, listeners))
        });

        let divider_down = events::wire_divider(&divider, Rc::downgrade(&view));

        // the map container is in the DOM now, so it has a size to fit into
        let size = DVec2::new(map_el.client_width() as f64, map_el.client_height() as f64);
        {
            let mut v = view.borrow_mut();
            let initial = v.initial_viewport(size);
            match LeafletSurface::mount(&map_el, initial, v.config()) {
                Ok(surface) => v.attach_surface(surface),
                // the panel and divider stay usable without a map
                Err(e) => log::error!("[map] mount failed: {:?}", e),
            }
        }

        Ok(Self {
            root,
            view,
            _chat: chat,
            _divider_down: divider_down,
        })
    }
}

impl Drop for MountedMap {
    fn drop(&mut self) {
        if let Ok(mut v) = self.view.try_borrow_mut() {
            drop(v.unmount());
        }
        events::set_resizing_cursor(false);
        self.root.remove();
    }
}
