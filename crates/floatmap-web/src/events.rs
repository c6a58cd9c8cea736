use std::cell::RefCell;
use std::rc::Weak;

use floatmap_core::{DragEnd, DragUpdate, MapView, WindowListeners};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::RESIZING_CLASS;
use crate::dom;
use crate::leaflet::LeafletSurface;

pub type WebMapView = MapView<LeafletSurface, WindowPointerListeners>;

/// Window-level pointermove/pointerup pair for divider drags.
///
/// The closures are built once per mounted view and only added to the window
/// between `attach` and `detach`. They hold a `Weak` to the view so a
/// dangling subscription can never keep it alive.
pub struct WindowPointerListeners {
    window: web::Window,
    on_move: Closure<dyn FnMut(web::PointerEvent)>,
    on_up: Closure<dyn FnMut(web::PointerEvent)>,
    attached: bool,
}

impl WindowPointerListeners {
    pub fn new(
        window: web::Window,
        view: Weak<RefCell<WebMapView>>,
        panel: web::HtmlElement,
    ) -> Self {
        let view_m = view.clone();
        let on_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let Some(view) = view_m.upgrade() else {
                return;
            };
            let update = view
                .borrow_mut()
                .pointer_move(ev.client_x(), dom::viewport_width_px());
            if let DragUpdate::Accepted(px) = update {
                dom::set_width_px(&panel, px);
            }
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);

        let on_up = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            let Some(view) = view.upgrade() else {
                return;
            };
            let end = view.borrow_mut().pointer_up();
            if let DragEnd::Completed { panel_width_px, .. } = end {
                log::debug!("[events] divider settled at {}px", panel_width_px);
            }
            set_resizing_cursor(false);
        }) as Box<dyn FnMut(_)>);

        Self {
            window,
            on_move,
            on_up,
            attached: false,
        }
    }
}

impl WindowListeners for WindowPointerListeners {
    fn attach(&mut self) {
        if self.attached {
            return;
        }
        let _ = self.window.add_event_listener_with_callback(
            "pointermove",
            self.on_move.as_ref().unchecked_ref(),
        );
        let _ = self
            .window
            .add_event_listener_with_callback("pointerup", self.on_up.as_ref().unchecked_ref());
        self.attached = true;
    }

    fn detach(&mut self) {
        if !self.attached {
            return;
        }
        let _ = self.window.remove_event_listener_with_callback(
            "pointermove",
            self.on_move.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "pointerup",
            self.on_up.as_ref().unchecked_ref(),
        );
        self.attached = false;
    }
}

impl Drop for WindowPointerListeners {
    fn drop(&mut self) {
        self.detach();
    }
}

/// pointerdown on the divider starts a drag.
pub fn wire_divider(
    divider: &web::HtmlElement,
    view: Weak<RefCell<WebMapView>>,
) -> Closure<dyn FnMut(web::PointerEvent)> {
    dom::listen(divider, "pointerdown", move |ev: web::PointerEvent| {
        let Some(view) = view.upgrade() else {
            return;
        };
        if view.borrow_mut().divider_pointer_down() {
            set_resizing_cursor(true);
        }
        // keeps the browser from starting a text selection mid-drag
        ev.prevent_default();
    })
}

pub fn set_resizing_cursor(on: bool) {
    if let Some(body) = dom::window_document().and_then(|d| d.body()) {
        let list = body.class_list();
        let _ = if on {
            list.add_1(RESIZING_CLASS)
        } else {
            list.remove_1(RESIZING_CLASS)
        };
    }
}
