use anyhow::anyhow;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Click handler on a static element from `index.html`. Lives for the whole
/// page, so the closure is leaked.
#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

/// Listener on a dynamically created element. The caller keeps the closure
/// for as long as the element is mounted.
pub fn listen<E: 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Closure<dyn FnMut(E)>
where
    dyn FnMut(E): WasmClosure,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure
}

pub fn by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("#{} has unexpected type: {:?}", id, e))
}

pub fn create(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("<{}> is not an HtmlElement: {:?}", tag, e))
}

pub fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow!("append_child: {:?}", e))
}

#[inline]
pub fn set_width_px(el: &web::HtmlElement, px: i32) {
    let _ = el.style().set_property("width", &format!("{}px", px));
}

#[inline]
pub fn set_visible(el: &web::Element, visible: bool) {
    let _ = el.set_attribute("style", if visible { "" } else { "display:none" });
}

pub fn viewport_width_px() -> i32 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w as i32)
        .unwrap_or(0)
}

#[inline]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
