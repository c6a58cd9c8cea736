//! Minimal Leaflet bindings (the page loads `L` globally) and the
//! `MapSurface` implementation on top of them.

use std::cell::RefCell;

use anyhow::anyhow;
use floatmap_core::{FloatId, FloatOverlay, MapConfig, MapSurface, MapViewport, Position, TrackStyle};
use fnv::FnvHashMap;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;
    pub type Layer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn new_map(container: &web::HtmlElement, options: &Object) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &Array, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    fn invalidate_size(this: &LeafletMap);

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap);

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &Object) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    fn layer_group() -> Layer;

    #[wasm_bindgen(js_namespace = L)]
    fn polyline(latlngs: &Array, options: &Object) -> Layer;

    #[wasm_bindgen(js_namespace = L)]
    fn marker(latlng: &Array, options: &Object) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    fn div_icon(options: &Object) -> JsValue;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap) -> Layer;

    #[wasm_bindgen(method, js_name = addLayer)]
    fn add_layer(this: &Layer, layer: &Layer) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, html: &str) -> Layer;

    #[wasm_bindgen(method, js_name = remove)]
    fn remove_layer(this: &Layer);
}

fn options(entries: &[(&str, JsValue)]) -> Object {
    let obj = Object::new();
    for (k, v) in entries {
        let _ = Reflect::set(&obj, &JsValue::from_str(k), v);
    }
    obj
}

fn latlng(p: Position) -> Array {
    Array::of2(&p.latitude().into(), &p.longitude().into())
}

fn latlngs(path: &[Position]) -> Array {
    path.iter().map(|p| JsValue::from(latlng(*p))).collect()
}

fn track_options(style: &TrackStyle) -> Object {
    options(&[
        ("color", style.color.into()),
        ("weight", style.weight_px.into()),
        ("opacity", style.opacity.into()),
    ])
}

/// A mounted Leaflet map. One layer group per float, replaced on re-place.
pub struct LeafletSurface {
    map: LeafletMap,
    groups: RefCell<FnvHashMap<FloatId, Layer>>,
}

impl LeafletSurface {
    pub fn mount(
        container: &web::HtmlElement,
        view: MapViewport,
        config: &MapConfig,
    ) -> anyhow::Result<Self> {
        let map = new_map(container, &options(&[("zoomControl", true.into())]))
            .map_err(|e| anyhow!("L.map failed: {:?}", e))?;
        map.set_view(&latlng(view.center), view.zoom);
        tile_layer(
            config.tile_url,
            &options(&[("attribution", config.tile_attribution.into())]),
        )
        .add_to(&map);
        log::info!(
            "[map] mounted at ({:.2},{:.2}) z{}",
            view.center.latitude(),
            view.center.longitude(),
            view.zoom
        );
        Ok(Self {
            map,
            groups: RefCell::new(FnvHashMap::default()),
        })
    }
}

impl MapSurface for LeafletSurface {
    fn invalidate_size(&self) {
        self.map.invalidate_size();
    }

    fn place_overlay(&self, overlay: &FloatOverlay) {
        let group = layer_group();
        if let Some(track) = &overlay.track {
            group.add_layer(&polyline(&latlngs(&track.path), &track_options(&track.style)));
        }

        let m = &overlay.marker;
        let size = m.style.size_px as f64;
        let icon = div_icon(&options(&[
            ("className", "".into()),
            ("html", m.badge_html().into()),
            ("iconSize", Array::of2(&size.into(), &size.into()).into()),
        ]));
        let pin = marker(
            &latlng(m.at),
            &options(&[("icon", icon), ("title", m.label.as_str().into())]),
        );
        pin.bind_popup(&m.popup.html());
        group.add_layer(&pin);
        group.add_to(&self.map);

        if let Some(old) = self.groups.borrow_mut().insert(overlay.float_id, group) {
            old.remove_layer();
        }
    }
}

impl Drop for LeafletSurface {
    fn drop(&mut self) {
        self.map.remove();
    }
}
