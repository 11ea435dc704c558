//! Thin `wasm_bindgen` surface over the mapbox-gl globals the trade-area
//! widget needs: construct a map, listen for its `load` event, add a
//! marker and a polygon source with fill/outline layers.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// A `mapboxgl.Map` instance.
    #[wasm_bindgen(js_namespace = mapboxgl)]
    #[derive(Clone)]
    pub type Map;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl)]
    pub fn new(options: &JsValue) -> Map;

    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method, js_name = addSource)]
    pub fn add_source(this: &Map, id: &str, source: &JsValue);

    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &Map, layer: &JsValue);
}

#[wasm_bindgen]
extern "C" {
    /// A `mapboxgl.Marker` instance.
    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type Marker;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl)]
    pub fn new(element: &web_sys::HtmlElement) -> Marker;

    #[wasm_bindgen(method, js_name = setLngLat)]
    pub fn set_lng_lat(this: &Marker, lng_lat: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &Map) -> Marker;
}

/// True when the `mapboxgl` global already exists, e.g. because the host
/// page ships the library itself.
pub fn library_present() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("mapboxgl")).unwrap_or(false)
}

/// Sets the global `mapboxgl.accessToken` used by every map constructed
/// afterwards.
pub fn set_access_token(token: &str) -> Result<(), JsValue> {
    let mapboxgl = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("mapboxgl"))?;
    js_sys::Reflect::set(
        &mapboxgl,
        &JsValue::from_str("accessToken"),
        &JsValue::from_str(token),
    )?;
    Ok(())
}
