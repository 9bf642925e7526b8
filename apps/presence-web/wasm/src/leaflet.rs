//! Bindings to the Leaflet global `L`.
//!
//! Leaflet is loaded from its own `<script>` tag; these externs cover the
//! handful of calls the presence map needs. Option objects are plain JS
//! objects produced with `serde_wasm_bindgen` by the caller.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// A Leaflet map instance (`L.Map`).
    pub type LeafletMap;

    /// `L.map(containerId)` — attach a map to a DOM element.
    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn map(container_id: &str) -> LeafletMap;

    /// `map.setView(center, zoom)`.
    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    /// Any addable layer: tiles, GeoJSON polygons, circle markers.
    pub type Layer;

    /// `L.tileLayer(urlTemplate, options)`.
    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> Layer;

    /// `L.geoJson(data, options)`.
    #[wasm_bindgen(js_namespace = L, js_name = geoJson)]
    pub fn geo_json(data: &JsValue, options: &JsValue) -> Layer;

    /// `L.circleMarker(latLng, options)`.
    #[wasm_bindgen(js_namespace = L, js_name = circleMarker)]
    pub fn circle_marker(lat_lng: &JsValue, options: &JsValue) -> Layer;

    /// `layer.addTo(map)`.
    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Layer, map: &LeafletMap) -> Layer;

    /// `layer.bindPopup(html)`.
    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Layer, html: &str) -> Layer;
}
