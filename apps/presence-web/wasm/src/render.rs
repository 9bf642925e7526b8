//! Replays a `MapModel` through Leaflet.

use presence_core::{MapModel, RegionStyle, TileOptions, INITIAL_ZOOM, MAP_CENTER, TILE_URL};
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::leaflet;

/// Per-layer options for `L.geoJson`: a precomputed static style instead
/// of the usual style callback.
#[derive(Serialize)]
struct GeoJsonOptions {
    style: RegionStyle,
}

/// Convert to a plain JS object (maps as objects, so Leaflet can read
/// GeoJSON geometries and option bags directly).
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&format!("Failed to convert to JS value: {}", e)))
}

/// Draw the base tiles, the choropleth, and the city markers.
pub fn render_map(container_id: &str, model: &MapModel) -> Result<(), JsValue> {
    let map = leaflet::map(container_id);
    map.set_view(&to_js(&MAP_CENTER)?, INITIAL_ZOOM);

    leaflet::tile_layer(TILE_URL, &to_js(&TileOptions::default())?).add_to(&map);

    for region in &model.regions {
        let options = GeoJsonOptions {
            style: region.style.clone(),
        };
        leaflet::geo_json(&to_js(&region.geometry)?, &to_js(&options)?)
            .add_to(&map)
            .bind_popup(&region.popup_html);
    }

    for marker in &model.markers {
        leaflet::circle_marker(&to_js(&marker.lat_lng)?, &to_js(&marker.style)?)
            .add_to(&map)
            .bind_popup(&marker.popup_html);
    }

    web_sys::console::log_1(&JsValue::from_str(&format!(
        "presence map rendered: {} regions, {} markers",
        model.regions.len(),
        model.markers.len()
    )));
    Ok(())
}
