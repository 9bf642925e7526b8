//! WASM bindings for the US presence map
//!
//! This crate is the thin browser layer: it fetches the CSV dataset and
//! the state boundary GeoJSON concurrently, hands both to
//! `presence-core` for aggregation and render planning, and replays the
//! resulting plan through Leaflet. All decisions (colors, priorities,
//! popups, marker placement) are made in Rust; JavaScript only hosts the
//! map container and the Leaflet script tag.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { renderPresenceMap } from './pkg/presence_wasm.js';
//!
//! await init();
//! await renderPresenceMap("map", "data.csv", statesGeoJsonUrl);
//! ```

pub mod fetch;
pub mod leaflet;
pub mod render;

use presence_core::build_map_model;
use wasm_bindgen::prelude::*;

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Fetch both sources, aggregate, and draw the map into `container_id`.
///
/// Rejects (with no partial render) if either fetch fails or the GeoJSON
/// is unparseable; malformed CSV rows degrade to defaults instead of
/// failing.
#[wasm_bindgen(js_name = renderPresenceMap)]
pub async fn render_presence_map(
    container_id: String,
    csv_url: String,
    geojson_url: String,
) -> Result<(), JsValue> {
    let (csv_text, geojson_text) = fetch::fetch_both(&csv_url, &geojson_url).await?;
    let model =
        build_map_model(&csv_text, &geojson_text).map_err(|e| JsValue::from_str(&e.to_string()))?;
    render::render_map(&container_id, &model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }
}
