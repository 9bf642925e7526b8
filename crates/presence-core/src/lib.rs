//! US market presence aggregation and map planning
//!
//! This crate holds the pure half of the presence map: CSV record
//! parsing, the per-state aggregation with its priority rule, the static
//! city coordinate table, the boundary GeoJSON model, and the render
//! plan (styles and popup HTML) handed to the browser layer.
//!
//! Everything here is deterministic and host-testable; the wasm app in
//! `apps/presence-web` only fetches the inputs and replays the plan
//! through Leaflet.

pub mod aggregate;
pub mod coords;
pub mod error;
pub mod geojson;
pub mod presence;
pub mod record;
pub mod render;

pub use aggregate::{aggregate, CityEntry, StateSummary};
pub use coords::{city_lat_lng, LatLng};
pub use error::MapDataError;
pub use geojson::{parse_state_features, StateFeature};
pub use presence::Presence;
pub use record::{parse_records, CityRecord};
pub use render::{
    build_map_model, CityMarker, MapModel, MarkerStyle, RegionStyle, StateRegion, TileOptions,
    INITIAL_ZOOM, MAP_CENTER, TILE_URL,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_scenario() {
        let csv = "state,city,presence,contact\n\
                   Texas,,direct,Acme\n\
                   Texas,Houston,importer,Gulf LLC\n\
                   Nevada,,,\n";
        let geojson = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"name": "Texas"},
                 "geometry": {"type": "Polygon", "coordinates": []}},
                {"type": "Feature", "properties": {"name": "Nevada"},
                 "geometry": {"type": "Polygon", "coordinates": []}}
            ]
        }"#;

        let model = build_map_model(csv, geojson).unwrap();
        assert_eq!(model.regions[0].style.fill_color, "#3CB371");
        assert!(model.regions[0].popup_html.contains("Contact: Acme"));
        assert_eq!(model.regions[1].style.fill_color, "#dddddd");
        assert_eq!(model.markers.len(), 1);
        assert!(model.markers[0].popup_html.starts_with("<b>Houston, Texas</b>"));
    }
}
