//! Minimal GeoJSON model for the state boundary document.
//!
//! Only `properties.name` is interpreted; geometries pass through as raw
//! JSON so Leaflet receives them byte-for-byte. State names must match the
//! CSV's `state` values exactly (no normalization or abbreviation
//! expansion).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MapDataError;

#[derive(Debug, Clone, Deserialize)]
struct RawFeatureCollection {
    features: Vec<RawFeature>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: RawProperties,
    #[serde(default)]
    geometry: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawProperties {
    #[serde(default)]
    name: Option<String>,
}

/// One named state boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateFeature {
    pub name: String,
    pub geometry: Value,
}

/// Parse the boundary document into named features.
///
/// Features without a `properties.name` are dropped; anything not shaped
/// like a feature collection is an error that aborts the pipeline.
pub fn parse_state_features(geojson_text: &str) -> Result<Vec<StateFeature>, MapDataError> {
    let collection: RawFeatureCollection = serde_json::from_str(geojson_text)?;
    Ok(collection
        .features
        .into_iter()
        .filter_map(|feature| {
            let name = feature.properties.name?;
            Some(StateFeature {
                name,
                geometry: feature.geometry,
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parses_named_features() {
        let doc = json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"name": "California"},
                    "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0]]]}
                },
                {
                    "type": "Feature",
                    "properties": {"name": "Texas"},
                    "geometry": {"type": "MultiPolygon", "coordinates": []}
                }
            ]
        });
        let features = parse_state_features(&doc.to_string()).unwrap();
        let names: Vec<&str> = features.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["California", "Texas"]);
        assert_eq!(features[0].geometry["type"], "Polygon");
    }

    #[test]
    fn test_unnamed_features_are_dropped() {
        let doc = json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {}, "geometry": {"type": "Polygon"}},
                {"type": "Feature", "properties": {"name": "Ohio"}, "geometry": {}}
            ]
        });
        let features = parse_state_features(&doc.to_string()).unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].name, "Ohio");
    }

    #[test]
    fn test_non_collection_is_an_error() {
        assert!(parse_state_features("[1, 2, 3]").is_err());
        assert!(parse_state_features("not json").is_err());
    }
}
