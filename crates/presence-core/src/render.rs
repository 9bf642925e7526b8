//! Render model: everything the map needs, computed ahead of any Leaflet
//! call.
//!
//! `build_map_model` runs the whole pure pipeline (CSV → aggregation,
//! GeoJSON → features) and emits one styled, popup-carrying region per
//! boundary feature plus one circle marker per city with a known
//! coordinate. The browser layer only has to walk the model.

use serde::Serialize;
use serde_json::Value;

use crate::aggregate::{aggregate, StateSummary};
use crate::coords::{city_lat_lng, LatLng};
use crate::error::MapDataError;
use crate::geojson::parse_state_features;
use crate::presence::Presence;
use crate::record::{parse_records, CityRecord};

/// OpenStreetMap base tiles.
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
/// Continental US center.
pub const MAP_CENTER: LatLng = LatLng { lat: 39.82, lng: -98.57 };
pub const INITIAL_ZOOM: f64 = 4.0;

/// Tile layer options, in Leaflet's key casing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileOptions {
    pub max_zoom: u32,
    pub min_zoom: u32,
    pub attribution: &'static str,
}

impl Default for TileOptions {
    fn default() -> Self {
        TileOptions {
            max_zoom: 8,
            min_zoom: 3,
            attribution: "&copy; OpenStreetMap contributors",
        }
    }
}

/// Path options for a state polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionStyle {
    pub fill_color: &'static str,
    pub weight: u32,
    pub opacity: f64,
    pub color: &'static str,
    pub fill_opacity: f64,
}

impl RegionStyle {
    pub fn for_presence(presence: Presence) -> Self {
        RegionStyle {
            fill_color: presence.color(),
            weight: 1,
            opacity: 1.0,
            color: "#aaa",
            fill_opacity: 0.6,
        }
    }
}

/// Circle marker options for a city.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub radius: u32,
    pub fill_color: &'static str,
    pub color: &'static str,
    pub weight: u32,
    pub fill_opacity: f64,
}

impl MarkerStyle {
    pub fn for_presence(presence: Presence) -> Self {
        MarkerStyle {
            radius: 7,
            fill_color: presence.color(),
            color: "#333",
            weight: 1,
            fill_opacity: 0.95,
        }
    }
}

/// One state polygon, styled and captioned.
#[derive(Debug, Clone, Serialize)]
pub struct StateRegion {
    pub name: String,
    pub geometry: Value,
    pub style: RegionStyle,
    pub popup_html: String,
}

/// One city circle marker.
#[derive(Debug, Clone, Serialize)]
pub struct CityMarker {
    pub lat_lng: LatLng,
    pub style: MarkerStyle,
    pub popup_html: String,
}

/// The complete render plan for one map.
#[derive(Debug, Clone, Serialize)]
pub struct MapModel {
    pub regions: Vec<StateRegion>,
    pub markers: Vec<CityMarker>,
}

/// Popup body for a state polygon.
pub fn state_popup_html(name: &str, summary: &StateSummary) -> String {
    let mut popup = format!(
        "<b>{}</b><br>Presence: <span style=\"color:{};\">{}</span>",
        name,
        summary.presence.color(),
        summary.presence.label()
    );
    if !summary.contact.is_empty() {
        popup.push_str(&format!("<br>Contact: {}", summary.contact));
    }
    if !summary.cities.is_empty() {
        popup.push_str("<br><b>Cities:</b><ul style=\"padding-left:1em\">");
        for entry in &summary.cities {
            popup.push_str(&format!(
                "<li>{} <small>({})</small>",
                entry.city,
                entry.presence.label()
            ));
            if !entry.contact.is_empty() {
                popup.push_str(&format!(" \u{2013} {}", entry.contact));
            }
            popup.push_str("</li>");
        }
        popup.push_str("</ul>");
    }
    popup
}

/// Popup body for a city marker.
pub fn city_popup_html(record: &CityRecord) -> String {
    let presence = Presence::parse(&record.presence);
    let mut popup = format!(
        "<b>{}, {}</b><br>Presence: <span style=\"color:{};\">{}</span>",
        record.city,
        record.state,
        presence.color(),
        presence.label()
    );
    if !record.contact.is_empty() {
        popup.push_str(&format!("<br>Contact: {}", record.contact));
    }
    popup
}

/// Parse both inputs and produce the full render plan.
///
/// States present in the boundary document but absent from the dataset
/// render with the default `none` style; (state, city) pairs outside the
/// coordinate table get no marker. Neither case is an error.
pub fn build_map_model(csv_text: &str, geojson_text: &str) -> Result<MapModel, MapDataError> {
    let records = parse_records(csv_text)?;
    let features = parse_state_features(geojson_text)?;
    let states = aggregate(&records);

    let unlisted = StateSummary {
        presence: Presence::None,
        contact: String::new(),
        cities: Vec::new(),
    };

    let regions = features
        .into_iter()
        .map(|feature| {
            let summary = states.get(&feature.name).unwrap_or(&unlisted);
            StateRegion {
                style: RegionStyle::for_presence(summary.presence),
                popup_html: state_popup_html(&feature.name, summary),
                name: feature.name,
                geometry: feature.geometry,
            }
        })
        .collect();

    let markers = records
        .iter()
        .filter(|record| !record.state.is_empty() && !record.city.is_empty())
        .filter_map(|record| {
            let lat_lng = city_lat_lng(&record.state, &record.city)?;
            Some(CityMarker {
                lat_lng,
                style: MarkerStyle::for_presence(Presence::parse(&record.presence)),
                popup_html: city_popup_html(record),
            })
        })
        .collect();

    Ok(MapModel { regions, markers })
}
