//! Static city coordinate lookup.
//!
//! Real geocoding is out of scope; the marker layer only covers the
//! largest demo cities. Unknown (state, city) pairs return `None` and the
//! caller simply omits the marker.

use serde::Serialize;

/// WGS84 coordinate, Leaflet order (latitude first).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Look up the coordinate for a (state, city) pair.
pub fn city_lat_lng(state: &str, city: &str) -> Option<LatLng> {
    let (lat, lng) = match (state, city) {
        ("California", "Los Angeles") => (34.0522, -118.2437),
        ("California", "San Diego") => (32.7157, -117.1611),
        ("California", "San Francisco") => (37.7749, -122.4194),
        ("New York", "New York") => (40.7128, -74.0060),
        ("New York", "Buffalo") => (42.8864, -78.8784),
        ("New York", "Rochester") => (43.1566, -77.6088),
        ("Texas", "Houston") => (29.7604, -95.3698),
        ("Texas", "San Antonio") => (29.4241, -98.4936),
        ("Texas", "Dallas") => (32.7767, -96.7970),
        _ => return None,
    };
    Some(LatLng { lat, lng })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_city() {
        let coords = city_lat_lng("Texas", "Houston").unwrap();
        assert_eq!(coords, LatLng { lat: 29.7604, lng: -95.3698 });
    }

    #[test]
    fn test_unknown_city_is_none() {
        assert_eq!(city_lat_lng("Ohio", "Columbus"), None);
    }

    #[test]
    fn test_city_must_match_its_state() {
        // Houston exists in the table, but not under California.
        assert_eq!(city_lat_lng("California", "Houston"), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(city_lat_lng("texas", "Houston"), None);
    }
}
