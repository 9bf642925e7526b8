use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapDataError {
    #[error("Failed to parse CSV: {0}")]
    Csv(String),

    #[error("Failed to parse GeoJSON: {0}")]
    GeoJson(String),
}

impl From<csv::Error> for MapDataError {
    fn from(err: csv::Error) -> Self {
        MapDataError::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for MapDataError {
    fn from(err: serde_json::Error) -> Self {
        MapDataError::GeoJson(err.to_string())
    }
}
