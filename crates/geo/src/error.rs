//! Error types for the geo crate.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur during geo operations.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Coordinate outside the valid latitude/longitude range
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Boundary file parsed but holds nothing usable
    #[error("Invalid boundary: {0}")]
    InvalidBoundary(String),

    /// Nearest lookup over an empty collection
    #[error("Cannot locate nearest facility in an empty dataset")]
    EmptyDataset,

    /// GeoJSON parsing error
    #[error("GeoJSON parsing error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error code for integration with nursery-core error handling.
/// Range: 5xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Invalid coordinate values
    InvalidCoordinate = 5001,
    /// Boundary without polygons
    InvalidBoundary = 5002,
    /// Empty input collection
    EmptyDataset = 5003,
    /// GeoJSON parsing error
    GeoJsonParsing = 5004,
    /// JSON parsing error
    JsonParsing = 5005,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::InvalidCoordinate(_) => GeoErrorCode::InvalidCoordinate,
            GeoError::InvalidBoundary(_) => GeoErrorCode::InvalidBoundary,
            GeoError::EmptyDataset => GeoErrorCode::EmptyDataset,
            GeoError::GeoJson(_) => GeoErrorCode::GeoJsonParsing,
            GeoError::JsonError(_) => GeoErrorCode::JsonParsing,
        }
    }
}
