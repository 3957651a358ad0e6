//! Configuration schema definitions

use crate::error::{Error, ErrorCode, Result};
use nursery_geo::{Coordinate, DistanceMethod};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub data: DataConfig,

    /// `None` when the file has no `[location]` section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationConfig>,

    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub distance: DistanceConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigSchema {
    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        if let Some(location) = &self.location {
            if !location.coordinate().is_valid() {
                return Err(invalid_value(format!(
                    "location ({}, {}) is out of range",
                    location.latitude, location.longitude
                )));
            }
        }
        if self.map.zoom > MAX_ZOOM {
            return Err(invalid_value(format!(
                "map.zoom must be between 0 and {}, got {}",
                MAX_ZOOM, self.map.zoom
            )));
        }
        if self.map.width == 0 || self.map.height == 0 {
            return Err(invalid_value("map.width and map.height must be positive"));
        }
        if let Some([[south, west], [north, east]]) = self.map.bounds {
            let corners_valid = Coordinate::new(south, west).is_valid()
                && Coordinate::new(north, east).is_valid();
            if !corners_valid || south > north || west > east {
                return Err(invalid_value(
                    "map.bounds must be [[south, west], [north, east]] in range",
                ));
            }
        }
        Ok(())
    }
}

fn invalid_value(message: impl Into<String>) -> Error {
    Error::new(ErrorCode::InvalidConfigValue, message)
}

/// Input file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Nursery table (CSV with a header row)
    #[serde(default = "default_dataset")]
    pub dataset: PathBuf,

    /// Region outline (GeoJSON)
    #[serde(default = "default_boundary")]
    pub boundary: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
            boundary: default_boundary(),
        }
    }
}

fn default_dataset() -> PathBuf {
    PathBuf::from("nurseries.csv")
}

fn default_boundary() -> PathBuf {
    PathBuf::from("khariar_boundary.geojson")
}

/// Reference point used when no coordinates are given on the command line
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

impl LocationConfig {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}

// Khariar town
fn default_latitude() -> f64 {
    20.5600
}

fn default_longitude() -> f64 {
    84.1400
}

/// Highest zoom level the tile layer serves
pub const MAX_ZOOM: u8 = 19;

/// Map page settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Page heading
    #[serde(default = "default_title")]
    pub title: String,

    /// Region name shown in the heading and on the boundary layer
    #[serde(default = "default_region")]
    pub region: String,

    /// Initial zoom level
    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Map width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Map height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Fixed view bounds `[[south, west], [north, east]]`; the boundary extent is used when unset
    #[serde(default)]
    pub bounds: Option<[[f64; 2]; 2]>,

    /// Where `map` writes the page when `--output` is not given
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            region: default_region(),
            zoom: default_zoom(),
            width: default_width(),
            height: default_height(),
            bounds: None,
            output: default_output(),
        }
    }
}

fn default_title() -> String {
    "Public Nursery Locator".to_string()
}

fn default_region() -> String {
    "Khariar Division".to_string()
}

fn default_zoom() -> u8 {
    10
}

fn default_width() -> u32 {
    1000
}

fn default_height() -> u32 {
    600
}

fn default_output() -> PathBuf {
    PathBuf::from("nursery_map.html")
}

/// Distance computation settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct DistanceConfig {
    #[serde(default)]
    pub method: DistanceMethod,
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
