//! Geospatial utilities for the nursery locator.
//!
//! This crate provides:
//! - Ellipsoidal (WGS-84) geodesic distance via `geo::Geodesic`
//! - Spherical Haversine distance
//! - Boundary polygon parsing from GeoJSON
//! - Nearest-facility lookup over an in-memory collection
//!
//! # Example
//!
//! ```
//! use nursery_geo::{geodesic_distance, Coordinate};
//!
//! let khariar = Coordinate::new(20.5600, 84.1400);
//! let nursery = Coordinate::new(20.6000, 84.2000);
//!
//! let distance_km = geodesic_distance(&khariar, &nursery);
//! assert!(distance_km > 7.0 && distance_km < 8.0);
//! ```

mod boundary;
mod error;
mod geodesic;
mod haversine;
pub mod nearest;

pub use boundary::{Boundary, BoundingBox};
pub use error::{GeoError, GeoErrorCode, Result};
pub use geodesic::geodesic_distance;
pub use haversine::{haversine_distance, EARTH_RADIUS_KM};
pub use nearest::{annotate_distances, locate_nearest, rank_by_distance, DistanceAnnotation, Located, Nearest};

use serde::{Deserialize, Serialize};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if the coordinate has valid values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Returns the coordinate if it is in range, otherwise an `InvalidCoordinate` error.
    pub fn validated(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(GeoError::InvalidCoordinate(format!(
                "({}, {}) is outside latitude [-90, 90] / longitude [-180, 180]",
                self.latitude, self.longitude
            )))
        }
    }

    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

// geo works in (x, y) = (longitude, latitude).
impl From<Coordinate> for geo::Point<f64> {
    fn from(coord: Coordinate) -> Self {
        geo::Point::new(coord.longitude, coord.latitude)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Which Earth model to measure distances on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMethod {
    /// WGS-84 ellipsoid (Karney)
    #[default]
    Geodesic,
    /// Sphere of mean Earth radius
    Haversine,
}

impl DistanceMethod {
    /// Distance between two coordinates in kilometers.
    #[inline]
    pub fn distance_km(self, from: &Coordinate, to: &Coordinate) -> f64 {
        match self {
            DistanceMethod::Geodesic => geodesic_distance(from, to),
            DistanceMethod::Haversine => haversine_distance(from, to),
        }
    }
}
