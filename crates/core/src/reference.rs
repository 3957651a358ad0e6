//! Reference point resolution
//!
//! The point distances are measured from. A manual override wins over the
//! configured location, which defaults to Khariar town. There is no check
//! that the point lies inside the boundary.

use crate::config::{Config, LocationConfig};
use crate::error::Result;
use nursery_geo::Coordinate;
use serde::Serialize;

/// Where the reference point came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointSource {
    /// Built-in default
    Default,
    /// `[location]` in the config file
    Config,
    /// Entered on the command line
    Manual,
}

/// The point distances are measured from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferencePoint {
    pub coordinate: Coordinate,
    pub source: PointSource,
}

impl ReferencePoint {
    /// Pick the manual point if given, otherwise the configured one
    pub fn resolve(config: &Config, manual: Option<Coordinate>) -> Result<Self> {
        let (coordinate, source) = match (manual, &config.schema.location) {
            (Some(coordinate), _) => (coordinate, PointSource::Manual),
            (None, Some(location)) => (location.coordinate(), PointSource::Config),
            (None, None) => (LocationConfig::default().coordinate(), PointSource::Default),
        };

        Ok(Self {
            coordinate: coordinate.validated()?,
            source,
        })
    }
}
