//! Everything a command needs, loaded fresh on each run.

use nursery_core::prelude::*;
use nursery_geo::{locate_nearest, Boundary, Coordinate, DistanceMethod, Nearest};
use nursery_telemetry::Timer;
use tracing::info;

pub struct Session {
    pub nurseries: Vec<Nursery>,
    pub reference: ReferencePoint,
    pub method: DistanceMethod,
}

impl Session {
    /// Load the dataset and resolve the reference point.
    ///
    /// The dataset is read first so a missing column stops the run before
    /// anything else is looked at.
    pub fn load(config: &Config, manual: Option<Coordinate>) -> Result<Self> {
        let timer = Timer::start("load_dataset");
        let nurseries = load_nurseries(&config.dataset_path())?;
        timer.stop();

        let reference = ReferencePoint::resolve(config, manual)?;
        info!(
            nurseries = nurseries.len(),
            reference = %reference.coordinate,
            source = ?reference.source,
            "Session loaded"
        );

        Ok(Self {
            nurseries,
            reference,
            method: config.schema.distance.method,
        })
    }

    /// The nursery closest to the reference point
    pub fn nearest(&self) -> Result<Nearest<'_, Nursery>> {
        let timer = Timer::start("locate_nearest");
        let nearest = locate_nearest(&self.nurseries, &self.reference.coordinate, self.method)?;
        timer.stop();

        info!(
            name = %nearest.item.name,
            distance_km = nearest.distance_km,
            "Nearest nursery located"
        );
        Ok(nearest)
    }
}

/// Load the boundary configured for this run
pub fn boundary(config: &Config) -> Result<Boundary> {
    let timer = Timer::start("load_boundary");
    let boundary = load_boundary(&config.boundary_path())?;
    timer.stop();
    Ok(boundary)
}
