//! "Nearest Nursery Details" block shared by `nearest` and `map`.

use nursery_cli::output::{format_distance, Status};
use nursery_core::dataset::Nursery;
use nursery_core::reference::{PointSource, ReferencePoint};
use nursery_geo::Nearest;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NearestSummary<'a> {
    pub reference: ReferencePoint,
    pub nursery: &'a Nursery,
    pub index: usize,
    pub distance_km: f64,
}

impl<'a> NearestSummary<'a> {
    pub fn new(reference: ReferencePoint, nearest: &Nearest<'a, Nursery>) -> Self {
        Self {
            reference,
            nursery: nearest.item,
            index: nearest.index,
            distance_km: nearest.distance_km,
        }
    }

    pub fn print_text(&self) {
        let source = match self.reference.source {
            PointSource::Default => "default location",
            PointSource::Config => "configured location",
            PointSource::Manual => "manual location",
        };
        Status::info(&format!("Reference point: {} ({})", self.reference.coordinate, source));

        Status::header("Nearest Nursery Details");
        Status::field("Name", &self.nursery.name);
        Status::field("Distance", format_distance(self.distance_km));
        Status::field("Capacity", self.nursery.capacity);
        Status::field("Plants Available", self.nursery.plants_available);
        Status::field("Contact", &self.nursery.contact);
    }
}
