//! `validate`: load every input and report what was found.

use crate::session::{boundary, Session};
use nursery_cli::output::{format_count, format_duration, print_json, Status};
use nursery_cli::OutputFormat;
use nursery_core::config::Config;
use nursery_geo::Located;
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Serialize)]
struct ValidationReport {
    config: Option<String>,
    dataset: String,
    nurseries: usize,
    boundary: String,
    polygons: usize,
    bounds: [[f64; 2]; 2],
    /// Nurseries outside the boundary polygons
    outside_boundary: Vec<String>,
}

pub fn run(config: &Config, format: OutputFormat) -> anyhow::Result<()> {
    let started = Instant::now();
    let session = Session::load(config, None)?;
    let boundary = boundary(config)?;

    let outside_boundary = session
        .nurseries
        .iter()
        .filter(|n| !boundary.contains(&n.coordinate()))
        .map(|n| n.name.clone())
        .collect();

    let report = ValidationReport {
        config: config.path.as_ref().map(|p| p.display().to_string()),
        dataset: config.dataset_path().display().to_string(),
        nurseries: session.nurseries.len(),
        boundary: config.boundary_path().display().to_string(),
        polygons: boundary.polygon_count(),
        bounds: boundary.bounding_box().corners(),
        outside_boundary,
    };

    if format.is_json() {
        print_json(&report)?;
        return Ok(());
    }

    Status::header("Validation");
    Status::success(&format!(
        "Config: {}",
        report.config.as_deref().unwrap_or("built-in defaults")
    ));
    Status::success(&format!(
        "Dataset: {} ({})",
        report.dataset,
        format_count(report.nurseries, "nursery", "nurseries")
    ));
    Status::success(&format!(
        "Boundary: {} ({})",
        report.boundary,
        format_count(report.polygons, "polygon", "polygons")
    ));
    if report.nurseries == 0 {
        Status::warning("Dataset has no rows; nearest lookups will fail");
    }
    for name in &report.outside_boundary {
        Status::warning(&format!("{} lies outside the boundary", name));
    }
    Status::info(&format!("Checked in {}", format_duration(started.elapsed())));

    Ok(())
}
