//! `map`: write the interactive map page.

use crate::render::{render_map, MapView};
use crate::session::{boundary, Session};
use crate::summary::NearestSummary;
use nursery_cli::output::{print_json, Status};
use nursery_cli::OutputFormat;
use nursery_core::config::Config;
use nursery_core::Error;
use nursery_geo::{annotate_distances, BoundingBox, Coordinate};
use nursery_telemetry::Timer;
use std::path::PathBuf;

pub fn run(
    config: &Config,
    manual: Option<Coordinate>,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let session = Session::load(config, manual)?;
    let boundary = boundary(config)?;
    let nearest = session.nearest()?;
    let distances = annotate_distances(&session.nurseries, &session.reference.coordinate, session.method);

    let bounds = config
        .schema
        .map
        .bounds
        .map(BoundingBox::from_corners)
        .unwrap_or_else(|| boundary.bounding_box());

    let timer = Timer::start("render_map");
    let page = render_map(&MapView {
        settings: &config.schema.map,
        boundary: &boundary,
        bounds,
        nurseries: &session.nurseries,
        distances: &distances,
        reference: session.reference.coordinate,
        nearest: &nearest,
    })?;
    timer.stop();

    let output = output.unwrap_or_else(|| config.resolve(&config.schema.map.output));
    std::fs::write(&output, page).map_err(|e| {
        Error::io(format!("Failed to write map to {}: {}", output.display(), e)).with_source(e)
    })?;
    tracing::info!(path = %output.display(), "Map written");

    let summary = NearestSummary::new(session.reference, &nearest);
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "output": output.display().to_string(),
            "nearest": summary,
        }))?,
        OutputFormat::Text => {
            Status::success(&format!("Map written to {}", output.display()));
            summary.print_text();
        }
    }

    Ok(())
}
