//! `nearest`: print the closest nursery.

use crate::session::Session;
use crate::summary::NearestSummary;
use nursery_cli::output::print_json;
use nursery_cli::OutputFormat;
use nursery_core::config::Config;
use nursery_geo::Coordinate;

pub fn run(config: &Config, manual: Option<Coordinate>, format: OutputFormat) -> anyhow::Result<()> {
    let session = Session::load(config, manual)?;
    let nearest = session.nearest()?;
    let summary = NearestSummary::new(session.reference, &nearest);

    match format {
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Text => summary.print_text(),
    }

    Ok(())
}
