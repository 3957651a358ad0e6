//! `list`: every nursery with its distance annotation.

use crate::session::Session;
use nursery_cli::output::{format_count, format_distance, print_json, Status};
use nursery_cli::OutputFormat;
use nursery_core::config::Config;
use nursery_core::dataset::Nursery;
use nursery_geo::{annotate_distances, rank_by_distance, Coordinate};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ListedNursery<'a> {
    #[serde(flatten)]
    nursery: &'a Nursery,
    distance_km: f64,
    nearest: bool,
}

pub fn run(
    config: &Config,
    manual: Option<Coordinate>,
    sorted: bool,
    limit: Option<usize>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let session = Session::load(config, manual)?;
    let nearest_index = session.nearest()?.index;

    let annotations = if sorted || limit.is_some() {
        rank_by_distance(&session.nurseries, &session.reference.coordinate, session.method, limit)
    } else {
        annotate_distances(&session.nurseries, &session.reference.coordinate, session.method)
    };

    let rows: Vec<ListedNursery<'_>> = annotations
        .iter()
        .map(|a| ListedNursery {
            nursery: &session.nurseries[a.index],
            distance_km: a.distance_km,
            nearest: a.index == nearest_index,
        })
        .collect();

    if format.is_json() {
        print_json(&rows)?;
        return Ok(());
    }

    Status::info(&format!(
        "{} from {}",
        format_count(session.nurseries.len(), "nursery", "nurseries"),
        session.reference.coordinate
    ));
    Status::header("Nurseries");

    let name_width = rows.iter().map(|r| r.nursery.name.chars().count()).max().unwrap_or(4).max(4);
    println!(
        "  {:<name_width$}  {:>10}  {:>9}  {:>9}  Contact",
        "Name", "Distance", "Capacity", "Plants"
    );
    for row in &rows {
        let line = format!(
            "  {:<name_width$}  {:>10}  {:>9}  {:>9}  {}",
            row.nursery.name,
            format_distance(row.distance_km),
            row.nursery.capacity,
            row.nursery.plants_available,
            row.nursery.contact,
        );
        if row.nearest {
            println!("{} {}", line.green(), "★".yellow());
        } else {
            println!("{}", line);
        }
    }

    Ok(())
}
