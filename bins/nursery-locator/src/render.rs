//! Map page rendering.
//!
//! The page is a single self-contained HTML file: Leaflet and the locate
//! control come from a CDN, everything else (boundary, markers, summary) is
//! inlined into the template.

use handlebars::{html_escape, Handlebars};
use nursery_core::config::MapConfig;
use nursery_core::dataset::Nursery;
use nursery_core::{Error, ErrorCode, Result};
use nursery_geo::{Boundary, BoundingBox, Coordinate, DistanceAnnotation, Nearest};
use serde::Serialize;

const MAP_TEMPLATE: &str = include_str!("../templates/map.html.hbs");

/// Inputs for one map page
pub struct MapView<'a> {
    pub settings: &'a MapConfig,
    pub boundary: &'a Boundary,
    pub bounds: BoundingBox,
    pub nurseries: &'a [Nursery],
    pub distances: &'a [DistanceAnnotation],
    pub reference: Coordinate,
    pub nearest: &'a Nearest<'a, Nursery>,
}

#[derive(Serialize)]
struct Marker {
    lat: f64,
    lng: f64,
    popup: String,
    color: &'static str,
}

#[derive(Serialize)]
struct PageData<'a> {
    title: &'a str,
    region: &'a str,
    region_label: String,
    width: u32,
    height: u32,
    zoom: u8,
    center: String,
    bounds: String,
    boundary: String,
    nurseries: String,
    reference_marker: String,
    nearest_marker: String,
    nearest: SummaryData<'a>,
}

#[derive(Serialize)]
struct SummaryData<'a> {
    name: &'a str,
    distance: String,
    capacity: u64,
    plants_available: u64,
    contact: &'a str,
}

/// Render the map page to an HTML string
pub fn render_map(view: &MapView<'_>) -> Result<String> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry
        .register_template_string("map", MAP_TEMPLATE)
        .map_err(|e| Error::new(ErrorCode::TemplateError, format!("Invalid map template: {}", e)))?;

    let nurseries: Vec<Marker> = view
        .nurseries
        .iter()
        .zip(view.distances)
        .map(|(nursery, annotation)| Marker {
            lat: nursery.latitude,
            lng: nursery.longitude,
            popup: nursery_popup(nursery, annotation.distance_km),
            color: "green",
        })
        .collect();

    let nearest = view.nearest.item;
    let nearest_marker = Marker {
        lat: nearest.latitude,
        lng: nearest.longitude,
        popup: nearest_popup(nearest, view.nearest.distance_km),
        color: "red",
    };
    let reference_marker = Marker {
        lat: view.reference.latitude,
        lng: view.reference.longitude,
        popup: "Your Location".to_string(),
        color: "blue",
    };

    let data = PageData {
        title: &view.settings.title,
        region: &view.settings.region,
        region_label: script_json(&view.settings.region)?,
        width: view.settings.width,
        height: view.settings.height,
        zoom: view.settings.zoom,
        center: script_json(&[view.reference.latitude, view.reference.longitude])?,
        bounds: script_json(&view.bounds.corners())?,
        boundary: script_json(view.boundary.raw())?,
        nurseries: script_json(&nurseries)?,
        reference_marker: script_json(&reference_marker)?,
        nearest_marker: script_json(&nearest_marker)?,
        nearest: SummaryData {
            name: &nearest.name,
            distance: format!("{:.2}", view.nearest.distance_km),
            capacity: nearest.capacity,
            plants_available: nearest.plants_available,
            contact: &nearest.contact,
        },
    };

    registry
        .render("map", &data)
        .map_err(|e| Error::render(format!("Failed to render map: {}", e)))
}

fn nursery_popup(nursery: &Nursery, distance_km: f64) -> String {
    format!(
        "<b>{}</b><br>Distance: {:.2} km<br>Capacity: {}<br>Plants: {}<br>Contact: {}",
        html_escape(&nursery.name),
        distance_km,
        nursery.capacity,
        nursery.plants_available,
        html_escape(&nursery.contact),
    )
}

fn nearest_popup(nursery: &Nursery, distance_km: f64) -> String {
    format!(
        "<b>Nearest Nursery:</b><br>{}<br>Distance: {:.2} km<br>Capacity: {}<br>Plants: {}<br>Contact: {}",
        html_escape(&nursery.name),
        distance_km,
        nursery.capacity,
        nursery.plants_available,
        html_escape(&nursery.contact),
    )
}

/// JSON that is safe to inline inside a `<script>` element
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)
        .map_err(|e| Error::render(format!("Failed to encode map data: {}", e)).with_source(e))?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}
