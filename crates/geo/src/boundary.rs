//! Region boundary parsing.
//!
//! The boundary is drawn on the map for context and used by `validate` to
//! flag nurseries outside the region. Nearest lookups ignore it.

use crate::{Coordinate, GeoError, Result};
use geo::{BoundingRect, Contains, Coord, LineString, MultiPolygon, Point, Polygon, Rect};
use geojson::{GeoJson, Geometry, PolygonType, Value};
use serde::Serialize;

/// Axis-aligned extent in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    /// Builds a box from `[[south, west], [north, east]]` corners.
    pub fn from_corners([[south, west], [north, east]]: [[f64; 2]; 2]) -> Self {
        Self { south, west, north, east }
    }

    /// Corners in the `[[lat, lng], [lat, lng]]` order Leaflet's `fitBounds` expects.
    pub fn corners(&self) -> [[f64; 2]; 2] {
        [[self.south, self.west], [self.north, self.east]]
    }
}

impl From<Rect<f64>> for BoundingBox {
    fn from(rect: Rect<f64>) -> Self {
        Self {
            south: rect.min().y,
            west: rect.min().x,
            north: rect.max().y,
            east: rect.max().x,
        }
    }
}

/// Boundary of an administrative region, parsed from GeoJSON.
#[derive(Debug, Clone)]
pub struct Boundary {
    polygons: MultiPolygon<f64>,
    bounds: BoundingBox,
    raw: serde_json::Value,
}

impl Boundary {
    /// Parses a GeoJSON document (FeatureCollection, Feature or Geometry).
    ///
    /// Polygon and MultiPolygon geometries are collected, including those
    /// nested inside GeometryCollections. Other geometry types are kept in
    /// the raw document for display but contribute no polygons.
    pub fn parse(input: &str) -> Result<Self> {
        let raw: serde_json::Value = serde_json::from_str(input)?;
        let geojson = GeoJson::from_json_value(raw.clone())?;

        let geometries = match geojson {
            GeoJson::FeatureCollection(fc) => {
                fc.features.into_iter().filter_map(|f| f.geometry).collect()
            }
            GeoJson::Feature(f) => f.geometry.into_iter().collect(),
            GeoJson::Geometry(g) => vec![g],
        };

        let polygons = only_polygons(geometries)
            .into_iter()
            .map(to_polygon)
            .collect::<Result<Vec<_>>>()?;
        let polygons = MultiPolygon::new(polygons);

        let bounds = polygons
            .bounding_rect()
            .map(BoundingBox::from)
            .ok_or_else(|| {
                GeoError::InvalidBoundary("no Polygon or MultiPolygon geometry found".to_string())
            })?;

        Ok(Self { polygons, bounds, raw })
    }

    /// The parsed polygons.
    pub fn polygons(&self) -> &MultiPolygon<f64> {
        &self.polygons
    }

    /// Number of polygons in the boundary.
    pub fn polygon_count(&self) -> usize {
        self.polygons.0.len()
    }

    /// The document as it was read, for embedding in a map layer.
    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }

    /// Extent of all polygons.
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    /// True if the coordinate lies strictly inside the region (holes excluded).
    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.polygons.contains(&Point::from(*coord))
    }
}

fn only_polygons(geometries: Vec<Geometry>) -> Vec<PolygonType> {
    geometries
        .into_iter()
        .flat_map(|g| match g.value {
            Value::Polygon(p) => vec![p],
            Value::MultiPolygon(mp) => mp,
            Value::GeometryCollection(gc) => only_polygons(gc),
            _ => Vec::new(),
        })
        .collect()
}

fn to_polygon(rings: PolygonType) -> Result<Polygon<f64>> {
    let mut rings = rings.into_iter().map(to_ring);
    let exterior = match rings.next() {
        Some(ring) => ring?,
        None => return Err(GeoError::InvalidBoundary("polygon has no rings".to_string())),
    };
    if exterior.0.is_empty() {
        return Err(GeoError::InvalidBoundary("polygon has an empty exterior ring".to_string()));
    }
    let interiors = rings.collect::<Result<Vec<_>>>()?;
    // Polygon::new closes any ring left open.
    Ok(Polygon::new(exterior, interiors))
}

// GeoJSON positions are [longitude, latitude].
fn to_ring(positions: Vec<Vec<f64>>) -> Result<LineString<f64>> {
    positions
        .into_iter()
        .map(|p| match p.as_slice() {
            [lng, lat, ..] => {
                let coord = Coordinate::new(*lat, *lng).validated()?;
                Ok(Coord { x: coord.longitude, y: coord.latitude })
            }
            _ => Err(GeoError::InvalidBoundary(format!(
                "position {:?} needs at least two values",
                p
            ))),
        })
        .collect::<Result<Vec<_>>>()
        .map(LineString::new)
}
