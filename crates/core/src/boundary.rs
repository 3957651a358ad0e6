//! Boundary file loading

use crate::error::{Error, Result, ResultExt};
use nursery_geo::Boundary;
use std::path::Path;
use tracing::debug;

/// Read and parse a GeoJSON boundary file
pub fn load_boundary(path: &Path) -> Result<Boundary> {
    debug!(path = %path.display(), "Loading boundary");
    let contents = std::fs::read_to_string(path).map_err(|e| Error::from_io_at(e, path))?;
    debug!(path = %path.display(), bytes = contents.len(), "Read boundary file");

    let boundary = Boundary::parse(&contents)
        .map_err(Error::from)
        .context(format!("In boundary file {}", path.display()))?;

    debug!(polygons = boundary.polygon_count(), "Boundary parsed");
    Ok(boundary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_load_polygon() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boundary.geojson");
        std::fs::write(
            &path,
            r#"{"type": "Polygon", "coordinates": [[[83.9, 20.4], [84.3, 20.4], [84.3, 20.7], [83.9, 20.4]]]}"#,
        )
        .unwrap();

        let boundary = load_boundary(&path).unwrap();
        assert_eq!(boundary.bounding_box().corners(), [[20.4, 83.9], [20.7, 84.3]]);
    }

    #[test]
    fn test_load_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boundary.geojson");
        std::fs::write(&path, "{ not geojson").unwrap();

        let err = load_boundary(&path).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidBoundary);
        assert!(err.context.unwrap().contains("boundary.geojson"));
    }

    #[test]
    fn test_load_missing() {
        let err = load_boundary(Path::new("/no/such/boundary.geojson")).unwrap_err();
        assert_eq!(err.code, ErrorCode::FileNotFound);
    }
}
