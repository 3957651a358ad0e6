//! Nursery dataset loading
//!
//! The dataset is a CSV table with a header row. Extra columns are ignored;
//! the required ones are checked before any row is parsed so a malformed
//! table is rejected without partial results.

use crate::error::{Error, Result};
use nursery_geo::{Coordinate, Located};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Columns every dataset must have, in display order
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Name",
    "Latitude",
    "Longitude",
    "Capacity",
    "PlantsAvailable",
    "Contact",
];

/// A single nursery row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nursery {
    #[serde(rename(deserialize = "Name"))]
    pub name: String,
    #[serde(rename(deserialize = "Latitude"))]
    pub latitude: f64,
    #[serde(rename(deserialize = "Longitude"))]
    pub longitude: f64,
    #[serde(rename(deserialize = "Capacity"))]
    pub capacity: u64,
    #[serde(rename(deserialize = "PlantsAvailable"))]
    pub plants_available: u64,
    #[serde(rename(deserialize = "Contact"))]
    pub contact: String,
}

impl Located for Nursery {
    fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Load nurseries from a CSV file
pub fn load_nurseries(path: &Path) -> Result<Vec<Nursery>> {
    debug!(path = %path.display(), "Loading nursery dataset");
    let file = File::open(path).map_err(|e| Error::from_io_at(e, path))?;
    read_nurseries(file)
}

/// Parse nurseries from any CSV source
pub fn read_nurseries<R: Read>(reader: R) -> Result<Vec<Nursery>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    check_columns(&headers)?;

    let mut nurseries = Vec::new();
    for (i, record) in rdr.deserialize::<Nursery>().enumerate() {
        let row = i + 1;
        let nursery = record.map_err(|e| Error::invalid_record(row, e.to_string()).with_source(e))?;
        nursery
            .coordinate()
            .validated()
            .map_err(|e| Error::invalid_record(row, e.to_string()))?;
        nurseries.push(nursery);
    }

    debug!(count = nurseries.len(), "Nursery dataset loaded");
    Ok(nurseries)
}

/// Fail with `MissingColumns` unless every required column is present
pub fn check_columns(headers: &csv::StringRecord) -> Result<()> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| !headers.iter().any(|h| h == *required))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::missing_columns(&REQUIRED_COLUMNS, &missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    const SAMPLE: &str = "\
Name,Latitude,Longitude,Capacity,PlantsAvailable,Contact
Khariar Central Nursery,20.5600,84.1400,50000,12000,9437000001
Sinapali Nursery,20.6000,84.2000,30000,8000,9437000002
";

    #[test]
    fn test_read_sample() {
        let nurseries = read_nurseries(SAMPLE.as_bytes()).unwrap();
        assert_eq!(nurseries.len(), 2);
        assert_eq!(nurseries[0].name, "Khariar Central Nursery");
        assert_eq!(nurseries[0].capacity, 50000);
        assert_eq!(nurseries[1].plants_available, 8000);
        assert_eq!(nurseries[1].contact, "9437000002");
        assert_eq!(nurseries[1].coordinate(), Coordinate::new(20.60, 84.20));
    }

    #[test]
    fn test_extra_columns_and_reordering() {
        let input = "\
Contact,Block,PlantsAvailable,Capacity,Longitude,Latitude,Name
 555-0101 ,Khariar, 10 , 20 ,84.14,20.56, Komna Nursery
";
        let nurseries = read_nurseries(input.as_bytes()).unwrap();
        assert_eq!(nurseries[0].name, "Komna Nursery");
        assert_eq!(nurseries[0].contact, "555-0101");
        assert_eq!(nurseries[0].capacity, 20);
    }

    #[test]
    fn test_missing_columns_reported_before_rows() {
        // The data row is malformed too; the header check must win.
        let input = "Name,Latitude,Capacity,Contact\nA,not-a-number,1,x\n";
        let err = read_nurseries(input.as_bytes()).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingColumns);
        assert_eq!(
            err.context.as_deref(),
            Some("Missing columns: Longitude, PlantsAvailable")
        );
        assert!(err.message.contains("Name, Latitude, Longitude, Capacity, PlantsAvailable, Contact"));
    }

    #[test]
    fn test_invalid_number_names_row() {
        let input = "\
Name,Latitude,Longitude,Capacity,PlantsAvailable,Contact
A,20.5,84.1,10,5,x
B,twenty,84.1,10,5,y
";
        let err = read_nurseries(input.as_bytes()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRecord);
        assert!(err.message.contains("row 2"), "{}", err.message);
    }

    #[test]
    fn test_out_of_range_coordinate_rejected() {
        let input = "\
Name,Latitude,Longitude,Capacity,PlantsAvailable,Contact
A,120.0,84.1,10,5,x
";
        let err = read_nurseries(input.as_bytes()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRecord);
        assert!(err.message.contains("row 1"));
    }

    #[test]
    fn test_headers_only_is_empty() {
        let input = "Name,Latitude,Longitude,Capacity,PlantsAvailable,Contact\n";
        assert!(read_nurseries(input.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_nurseries(Path::new("/no/such/nurseries.csv")).unwrap_err();
        assert_eq!(err.code, ErrorCode::FileNotFound);
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nurseries.csv");
        std::fs::write(&path, SAMPLE).unwrap();
        assert_eq!(load_nurseries(&path).unwrap().len(), 2);
    }

    #[test]
    fn test_serializes_snake_case() {
        let nursery = &read_nurseries(SAMPLE.as_bytes()).unwrap()[0];
        let json = serde_json::to_value(nursery).unwrap();
        assert_eq!(json["plants_available"], 12000);
        assert_eq!(json["name"], "Khariar Central Nursery");
    }
}
