//! Nearest-facility lookup.
//!
//! Every call is a full linear scan: the collections this is used for hold
//! a few dozen records, and the distance annotation has to be computed for
//! every record anyway for display.

use crate::{Coordinate, DistanceMethod, GeoError, Result};
use serde::Serialize;

/// Anything with a position on the map.
pub trait Located {
    /// The record's coordinate.
    fn coordinate(&self) -> Coordinate;
}

impl Located for Coordinate {
    fn coordinate(&self) -> Coordinate {
        *self
    }
}

/// Distance from the reference point to one record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceAnnotation {
    /// Position of the record in the input
    pub index: usize,
    /// Distance in kilometers
    pub distance_km: f64,
}

/// The record closest to the reference point.
#[derive(Debug)]
pub struct Nearest<'a, T> {
    pub item: &'a T,
    pub index: usize,
    pub distance_km: f64,
}

/// Finds the record closest to `reference`.
///
/// Ties go to the record that appears first in `items`.
///
/// # Errors
/// Returns [`GeoError::EmptyDataset`] if `items` is empty.
///
/// # Example
/// ```
/// use nursery_geo::{locate_nearest, Coordinate, DistanceMethod};
///
/// let nurseries = [Coordinate::new(20.56, 84.14), Coordinate::new(20.60, 84.20)];
/// let reference = Coordinate::new(20.56, 84.14);
///
/// let nearest = locate_nearest(&nurseries, &reference, DistanceMethod::Geodesic).unwrap();
/// assert_eq!(nearest.index, 0);
/// assert!(nearest.distance_km < 0.005);
/// ```
pub fn locate_nearest<'a, T: Located>(
    items: &'a [T],
    reference: &Coordinate,
    method: DistanceMethod,
) -> Result<Nearest<'a, T>> {
    let mut best: Option<Nearest<'a, T>> = None;

    for (index, item) in items.iter().enumerate() {
        let distance_km = method.distance_km(reference, &item.coordinate());
        // strict comparison keeps the first of equal distances
        if best.as_ref().is_none_or(|b| distance_km < b.distance_km) {
            best = Some(Nearest { item, index, distance_km });
        }
    }

    best.ok_or(GeoError::EmptyDataset)
}

/// Distance from `reference` to every record, in input order.
pub fn annotate_distances<T: Located + Sync>(
    items: &[T],
    reference: &Coordinate,
    method: DistanceMethod,
) -> Vec<DistanceAnnotation> {
    let annotate = |(index, item): (usize, &T)| DistanceAnnotation {
        index,
        distance_km: method.distance_km(reference, &item.coordinate()),
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items.par_iter().enumerate().map(annotate).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items.iter().enumerate().map(annotate).collect()
    }
}

/// Annotations sorted closest first, optionally truncated to `limit`.
///
/// The sort is stable, so records at equal distance keep their input order.
pub fn rank_by_distance<T: Located + Sync>(
    items: &[T],
    reference: &Coordinate,
    method: DistanceMethod,
    limit: Option<usize>,
) -> Vec<DistanceAnnotation> {
    let mut ranked = annotate_distances(items, reference, method);
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    if let Some(max) = limit {
        ranked.truncate(max);
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const KHARIAR: Coordinate = Coordinate::new(20.5600, 84.1400);

    fn sample() -> Vec<Coordinate> {
        vec![
            Coordinate::new(20.6000, 84.2000),
            Coordinate::new(20.4500, 83.9800),
            Coordinate::new(20.5650, 84.1450),
            Coordinate::new(20.7000, 84.3000),
        ]
    }

    #[test]
    fn test_example_from_field_data() {
        let records = [Coordinate::new(20.56, 84.14), Coordinate::new(20.60, 84.20)];
        let nearest = locate_nearest(&records, &KHARIAR, DistanceMethod::Geodesic).unwrap();
        assert_eq!(nearest.index, 0);
        assert!(nearest.distance_km < 0.005);
        assert_eq!(format!("{:.2}", nearest.distance_km), "0.00");
    }

    #[test]
    fn test_picks_closest() {
        let records = sample();
        let nearest = locate_nearest(&records, &KHARIAR, DistanceMethod::Geodesic).unwrap();
        assert_eq!(nearest.index, 2);
        assert_eq!(*nearest.item, records[2]);
    }

    #[test]
    fn test_ties_go_to_first_occurrence() {
        let twin = Coordinate::new(20.60, 84.20);
        let records = [Coordinate::new(21.0, 85.0), twin, twin];
        let nearest = locate_nearest(&records, &KHARIAR, DistanceMethod::Geodesic).unwrap();
        assert_eq!(nearest.index, 1);
    }

    #[test]
    fn test_nearly_antipodal_records() {
        // True distances from (0, 0): 19 980.862 km and 19 961.811 km.
        let origin = Coordinate::new(0.0, 0.0);
        let records = [Coordinate::new(0.0, 179.5), Coordinate::new(0.0, 179.32)];
        let nearest = locate_nearest(&records, &origin, DistanceMethod::Geodesic).unwrap();
        assert_eq!(nearest.index, 1);
        assert!((nearest.distance_km - 19_961.811).abs() < 0.01, "got {} km", nearest.distance_km);
    }

    #[test]
    fn test_empty_dataset_is_error() {
        let records: Vec<Coordinate> = Vec::new();
        let err = locate_nearest(&records, &KHARIAR, DistanceMethod::Geodesic).unwrap_err();
        assert!(matches!(err, GeoError::EmptyDataset));
    }

    #[test]
    fn test_annotations_keep_input_order() {
        let records = sample();
        let annotations = annotate_distances(&records, &KHARIAR, DistanceMethod::Haversine);
        assert_eq!(annotations.len(), records.len());
        for (i, annotation) in annotations.iter().enumerate() {
            assert_eq!(annotation.index, i);
        }
    }

    #[test]
    fn test_rank_sorted_and_truncated() {
        let records = sample();
        let ranked = rank_by_distance(&records, &KHARIAR, DistanceMethod::Geodesic, Some(3));
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].index, 2);
        for pair in ranked.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
    }

    #[test]
    fn test_rank_matches_nearest() {
        let records = sample();
        let ranked = rank_by_distance(&records, &KHARIAR, DistanceMethod::Geodesic, None);
        let nearest = locate_nearest(&records, &KHARIAR, DistanceMethod::Geodesic).unwrap();
        assert_eq!(ranked[0].index, nearest.index);
    }

    fn coordinate() -> impl Strategy<Value = Coordinate> {
        (19.0f64..22.0, 82.0f64..86.0).prop_map(|(lat, lng)| Coordinate::new(lat, lng))
    }

    proptest! {
        #[test]
        fn prop_nearest_is_minimum(
            records in prop::collection::vec(coordinate(), 1..40),
            reference in coordinate(),
        ) {
            let nearest = locate_nearest(&records, &reference, DistanceMethod::Geodesic).unwrap();
            for annotation in annotate_distances(&records, &reference, DistanceMethod::Geodesic) {
                prop_assert!(nearest.distance_km <= annotation.distance_km);
            }
        }
    }
}
