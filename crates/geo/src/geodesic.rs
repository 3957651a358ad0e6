//! Ellipsoidal distance on the WGS-84 ellipsoid.
//!
//! Uses Karney's algorithm as implemented by `geo::Geodesic`, which
//! converges for every pair of points, antipodes included.

use crate::Coordinate;
use geo::{Distance, Geodesic, Point};

/// Geodesic distance between two coordinates in kilometers.
///
/// # Example
/// ```
/// use nursery_geo::{geodesic_distance, Coordinate};
///
/// let a = Coordinate::new(20.56, 84.14);
/// assert!(geodesic_distance(&a, &a).abs() < 1e-9);
/// ```
#[inline]
pub fn geodesic_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    Geodesic::distance(Point::from(*from), Point::from(*to)) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haversine_distance;
    use proptest::prelude::*;

    const FLINDERS_PEAK: Coordinate = Coordinate::new(-37.951_033_416_7, 144.424_867_888_9);
    const BUNINYONG: Coordinate = Coordinate::new(-37.652_821_138_9, 143.926_495_527_8);

    #[test]
    fn test_flinders_peak_to_buninyong() {
        // Reference value from Vincenty (1975): 54 972.271 m
        let meters = geodesic_distance(&FLINDERS_PEAK, &BUNINYONG) * 1000.0;
        assert!((meters - 54_972.271).abs() < 1.0, "got {} m", meters);
    }

    #[test]
    fn test_nearby_nurseries() {
        let a = Coordinate::new(20.56, 84.14);
        let b = Coordinate::new(20.60, 84.20);
        let km = geodesic_distance(&a, &b);
        assert!(km > 7.0 && km < 8.0, "got {} km", km);
    }

    #[test]
    fn test_same_point_zero_distance() {
        let a = Coordinate::new(20.56, 84.14);
        assert!(geodesic_distance(&a, &a).abs() < 1e-9);
    }

    #[test]
    fn test_equatorial_points() {
        // Along the equator the geodesic is the equator itself.
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);
        let expected = 6_378.137 * 1.0_f64.to_radians();
        assert!((geodesic_distance(&a, &b) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_nearly_antipodal_on_equator() {
        // Karney (2013) reference: 19 980.862 km. Past the lift-off point the
        // shortest path leaves the equator, so it is shorter than a·λ.
        let km = geodesic_distance(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 179.5));
        assert!((km - 19_980.862).abs() < 0.01, "got {} km", km);
    }

    #[test]
    fn test_close_to_haversine() {
        let a = Coordinate::new(20.56, 84.14);
        let b = Coordinate::new(20.2961, 85.8245);
        let geodesic = geodesic_distance(&a, &b);
        let spherical = haversine_distance(&a, &b);
        assert!(((geodesic - spherical) / spherical).abs() < 0.005);
    }

    proptest! {
        #[test]
        fn prop_symmetric(
            lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
        ) {
            let a = Coordinate::new(lat1, lon1);
            let b = Coordinate::new(lat2, lon2);
            let d1 = geodesic_distance(&a, &b);
            let d2 = geodesic_distance(&b, &a);
            prop_assert!((d1 - d2).abs() < 1e-6, "{} vs {}", d1, d2);
        }

        #[test]
        fn prop_non_negative_and_bounded(
            lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
        ) {
            let d = geodesic_distance(&Coordinate::new(lat1, lon1), &Coordinate::new(lat2, lon2));
            prop_assert!(d >= 0.0);
            prop_assert!(d <= 20_004.0);
        }
    }
}
