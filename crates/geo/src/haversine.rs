//! Spherical great-circle distance.
//!
//! Used when the configured distance method is `haversine`.

use crate::Coordinate;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers.
///
/// # Example
/// ```
/// use nursery_geo::{haversine_distance, Coordinate};
///
/// let berlin = Coordinate::new(52.5200, 13.4050);
/// let paris = Coordinate::new(48.8566, 2.3522);
///
/// let distance = haversine_distance(&berlin, &paris);
/// assert!((distance - 878.0).abs() < 10.0);
/// ```
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let half_d_lat = (lat2 - lat1) / 2.0;
    let half_d_lon = (lon2 - lon1) / 2.0;

    let a = half_d_lat.sin().powi(2) + lat1.cos() * lat2.cos() * half_d_lon.sin().powi(2);
    // Rounding can push `a` just past 1 for antipodes.
    let a = a.min(1.0);

    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const KHARIAR: Coordinate = Coordinate::new(20.5600, 84.1400);
    const BHUBANESWAR: Coordinate = Coordinate::new(20.2961, 85.8245);

    #[test]
    fn test_khariar_to_bhubaneswar() {
        let distance = haversine_distance(&KHARIAR, &BHUBANESWAR);
        // ~178 km as the crow flies
        assert!((distance - 178.0).abs() < 5.0, "Khariar-Bhubaneswar: {}", distance);
    }

    #[test]
    fn test_same_point_zero_distance() {
        assert!(haversine_distance(&KHARIAR, &KHARIAR).abs() < 1e-9);
    }

    #[test]
    fn test_antipodes_half_circumference() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let expected = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((haversine_distance(&a, &b) - expected).abs() < 1e-6);
    }
}
