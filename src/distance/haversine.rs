//! Great-circle distance estimate.

use super::{DistanceOracle, EdgeCost};
use crate::models::{Coordinates, Point};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometres.
///
/// # Examples
///
/// ```
/// use depot_tour::distance::haversine_km;
/// use depot_tour::models::Coordinates;
///
/// // One degree of latitude is about 111.19 km on a 6371 km sphere.
/// let d = haversine_km(Coordinates::new(0.0, 0.0), Coordinates::new(1.0, 0.0));
/// assert!((d - 111.19).abs() < 0.01);
/// ```
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let phi1 = a.lat().to_radians();
    let phi2 = b.lat().to_radians();
    let dphi = (b.lat() - a.lat()).to_radians();
    let dlambda = (b.lon() - a.lon()).to_radians();
    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Oracle that estimates every pair from coordinates.
///
/// Never answers "unknown"; every cost is tagged
/// [`CostSource::Estimated`](super::CostSource::Estimated).
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineOracle;

impl DistanceOracle for HaversineOracle {
    fn cost(&self, from: &Point, to: &Point) -> Option<EdgeCost> {
        Some(EdgeCost::estimated(haversine_km(
            from.coordinates(),
            to.coordinates(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance() {
        let c = Coordinates::new(28.6, 77.2);
        assert_eq!(haversine_km(c, c), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = Coordinates::new(28.6315, 77.2167);
        let b = Coordinates::new(28.5245, 77.1855);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-12);
    }

    #[test]
    fn test_quarter_meridian() {
        let d = haversine_km(Coordinates::new(0.0, 0.0), Coordinates::new(90.0, 0.0));
        let expected = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;
        assert!((d - expected).abs() < 1e-9);
    }

    #[test]
    fn test_city_scale() {
        // Connaught Place to Qutub Minar is roughly 12 km as the crow flies.
        let d = haversine_km(
            Coordinates::new(28.6315, 77.2167),
            Coordinates::new(28.5245, 77.1855),
        );
        assert!(d > 11.0 && d < 13.5, "got {d}");
    }

    #[test]
    fn test_oracle_marks_estimate() {
        let a = Point::new(1, "A", Coordinates::new(0.0, 0.0));
        let b = Point::new(2, "B", Coordinates::new(0.0, 1.0));
        let cost = HaversineOracle.cost(&a, &b).expect("always defined");
        assert!(cost.is_estimate());
        assert!(cost.value > 111.0);
    }
}
