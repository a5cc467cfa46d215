//! Oracle composition.

use super::{DistanceOracle, EdgeCost};
use crate::models::Point;

/// Answers from `primary`, consulting `fallback` only when `primary` has no
/// cost for the pair.
///
/// Costs keep the source tag of whichever oracle produced them, so estimates
/// from a [`HaversineOracle`](super::HaversineOracle) fallback remain
/// distinguishable from table costs.
#[derive(Debug, Clone)]
pub struct FallbackOracle<P, F> {
    primary: P,
    fallback: F,
}

impl<P: DistanceOracle, F: DistanceOracle> FallbackOracle<P, F> {
    /// Composes two oracles.
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    /// The preferred oracle.
    pub fn primary(&self) -> &P {
        &self.primary
    }
}

impl<P: DistanceOracle, F: DistanceOracle> DistanceOracle for FallbackOracle<P, F> {
    fn cost(&self, from: &Point, to: &Point) -> Option<EdgeCost> {
        self.primary
            .cost(from, to)
            .or_else(|| self.fallback.cost(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    struct Fixed(Option<f64>);

    impl DistanceOracle for Fixed {
        fn cost(&self, _from: &Point, _to: &Point) -> Option<EdgeCost> {
            self.0.map(EdgeCost::known)
        }
    }

    fn pair() -> (Point, Point) {
        (
            Point::new(1, "A", Coordinates::new(0.0, 0.0)),
            Point::new(2, "B", Coordinates::new(0.0, 1.0)),
        )
    }

    #[test]
    fn test_primary_wins() {
        let (a, b) = pair();
        let o = FallbackOracle::new(Fixed(Some(1.0)), Fixed(Some(2.0)));
        assert_eq!(o.cost(&a, &b).map(|c| c.value), Some(1.0));
    }

    #[test]
    fn test_fallback_used() {
        let (a, b) = pair();
        let o = FallbackOracle::new(Fixed(None), Fixed(Some(2.0)));
        assert_eq!(o.cost(&a, &b).map(|c| c.value), Some(2.0));
    }

    #[test]
    fn test_both_unknown() {
        let (a, b) = pair();
        let o = FallbackOracle::new(Fixed(None), Fixed(None));
        assert!(o.cost(&a, &b).is_none());
    }
}
