//! The distance oracle abstraction.

use serde::{Deserialize, Serialize};

use crate::models::Point;

/// Where a cost came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostSource {
    /// A precomputed table or road-network cost.
    Known,
    /// A geodesic approximation used because no known cost exists.
    Estimated,
}

/// A directed travel cost tagged with its source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeCost {
    /// Non-negative cost (kilometres for the bundled oracles).
    pub value: f64,
    /// Provenance of `value`.
    pub source: CostSource,
}

impl EdgeCost {
    /// A cost taken from known data.
    pub fn known(value: f64) -> Self {
        Self {
            value,
            source: CostSource::Known,
        }
    }

    /// A cost produced by an estimate.
    pub fn estimated(value: f64) -> Self {
        Self {
            value,
            source: CostSource::Estimated,
        }
    }

    /// Returns `true` if this cost is an estimate.
    pub fn is_estimate(&self) -> bool {
        self.source == CostSource::Estimated
    }
}

/// Supplies the travel cost for an ordered pair of points.
///
/// Implementations must be pure reads: the same pair always yields the same
/// answer. `None` means the cost is unknown, which is distinct from zero.
///
/// # Examples
///
/// ```
/// use depot_tour::distance::{DistanceOracle, EdgeCost};
/// use depot_tour::models::Point;
///
/// struct Flat;
///
/// impl DistanceOracle for Flat {
///     fn cost(&self, _from: &Point, _to: &Point) -> Option<EdgeCost> {
///         Some(EdgeCost::known(1.0))
///     }
/// }
/// ```
pub trait DistanceOracle: Send + Sync {
    /// Cost of travelling from `from` to `to`, or `None` if unknown.
    fn cost(&self, from: &Point, to: &Point) -> Option<EdgeCost>;
}

impl<T: DistanceOracle + ?Sized> DistanceOracle for &T {
    fn cost(&self, from: &Point, to: &Point) -> Option<EdgeCost> {
        (**self).cost(from, to)
    }
}

impl<T: DistanceOracle + ?Sized> DistanceOracle for Box<T> {
    fn cost(&self, from: &Point, to: &Point) -> Option<EdgeCost> {
        (**self).cost(from, to)
    }
}
