//! Static adjacency-table oracle.

use std::collections::HashMap;

use super::{DistanceOracle, EdgeCost, FallbackOracle, HaversineOracle};
use crate::error::{Result, RouteError};
use crate::models::Point;

/// Oracle backed by a directed adjacency table keyed by point name.
///
/// The table need not be symmetric or complete; missing entries are unknown.
///
/// # Examples
///
/// ```
/// use depot_tour::distance::{DistanceOracle, TableOracle};
/// use depot_tour::models::{Coordinates, Point};
///
/// let mut table = TableOracle::new();
/// table.insert("A", "B", 3.0).unwrap();
///
/// let a = Point::new(1, "A", Coordinates::new(0.0, 0.0));
/// let b = Point::new(2, "B", Coordinates::new(0.0, 1.0));
/// assert_eq!(table.cost(&a, &b).map(|c| c.value), Some(3.0));
/// assert!(table.cost(&b, &a).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableOracle {
    edges: HashMap<String, HashMap<String, f64>>,
}

impl TableOracle {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the cost of `from → to`, replacing any previous value.
    ///
    /// Rejects negative and non-finite costs.
    pub fn insert(&mut self, from: &str, to: &str, cost: f64) -> Result<()> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(RouteError::InvalidCost {
                from: from.to_string(),
                to: to.to_string(),
                cost,
            });
        }
        self.edges
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), cost);
        Ok(())
    }

    /// Records the same cost in both directions.
    pub fn insert_symmetric(&mut self, a: &str, b: &str, cost: f64) -> Result<()> {
        self.insert(a, b, cost)?;
        self.insert(b, a, cost)
    }

    /// Removes every edge into or out of `name`.
    pub fn isolate(&mut self, name: &str) {
        self.edges.remove(name);
        for targets in self.edges.values_mut() {
            targets.remove(name);
        }
    }

    /// Looks a cost up by names.
    pub fn lookup(&self, from: &str, to: &str) -> Option<f64> {
        self.edges.get(from)?.get(to).copied()
    }

    /// Number of directed edges.
    pub fn len(&self) -> usize {
        self.edges.values().map(HashMap::len).sum()
    }

    /// Returns `true` if the table has no edges.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wraps this table so unknown pairs fall back to a haversine estimate.
    pub fn with_estimates(self) -> FallbackOracle<Self, HaversineOracle> {
        FallbackOracle::new(self, HaversineOracle)
    }
}

impl DistanceOracle for TableOracle {
    fn cost(&self, from: &Point, to: &Point) -> Option<EdgeCost> {
        self.lookup(from.name(), to.name()).map(EdgeCost::known)
    }
}
