//! Distance matrix construction from an oracle.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::{DistanceMatrix, DistanceOracle};
use crate::error::{Result, RouteError};
use crate::models::Point;

/// A distance matrix together with the pairs whose costs were estimated.
#[derive(Debug, Clone)]
pub struct BuiltMatrix {
    matrix: DistanceMatrix,
    estimated: Vec<(usize, usize)>,
}

impl BuiltMatrix {
    /// The cost matrix (index 0 = depot).
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Ordered index pairs whose cost came from an estimate, row-major.
    pub fn estimated_pairs(&self) -> &[(usize, usize)] {
        &self.estimated
    }

    /// Returns `true` if any entry is an estimate.
    pub fn is_degraded(&self) -> bool {
        !self.estimated.is_empty()
    }

    /// Returns `true` if the entry `from → to` is an estimate.
    pub fn is_estimated(&self, from: usize, to: usize) -> bool {
        self.estimated.binary_search(&(from, to)).is_ok()
    }
}

/// Builds a dense cost matrix for `points`, depot first.
///
/// Every ordered pair `(i, j)` with `i != j` is looked up once. Unknown pairs
/// are stored as `f64::INFINITY`. The result is deterministic for a given
/// input order.
///
/// # Errors
///
/// - [`RouteError::EmptyInput`] if `points` is empty
/// - [`RouteError::DuplicateId`] / [`RouteError::DuplicateName`] on repeated
///   identities
/// - [`RouteError::InvalidCost`] if the oracle returns a negative or
///   non-finite cost
///
/// # Examples
///
/// ```
/// use depot_tour::distance::{build_matrix, TableOracle};
/// use depot_tour::models::{Coordinates, Point};
///
/// let points = vec![
///     Point::new(0, "D", Coordinates::new(0.0, 0.0)),
///     Point::new(1, "A", Coordinates::new(0.0, 1.0)),
/// ];
/// let mut table = TableOracle::new();
/// table.insert_symmetric("D", "A", 2.0).unwrap();
///
/// let built = build_matrix(&points, &table).unwrap();
/// assert_eq!(built.matrix().get(0, 1), 2.0);
/// assert!(!built.is_degraded());
/// ```
pub fn build_matrix<O: DistanceOracle + ?Sized>(
    points: &[Point],
    oracle: &O,
) -> Result<BuiltMatrix> {
    if points.is_empty() {
        return Err(RouteError::EmptyInput);
    }
    check_unique(points)?;

    let n = points.len();
    let mut matrix = DistanceMatrix::new(n);
    let mut estimated = Vec::new();

    for (i, from) in points.iter().enumerate() {
        for (j, to) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let Some(cost) = oracle.cost(from, to) else {
                continue;
            };
            if !cost.value.is_finite() || cost.value < 0.0 {
                return Err(RouteError::InvalidCost {
                    from: from.name().to_string(),
                    to: to.name().to_string(),
                    cost: cost.value,
                });
            }
            if cost.is_estimate() {
                trace!(
                    from = from.name(),
                    to = to.name(),
                    km = cost.value,
                    "estimated edge"
                );
                estimated.push((i, j));
            }
            matrix.set(i, j, cost.value);
        }
    }

    debug!(size = n, estimated = estimated.len(), "built distance matrix");
    Ok(BuiltMatrix { matrix, estimated })
}

fn check_unique(points: &[Point]) -> Result<()> {
    let mut ids = HashSet::with_capacity(points.len());
    let mut names = HashSet::with_capacity(points.len());
    for p in points {
        if !ids.insert(p.id()) {
            return Err(RouteError::DuplicateId { id: p.id() });
        }
        if !names.insert(p.name()) {
            return Err(RouteError::DuplicateName {
                name: p.name().to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{EdgeCost, HaversineOracle, TableOracle};
    use crate::models::Coordinates;

    fn pt(id: u32, name: &str) -> Point {
        Point::new(id, name, Coordinates::new(28.6, 77.2 + id as f64 * 0.01))
    }

    #[test]
    fn test_build_from_table() {
        let points = vec![pt(0, "D"), pt(1, "A"), pt(2, "B")];
        let mut t = TableOracle::new();
        t.insert("D", "A", 2.0).expect("valid");
        t.insert("A", "B", 3.0).expect("valid");
        t.insert("B", "D", 4.0).expect("valid");
        let built = build_matrix(&points, &t).expect("valid input");
        let m = built.matrix();
        assert_eq!(m.size(), 3);
        assert_eq!(m.get(0, 1), 2.0);
        assert_eq!(m.get(1, 2), 3.0);
        assert_eq!(m.get(2, 0), 4.0);
        assert!(m.get(1, 0).is_infinite());
        assert!(!built.is_degraded());
    }

    #[test]
    fn test_empty_input() {
        let t = TableOracle::new();
        assert_eq!(build_matrix(&[], &t).unwrap_err(), RouteError::EmptyInput);
    }

    #[test]
    fn test_duplicate_identity() {
        let t = TableOracle::new();
        let err = build_matrix(&[pt(0, "D"), pt(0, "X")], &t).unwrap_err();
        assert_eq!(err, RouteError::DuplicateId { id: 0 });
        let err = build_matrix(&[pt(0, "D"), pt(1, "D")], &t).unwrap_err();
        assert!(matches!(err, RouteError::DuplicateName { .. }));
    }

    #[test]
    fn test_estimates_recorded() {
        let points = vec![pt(0, "D"), pt(1, "A")];
        let mut t = TableOracle::new();
        t.insert("D", "A", 2.0).expect("valid");
        let built = build_matrix(&points, &t.with_estimates()).expect("valid input");
        assert!(built.is_degraded());
        assert_eq!(built.estimated_pairs(), &[(1, 0)]);
        assert!(built.is_estimated(1, 0));
        assert!(!built.is_estimated(0, 1));
        assert!(built.matrix().is_known(1, 0));
    }

    #[test]
    fn test_all_estimated() {
        let points = vec![pt(0, "D"), pt(1, "A"), pt(2, "B")];
        let built = build_matrix(&points, &HaversineOracle).expect("valid input");
        assert_eq!(built.estimated_pairs().len(), 6);
        assert!(built.matrix().is_symmetric(1e-9));
    }

    #[test]
    fn test_deterministic() {
        let points = vec![pt(0, "D"), pt(1, "A"), pt(2, "B")];
        let a = build_matrix(&points, &HaversineOracle).expect("valid input");
        let b = build_matrix(&points, &HaversineOracle).expect("valid input");
        assert_eq!(a.matrix(), b.matrix());
    }

    #[test]
    fn test_invalid_oracle_cost() {
        struct Negative;
        impl DistanceOracle for Negative {
            fn cost(&self, _from: &Point, _to: &Point) -> Option<EdgeCost> {
                Some(EdgeCost::known(-1.0))
            }
        }
        let err = build_matrix(&[pt(0, "D"), pt(1, "A")], &Negative).unwrap_err();
        assert!(matches!(err, RouteError::InvalidCost { .. }));
    }
}
