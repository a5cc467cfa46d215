//! Exhaustive depth-first enumeration of closed tours.
//!
//! Tries every ordering of the non-depot nodes with backtracking, pruning a
//! branch as soon as it needs an unknown edge. Exponential in the number of
//! nodes; intended as the ground truth [`held_karp`](super::held_karp) is
//! checked against.

use super::{SolveOutcome, TourSolution};
use crate::distance::DistanceMatrix;

/// Largest matrix (depot included) accepted by [`exhaustive`].
pub const MAX_EXHAUSTIVE_NODES: usize = 10;

/// Finds the minimum-cost closed tour by trying every permutation.
///
/// # Panics
///
/// Panics if the matrix is empty or larger than [`MAX_EXHAUSTIVE_NODES`].
///
/// # Examples
///
/// ```
/// use depot_tour::distance::DistanceMatrix;
/// use depot_tour::solver::{exhaustive, held_karp};
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 1.0, 4.0, 2.0],
///     vec![1.0, 0.0, 2.0, 5.0],
///     vec![4.0, 2.0, 0.0, 1.0],
///     vec![2.0, 5.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(exhaustive(&dm).cost(), held_karp(&dm).cost());
/// ```
pub fn exhaustive(distances: &DistanceMatrix) -> SolveOutcome {
    let n = distances.size();
    assert!(n >= 1, "distance matrix must contain the depot");
    assert!(
        n <= MAX_EXHAUSTIVE_NODES,
        "distance matrix of size {n} exceeds the exhaustive limit of {MAX_EXHAUSTIVE_NODES}"
    );

    let mut search = Search {
        distances,
        visited: vec![false; n],
        path: Vec::with_capacity(n),
        best_cost: f64::INFINITY,
        best_path: None,
        leaves: 0,
    };
    search.visited[0] = true;
    search.descend(0, 0.0);

    match search.best_path {
        Some(order) => {
            SolveOutcome::Optimal(TourSolution::new(search.best_cost, order, search.leaves))
        }
        None => SolveOutcome::Infeasible,
    }
}

struct Search<'a> {
    distances: &'a DistanceMatrix,
    visited: Vec<bool>,
    path: Vec<usize>,
    best_cost: f64,
    best_path: Option<Vec<usize>>,
    leaves: usize,
}

impl Search<'_> {
    fn descend(&mut self, current: usize, cost: f64) {
        let n = self.distances.size();
        if self.path.len() == n - 1 {
            self.leaves += 1;
            // The circuit always closes at the depot.
            let back = self.distances.get(current, 0);
            if back.is_finite() && cost + back < self.best_cost {
                self.best_cost = cost + back;
                self.best_path = Some(self.path.clone());
            }
            return;
        }

        for next in 1..n {
            if self.visited[next] {
                continue;
            }
            let edge = self.distances.get(current, next);
            if !edge.is_finite() {
                continue;
            }
            self.visited[next] = true;
            self.path.push(next);
            self.descend(next, cost + edge);
            self.path.pop();
            self.visited[next] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    #[test]
    fn test_depot_only() {
        let outcome = exhaustive(&DistanceMatrix::new(1));
        assert_eq!(outcome.cost(), Some(0.0));
    }

    #[test]
    fn test_asymmetric_choice() {
        let dm = DistanceMatrix::from_rows(&[
            vec![0.0, 2.0, 6.0],
            vec![2.0, 0.0, 3.0],
            vec![4.0, 3.0, 0.0],
        ])
        .expect("square");
        let outcome = exhaustive(&dm);
        let sol = outcome.solution().expect("feasible");
        assert_eq!(sol.order(), &[1, 2]);
        assert_eq!(sol.cost(), 9.0);
        assert_eq!(sol.states_evaluated(), 2);
    }

    #[test]
    fn test_no_return_edge() {
        let mut dm = DistanceMatrix::from_rows(&[
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ])
        .expect("square");
        dm.set(1, 0, INF);
        dm.set(2, 0, INF);
        assert!(exhaustive(&dm).is_infeasible());
    }

    #[test]
    #[should_panic(expected = "exceeds the exhaustive limit")]
    fn test_oversized_panics() {
        exhaustive(&DistanceMatrix::new(MAX_EXHAUSTIVE_NODES + 1));
    }
}
