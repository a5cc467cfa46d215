//! Bellman–Held–Karp dynamic program for the exact TSP.
//!
//! # Algorithm
//!
//! Let the non-depot nodes be `1..n`. For every subset `S` of them (a bitmask
//! over `n - 1` bits) and every `v ∈ S`, `g(S, v)` is the cheapest path that
//! leaves the depot, visits exactly `S`, and ends at `v`:
//!
//! ```text
//! g({v}, v) = d(0, v)
//! g(S, v)   = min_{u ∈ S \ {v}} g(S \ {v}, u) + d(u, v)
//! tour      = min_v g(full, v) + d(v, 0)
//! ```
//!
//! Masks are processed in increasing numeric order, which guarantees that
//! `S \ {v}` is complete before `S`. Each `(S, v)` entry is written exactly
//! once. Unknown edges (`+∞`) are skipped instead of added.
//!
//! # Complexity
//!
//! O(n²·2ⁿ) time, O(n·2ⁿ) space.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *J. SIAM* 10(1), 196-210.

use tracing::debug;

use super::{SolveOutcome, TourSolution};
use crate::distance::DistanceMatrix;

/// Largest matrix (depot included) accepted by [`held_karp`].
pub const MAX_NODES: usize = 20;

const NO_PARENT: usize = usize::MAX;

/// Computes the minimum-cost closed tour from index 0 through every other
/// index and back.
///
/// Returns [`SolveOutcome::Infeasible`] when no tour exists over known edges.
/// A single-node matrix yields a zero-cost tour with an empty order.
///
/// # Panics
///
/// Panics if the matrix is empty or larger than [`MAX_NODES`].
///
/// # Examples
///
/// ```
/// use depot_tour::distance::DistanceMatrix;
/// use depot_tour::solver::held_karp;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 2.0, 6.0],
///     vec![2.0, 0.0, 3.0],
///     vec![4.0, 3.0, 0.0],
/// ])
/// .unwrap();
///
/// let outcome = held_karp(&dm);
/// let tour = outcome.solution().unwrap();
/// assert_eq!(tour.order(), &[1, 2]);
/// assert!((tour.cost() - 9.0).abs() < 1e-10);
/// ```
pub fn held_karp(distances: &DistanceMatrix) -> SolveOutcome {
    let n = distances.size();
    assert!(n >= 1, "distance matrix must contain the depot");
    assert!(
        n <= MAX_NODES,
        "distance matrix of size {n} exceeds the solver limit of {MAX_NODES}"
    );

    if n == 1 {
        return SolveOutcome::Optimal(TourSolution::new(0.0, Vec::new(), 0));
    }

    // Node `v` in the table stands for matrix index `v + 1`.
    let k = n - 1;
    let subsets = 1usize << k;
    let full = subsets - 1;
    let mut best = vec![f64::INFINITY; subsets * k];
    let mut parent = vec![NO_PARENT; subsets * k];
    let mut states = 0usize;

    for v in 0..k {
        best[(1 << v) * k + v] = distances.get(0, v + 1);
        states += 1;
    }

    for mask in 1..subsets {
        // Singletons are the base case.
        if mask.is_power_of_two() {
            continue;
        }
        for v in 0..k {
            if mask & (1 << v) == 0 {
                continue;
            }
            let prev = mask ^ (1 << v);
            let mut value = f64::INFINITY;
            let mut from = NO_PARENT;
            for u in 0..k {
                if prev & (1 << u) == 0 {
                    continue;
                }
                let g = best[prev * k + u];
                let edge = distances.get(u + 1, v + 1);
                if !g.is_finite() || !edge.is_finite() {
                    continue;
                }
                let candidate = g + edge;
                if candidate < value {
                    value = candidate;
                    from = u;
                }
            }
            best[mask * k + v] = value;
            parent[mask * k + v] = from;
            states += 1;
        }
    }

    let mut total = f64::INFINITY;
    let mut last = NO_PARENT;
    for v in 0..k {
        let g = best[full * k + v];
        let back = distances.get(v + 1, 0);
        if !g.is_finite() || !back.is_finite() {
            continue;
        }
        if g + back < total {
            total = g + back;
            last = v;
        }
    }

    debug!(nodes = n, states, "held-karp finished");

    if last == NO_PARENT {
        return SolveOutcome::Infeasible;
    }

    let mut order = Vec::with_capacity(k);
    let mut mask = full;
    let mut v = last;
    loop {
        order.push(v + 1);
        let p = parent[mask * k + v];
        mask ^= 1 << v;
        if p == NO_PARENT {
            break;
        }
        v = p;
    }
    order.reverse();
    debug_assert_eq!(order.len(), k, "reconstructed tour must visit every node");

    SolveOutcome::Optimal(TourSolution::new(total, order, states))
}
