//! Exact closed-tour solvers.
//!
//! - [`held_karp`] — Bellman–Held–Karp bitmask DP, O(n²·2ⁿ) time, O(n·2ⁿ) space
//! - [`exhaustive`] — permutation enumeration, O(n!), reference for testing
//!
//! Both take a [`DistanceMatrix`](crate::distance::DistanceMatrix) whose
//! index 0 is the depot and return a [`SolveOutcome`].

mod exhaustive;
mod held_karp;

pub use exhaustive::{exhaustive, MAX_EXHAUSTIVE_NODES};
pub use held_karp::{held_karp, MAX_NODES};

/// An optimal closed tour over matrix indices.
#[derive(Debug, Clone, PartialEq)]
pub struct TourSolution {
    cost: f64,
    order: Vec<usize>,
    states_evaluated: usize,
}

impl TourSolution {
    pub(crate) fn new(cost: f64, order: Vec<usize>, states_evaluated: usize) -> Self {
        Self {
            cost,
            order,
            states_evaluated,
        }
    }

    /// Total cost including the return leg to the depot.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Visiting order of the non-depot indices (a permutation of `1..n`).
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of subproblems the solver evaluated.
    pub fn states_evaluated(&self) -> usize {
        self.states_evaluated
    }
}

/// Result of solving a matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    /// A minimum-cost tour was found.
    Optimal(TourSolution),
    /// No closed tour uses only known edges.
    Infeasible,
}

impl SolveOutcome {
    /// Returns the solution if one exists.
    pub fn solution(&self) -> Option<&TourSolution> {
        match self {
            Self::Optimal(s) => Some(s),
            Self::Infeasible => None,
        }
    }

    /// Returns the tour cost if one exists.
    pub fn cost(&self) -> Option<f64> {
        self.solution().map(TourSolution::cost)
    }

    /// Returns `true` for [`SolveOutcome::Infeasible`].
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Self::Infeasible)
    }
}
