//! Maps solver output back to points.

use tracing::warn;

use super::{Infeasibility, Leg, RouteResult, Tour};
use crate::distance::BuiltMatrix;
use crate::models::Point;
use crate::solver::SolveOutcome;

/// Turns a solver outcome into a [`RouteResult`].
///
/// `points` must be the list the matrix was built from (index 0 = depot).
/// The depot is appended again so the stops describe the closed circuit.
///
/// # Panics
///
/// Panics if `points` and the matrix disagree in size, or if the solution
/// order refers to an index outside `points`.
pub fn assemble(outcome: &SolveOutcome, points: &[Point], built: &BuiltMatrix) -> RouteResult {
    let matrix = built.matrix();
    assert_eq!(
        points.len(),
        matrix.size(),
        "points and distance matrix must have the same size"
    );

    let solution = match outcome {
        SolveOutcome::Optimal(s) => s,
        SolveOutcome::Infeasible => {
            let isolated = (1..points.len())
                .filter(|&i| !matrix.is_connected_node(i))
                .map(|i| points[i].name().to_string())
                .collect();
            return RouteResult::Infeasible(Infeasibility {
                reason: "no closed tour from the depot visits every selected stop using known distances"
                    .to_string(),
                isolated,
            });
        }
    };

    let mut stops = Vec::with_capacity(points.len() + 1);
    stops.push(points[0].clone());
    stops.extend(solution.order().iter().map(|&i| points[i].clone()));
    stops.push(points[0].clone());

    let mut indices = Vec::with_capacity(solution.order().len() + 2);
    indices.push(0);
    indices.extend_from_slice(solution.order());
    indices.push(0);
    let estimated_legs: Vec<Leg> = indices
        .windows(2)
        .filter(|w| w[0] != w[1] && built.is_estimated(w[0], w[1]))
        .map(|w| Leg {
            from: points[w[0]].name().to_string(),
            to: points[w[1]].name().to_string(),
        })
        .collect();

    if built.is_degraded() {
        warn!(
            estimated_pairs = built.estimated_pairs().len(),
            estimated_legs = estimated_legs.len(),
            "route planned with estimated distances"
        );
    }

    RouteResult::Found(Tour::new(
        solution.cost(),
        stops,
        built.is_degraded(),
        estimated_legs,
    ))
}
