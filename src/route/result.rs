//! Route results handed back to callers.

use serde::{Deserialize, Serialize};

use crate::models::Point;

/// A directed leg between two named stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    /// Origin name.
    pub from: String,
    /// Destination name.
    pub to: String,
}

/// A closed tour from the depot through every selected stop and back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    total_cost: f64,
    stops: Vec<Point>,
    oracle_degraded: bool,
    estimated_legs: Vec<Leg>,
}

impl Tour {
    pub(crate) fn new(
        total_cost: f64,
        stops: Vec<Point>,
        oracle_degraded: bool,
        estimated_legs: Vec<Leg>,
    ) -> Self {
        Self {
            total_cost,
            stops,
            oracle_degraded,
            estimated_legs,
        }
    }

    /// Sum of all leg costs, return leg included.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Stops in visiting order; first and last are the depot.
    pub fn stops(&self) -> &[Point] {
        &self.stops
    }

    /// Names of the stops in visiting order.
    pub fn stop_names(&self) -> Vec<&str> {
        self.stops.iter().map(Point::name).collect()
    }

    /// Number of non-depot stops visited.
    pub fn num_visits(&self) -> usize {
        self.stops.len().saturating_sub(2)
    }

    /// `true` if any matrix entry used while planning was an estimate.
    pub fn oracle_degraded(&self) -> bool {
        self.oracle_degraded
    }

    /// Legs of this tour whose cost is an estimate.
    pub fn estimated_legs(&self) -> &[Leg] {
        &self.estimated_legs
    }
}

/// Why no tour could be produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infeasibility {
    /// Human-readable explanation.
    pub reason: String,
    /// Selected stops with no known way in or no known way out.
    pub isolated: Vec<String>,
}

/// Outcome of planning a route.
///
/// # Examples
///
/// ```
/// use depot_tour::route::{Infeasibility, RouteResult};
///
/// let r = RouteResult::Infeasible(Infeasibility {
///     reason: "no closed tour".into(),
///     isolated: vec![],
/// });
/// assert!(r.is_infeasible());
/// assert!(r.tour().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteResult {
    /// An optimal closed tour.
    Found(Tour),
    /// No closed tour exists over the known costs.
    Infeasible(Infeasibility),
}

impl RouteResult {
    /// Returns the tour if one was found.
    pub fn tour(&self) -> Option<&Tour> {
        match self {
            Self::Found(t) => Some(t),
            Self::Infeasible(_) => None,
        }
    }

    /// Returns the total cost if a tour was found.
    pub fn total_cost(&self) -> Option<f64> {
        self.tour().map(Tour::total_cost)
    }

    /// Returns `true` for [`RouteResult::Infeasible`].
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Self::Infeasible(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    #[test]
    fn test_tour_accessors() {
        let d = Point::new(0, "D", Coordinates::new(0.0, 0.0));
        let a = Point::new(1, "A", Coordinates::new(0.0, 1.0));
        let tour = Tour::new(4.0, vec![d.clone(), a, d], false, vec![]);
        assert_eq!(tour.stop_names(), vec!["D", "A", "D"]);
        assert_eq!(tour.num_visits(), 1);
        assert_eq!(tour.total_cost(), 4.0);
        assert!(!tour.oracle_degraded());
    }

    #[test]
    fn test_serde_tag() {
        let r = RouteResult::Infeasible(Infeasibility {
            reason: "none".to_string(),
            isolated: vec!["C".to_string()],
        });
        let v = serde_json::to_value(&r).expect("serialize");
        assert_eq!(v["status"], "infeasible");
        assert_eq!(v["isolated"][0], "C");

        let d = Point::new(0, "D", Coordinates::new(0.0, 0.0));
        let found = RouteResult::Found(Tour::new(0.0, vec![d.clone(), d], false, vec![]));
        let v = serde_json::to_value(&found).expect("serialize");
        assert_eq!(v["status"], "found");
        assert_eq!(v["total_cost"], 0.0);
    }
}
