//! The route-planning entry point.
//!
//! Ties the pieces together: the depot and selection are laid out depot
//! first, the matrix is built from the oracle, solved exactly with
//! [`held_karp`], and assembled back into points.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::distance::{build_matrix, DistanceOracle, FallbackOracle, HaversineOracle};
use crate::error::{Result, RouteError};
use crate::models::{LocationRegistry, Point};
use crate::route::{assemble, RouteResult};
use crate::solver::{held_karp, MAX_NODES};

/// Default cap on selected stops.
pub const DEFAULT_MAX_STOPS: usize = 15;

/// Planner settings.
///
/// # Examples
///
/// ```
/// use depot_tour::planner::PlannerConfig;
///
/// let cfg = PlannerConfig::from_json(r#"{ "estimate_missing": true }"#).unwrap();
/// assert!(cfg.estimate_missing);
/// assert_eq!(cfg.max_stops, 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Largest selection accepted. Values above the solver limit are
    /// clamped to it.
    pub max_stops: usize,
    /// Fill unknown pairs with a haversine estimate instead of leaving
    /// them unknown. Results built this way are flagged as degraded.
    pub estimate_missing: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_stops: DEFAULT_MAX_STOPS,
            estimate_missing: false,
        }
    }
}

impl PlannerConfig {
    /// Parses a config from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The stop limit actually enforced.
    pub fn effective_max_stops(&self) -> usize {
        self.max_stops.min(MAX_NODES - 1)
    }
}

/// Plans optimal closed tours against one oracle.
///
/// Holds no state between calls; a planner can be shared across threads.
///
/// # Examples
///
/// ```
/// use depot_tour::catalog::Catalog;
/// use depot_tour::planner::RoutePlanner;
///
/// let (registry, table) = Catalog::delhi().into_parts().unwrap();
/// let planner = RoutePlanner::new(table);
/// let result = planner
///     .plan_names(&registry, &["India Gate", "Red Fort"])
///     .unwrap();
/// let tour = result.tour().unwrap();
/// assert_eq!(tour.stops().first().map(|p| p.name()), Some("DMC"));
/// assert_eq!(tour.stops().last().map(|p| p.name()), Some("DMC"));
/// assert_eq!(tour.num_visits(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RoutePlanner<O> {
    oracle: O,
    config: PlannerConfig,
}

impl<O: DistanceOracle> RoutePlanner<O> {
    /// Creates a planner with the default config.
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            config: PlannerConfig::default(),
        }
    }

    /// Replaces the config.
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Current config.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// The oracle costs are drawn from.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Computes the optimal closed tour from `depot` through `selection`.
    ///
    /// # Errors
    ///
    /// - [`RouteError::TooManyStops`] if the selection exceeds the limit
    /// - [`RouteError::DuplicateId`] / [`RouteError::DuplicateName`] if a
    ///   stop repeats or is the depot itself
    /// - [`RouteError::InvalidCost`] if the oracle misbehaves
    pub fn plan(&self, depot: &Point, selection: &[Point]) -> Result<RouteResult> {
        let max = self.config.effective_max_stops();
        if selection.len() > max {
            return Err(RouteError::TooManyStops {
                requested: selection.len(),
                max,
            });
        }

        let mut points = Vec::with_capacity(selection.len() + 1);
        points.push(depot.clone());
        points.extend_from_slice(selection);

        let built = if self.config.estimate_missing {
            build_matrix(&points, &FallbackOracle::new(&self.oracle, HaversineOracle))?
        } else {
            build_matrix(&points, &self.oracle)?
        };

        let outcome = held_karp(built.matrix());
        if let Some(solution) = outcome.solution() {
            debug!(
                states = solution.states_evaluated(),
                order = ?solution.order(),
                "solved tour"
            );
        }

        let result = assemble(&outcome, &points, &built);
        match &result {
            RouteResult::Found(tour) => info!(
                depot = depot.name(),
                stops = tour.num_visits(),
                cost = tour.total_cost(),
                degraded = tour.oracle_degraded(),
                "planned route"
            ),
            RouteResult::Infeasible(info) => info!(
                depot = depot.name(),
                stops = selection.len(),
                isolated = ?info.isolated,
                "no feasible route"
            ),
        }
        Ok(result)
    }

    /// Resolves `names` in `registry` and plans from the registry's depot.
    pub fn plan_names<S: AsRef<str>>(
        &self,
        registry: &LocationRegistry,
        names: &[S],
    ) -> Result<RouteResult> {
        let selection = registry.select(names)?;
        self.plan(registry.depot(), &selection)
    }
}

/// Computes the minimum-cost closed tour from `depot` through every point
/// in `selection` using costs from `oracle` and the default config.
///
/// An empty selection yields the zero-cost tour `[depot, depot]`. A
/// selection that cannot be toured over known costs yields
/// [`RouteResult::Infeasible`].
///
/// # Examples
///
/// ```
/// use depot_tour::compute_optimal_route;
/// use depot_tour::distance::TableOracle;
/// use depot_tour::models::{Coordinates, Point};
///
/// let d = Point::new(0, "D", Coordinates::new(0.0, 0.0));
/// let a = Point::new(1, "A", Coordinates::new(0.0, 0.01));
/// let b = Point::new(2, "B", Coordinates::new(0.01, 0.0));
///
/// let mut table = TableOracle::new();
/// for (from, to, km) in [
///     ("D", "A", 2.0), ("A", "B", 3.0), ("B", "D", 4.0),
///     ("D", "B", 6.0), ("B", "A", 3.0), ("A", "D", 2.0),
/// ] {
///     table.insert(from, to, km).unwrap();
/// }
///
/// let result = compute_optimal_route(&d, &[a, b], &table).unwrap();
/// let tour = result.tour().unwrap();
/// assert_eq!(tour.stop_names(), vec!["D", "A", "B", "D"]);
/// assert_eq!(tour.total_cost(), 9.0);
/// ```
pub fn compute_optimal_route<O: DistanceOracle + ?Sized>(
    depot: &Point,
    selection: &[Point],
    oracle: &O,
) -> Result<RouteResult> {
    RoutePlanner::new(oracle).plan(depot, selection)
}
