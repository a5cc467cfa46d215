//! # depot-tour
//!
//! Exact closed-tour planning for small collection rounds: start at a fixed
//! depot, visit every selected point once, return to the depot, minimizing
//! total distance.
//!
//! ## Modules
//!
//! - [`models`] — Points, coordinates, and the location registry
//! - [`catalog`] — JSON catalogs and the built-in Delhi data set
//! - [`distance`] — Distance oracles (table, haversine, fallback) and matrix building
//! - [`solver`] — Held–Karp exact solver and an exhaustive reference solver
//! - [`evaluation`] — Tour cost evaluation
//! - [`route`] — Route assembly and results
//! - [`planner`] — [`compute_optimal_route`] and the configurable [`RoutePlanner`](planner::RoutePlanner)
//!
//! ## Example
//!
//! ```
//! use depot_tour::catalog::Catalog;
//! use depot_tour::planner::RoutePlanner;
//!
//! let (registry, table) = Catalog::delhi().into_parts().unwrap();
//! let result = RoutePlanner::new(table)
//!     .plan_names(&registry, &["Connaught Place", "Qutub Minar", "Red Fort"])
//!     .unwrap();
//! println!("{:?}", result.tour().map(|t| t.stop_names()));
//! ```

pub mod catalog;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod planner;
pub mod route;
pub mod solver;

pub use error::{Result, RouteError};
pub use planner::compute_optimal_route;
