//! Distance oracles and matrices.
//!
//! A [`DistanceOracle`] answers the cost of an ordered pair of points.
//! [`build_matrix`] turns an oracle and an ordered point list into a dense
//! [`DistanceMatrix`] for the solvers.
//!
//! Oracles:
//! - [`TableOracle`] — static adjacency table
//! - [`HaversineOracle`] — great-circle estimate from coordinates
//! - [`FallbackOracle`] — primary oracle with a fallback for unknown pairs
//! - `OrsMatrixOracle` — OpenRouteService road distances (feature `ors`)

mod builder;
mod fallback;
mod haversine;
mod matrix;
mod oracle;
#[cfg(feature = "ors")]
mod ors;
mod table;

pub use builder::{build_matrix, BuiltMatrix};
pub use fallback::FallbackOracle;
pub use haversine::{haversine_km, HaversineOracle, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
pub use oracle::{CostSource, DistanceOracle, EdgeCost};
#[cfg(feature = "ors")]
pub use ors::{OrsConfig, OrsError, OrsMatrixOracle, DEFAULT_ORS_ENDPOINT, ORS_API_KEY_ENV};
pub use table::TableOracle;
