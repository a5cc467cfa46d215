//! Point catalogs: a registry plus its adjacency table.
//!
//! Catalogs serialize to JSON in the shape
//!
//! ```json
//! {
//!   "depot": "DMC",
//!   "points": [{ "id": 10, "name": "DMC", "coordinates": { "lat": 28.64, "lon": 77.23 } }],
//!   "adjacency": { "DMC": [{ "location": "India Gate", "distance": 1.0 }] }
//! }
//! ```

mod delhi;

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::TableOracle;
use crate::error::{Result, RouteError};
use crate::models::{LocationRegistry, Point};

pub use delhi::DELHI_DEPOT;

/// One outgoing edge in an adjacency list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyEntry {
    /// Destination point name.
    pub location: String,
    /// Cost of travelling there.
    pub distance: f64,
}

/// A set of points, the depot name, and known directed costs between them.
///
/// # Examples
///
/// ```
/// use depot_tour::catalog::Catalog;
///
/// let catalog = Catalog::delhi();
/// let (registry, table) = catalog.into_parts().unwrap();
/// assert_eq!(registry.depot().name(), "DMC");
/// assert_eq!(registry.len(), 11);
/// assert_eq!(table.lookup("DMC", "India Gate"), Some(1.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Name of the depot point.
    pub depot: String,
    /// Every point, depot included.
    pub points: Vec<Point>,
    /// Outgoing edges keyed by origin name.
    #[serde(default)]
    pub adjacency: BTreeMap<String, Vec<AdjacencyEntry>>,
}

impl Catalog {
    /// The built-in Delhi collection-point catalog.
    pub fn delhi() -> Self {
        let mut adjacency: BTreeMap<String, Vec<AdjacencyEntry>> = BTreeMap::new();
        for &(a, b, km) in delhi::ROAD_KM.iter() {
            for (from, to) in [(a, b), (b, a)] {
                adjacency
                    .entry(from.to_string())
                    .or_default()
                    .push(AdjacencyEntry {
                        location: to.to_string(),
                        distance: km,
                    });
            }
        }
        Self {
            depot: DELHI_DEPOT.to_string(),
            points: delhi::points(),
            adjacency,
        }
    }

    /// Parses a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the catalog as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the points and builds the registry.
    pub fn registry(&self) -> Result<LocationRegistry> {
        LocationRegistry::new(self.points.clone(), &self.depot)
    }

    /// Builds the adjacency table, rejecting edges that name unknown points,
    /// repeat an origin/destination pair, or carry invalid costs.
    pub fn table(&self) -> Result<TableOracle> {
        let names: HashSet<&str> = self.points.iter().map(Point::name).collect();
        let mut table = TableOracle::new();
        for (from, entries) in &self.adjacency {
            if !names.contains(from.as_str()) {
                return Err(RouteError::invalid_catalog(format!(
                    "adjacency refers to unknown point {from:?}"
                )));
            }
            let mut seen = HashSet::with_capacity(entries.len());
            for entry in entries {
                if !seen.insert(entry.location.as_str()) {
                    return Err(RouteError::invalid_catalog(format!(
                        "duplicate edge {from:?} -> {:?}",
                        entry.location
                    )));
                }
                if !names.contains(entry.location.as_str()) {
                    return Err(RouteError::invalid_catalog(format!(
                        "adjacency of {from:?} refers to unknown point {:?}",
                        entry.location
                    )));
                }
                table.insert(from, &entry.location, entry.distance)?;
            }
        }
        Ok(table)
    }

    /// Validates the catalog and splits it into a registry and a table oracle.
    pub fn into_parts(self) -> Result<(LocationRegistry, TableOracle)> {
        let table = self.table()?;
        let registry = LocationRegistry::new(self.points, &self.depot)?;
        debug!(
            points = registry.len(),
            edges = table.len(),
            depot = registry.depot().name(),
            "loaded catalog"
        );
        Ok((registry, table))
    }
}
