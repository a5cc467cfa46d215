//! OpenRouteService matrix oracle (feature `ors`).
//!
//! Fetches the full road-distance matrix for a set of points in one blocking
//! request, then answers lookups from memory. Combine with
//! [`HaversineOracle`](super::HaversineOracle) through
//! [`FallbackOracle`](super::FallbackOracle) to estimate pairs the service
//! could not route.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::{DistanceOracle, EdgeCost, HaversineOracle};
use crate::models::Point;

/// Default matrix endpoint for car routing.
pub const DEFAULT_ORS_ENDPOINT: &str = "https://api.openrouteservice.org/v2/matrix/driving-car";

/// Environment variable read by [`OrsConfig::from_env`].
pub const ORS_API_KEY_ENV: &str = "ORS_API_KEY";

/// Errors from the OpenRouteService client.
#[derive(Debug, Error)]
pub enum OrsError {
    /// Transport or decoding failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("openrouteservice returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },
    /// The response did not match the requested points.
    #[error("unexpected matrix shape: {0}")]
    Shape(String),
}

/// Connection settings for the matrix endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrsConfig {
    /// API key sent in the `Authorization` header.
    pub api_key: String,
    /// Matrix endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ORS_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl OrsConfig {
    /// Creates a config with the default endpoint and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Reads the API key from `ORS_API_KEY`; `None` if unset or empty.
    pub fn from_env() -> Option<Self> {
        std::env::var(ORS_API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .map(Self::new)
    }
}

#[derive(Serialize)]
struct MatrixRequest {
    locations: Vec<[f64; 2]>,
    metrics: [&'static str; 1],
    units: &'static str,
}

#[derive(Debug, Deserialize)]
struct MatrixResponse {
    distances: Vec<Vec<Option<f64>>>,
}

/// Road distances resolved from OpenRouteService, in kilometres.
#[derive(Debug, Clone)]
pub struct OrsMatrixOracle {
    index: HashMap<u32, usize>,
    distances: Vec<Vec<Option<f64>>>,
}

impl OrsMatrixOracle {
    /// Requests the distance matrix for `points`.
    pub fn fetch(config: &OrsConfig, points: &[Point]) -> Result<Self, OrsError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let request = MatrixRequest {
            // ORS expects [lon, lat].
            locations: points
                .iter()
                .map(|p| [p.coordinates().lon(), p.coordinates().lat()])
                .collect(),
            metrics: ["distance"],
            units: "km",
        };
        debug!(points = points.len(), endpoint = %config.endpoint, "requesting ors matrix");
        let response = client
            .post(&config.endpoint)
            .header("Authorization", &config.api_key)
            .json(&request)
            .send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(OrsError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let parsed: MatrixResponse = response.json()?;
        Self::from_distances(points, parsed.distances)
    }

    /// Requests the distance matrix for `points`, falling back to a
    /// [`HaversineOracle`] for every pair when the request fails.
    ///
    /// Costs from the fallback are tagged as estimates, so plans built on
    /// them come back flagged as degraded.
    pub fn fetch_or_estimate(config: &OrsConfig, points: &[Point]) -> Box<dyn DistanceOracle> {
        match Self::fetch(config, points) {
            Ok(oracle) => Box::new(oracle),
            Err(err) => {
                warn!(error = %err, "ors matrix unavailable, estimating every pair");
                Box::new(HaversineOracle)
            }
        }
    }

    /// Builds an oracle from an already-decoded `distances` grid, in the
    /// order of `points`.
    pub fn from_distances(
        points: &[Point],
        distances: Vec<Vec<Option<f64>>>,
    ) -> Result<Self, OrsError> {
        let n = points.len();
        if distances.len() != n || distances.iter().any(|row| row.len() != n) {
            return Err(OrsError::Shape(format!(
                "expected {n}x{n} distances for {n} points"
            )));
        }
        let index = points.iter().enumerate().map(|(i, p)| (p.id(), i)).collect();
        Ok(Self { index, distances })
    }

    /// Decodes a raw matrix API response body.
    pub fn from_json(points: &[Point], body: &str) -> Result<Self, OrsError> {
        let parsed: MatrixResponse =
            serde_json::from_str(body).map_err(|e| OrsError::Shape(e.to_string()))?;
        Self::from_distances(points, parsed.distances)
    }
}

impl DistanceOracle for OrsMatrixOracle {
    fn cost(&self, from: &Point, to: &Point) -> Option<EdgeCost> {
        let i = *self.index.get(&from.id())?;
        let j = *self.index.get(&to.id())?;
        self.distances[i][j]
            .filter(|d| d.is_finite() && *d >= 0.0)
            .map(EdgeCost::known)
    }
}
