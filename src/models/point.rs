//! Point and coordinate types.

use serde::{Deserialize, Serialize};

/// A geographic position in decimal degrees.
///
/// # Examples
///
/// ```
/// use depot_tour::models::Coordinates;
///
/// let c = Coordinates::new(28.6139, 77.2090);
/// assert_eq!(c.lat(), 28.6139);
/// assert_eq!(c.lon(), 77.2090);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    lat: f64,
    lon: f64,
}

impl Coordinates {
    /// Creates a coordinate pair from latitude and longitude.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn haversine_km(&self, other: &Coordinates) -> f64 {
        crate::distance::haversine_km(*self, *other)
    }
}

/// A named collection point (or the depot).
///
/// Points are compared by identity (`id`) when building matrices; `name` is
/// the lookup key used by adjacency tables.
///
/// # Examples
///
/// ```
/// use depot_tour::models::{Coordinates, Point};
///
/// let p = Point::new(11, "DMC", Coordinates::new(28.6418, 77.2274));
/// assert_eq!(p.id(), 11);
/// assert_eq!(p.name(), "DMC");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    id: u32,
    name: String,
    coordinates: Coordinates,
}

impl Point {
    /// Creates a new point.
    pub fn new(id: u32, name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            id,
            name: name.into(),
            coordinates,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geographic position.
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}
