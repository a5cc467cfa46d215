//! The fixed catalog of points a selection is drawn from.

use std::collections::HashSet;

use super::Point;
use crate::error::{Result, RouteError};

/// A validated set of points with one designated depot.
///
/// Ids and names are unique. [`points`](Self::points) keeps registration
/// order, so the depot may sit anywhere in it; the planner places the depot
/// at index 0 of every distance matrix itself.
///
/// # Examples
///
/// ```
/// use depot_tour::models::{Coordinates, LocationRegistry, Point};
///
/// let registry = LocationRegistry::new(
///     vec![
///         Point::new(1, "Depot", Coordinates::new(0.0, 0.0)),
///         Point::new(2, "North", Coordinates::new(1.0, 0.0)),
///     ],
///     "Depot",
/// )
/// .unwrap();
/// assert_eq!(registry.depot().name(), "Depot");
/// assert_eq!(registry.stops().count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    points: Vec<Point>,
    depot: usize,
}

impl LocationRegistry {
    /// Creates a registry, rejecting duplicate ids or names and an unknown
    /// depot name.
    pub fn new(points: Vec<Point>, depot_name: &str) -> Result<Self> {
        let mut ids = HashSet::with_capacity(points.len());
        let mut names = HashSet::with_capacity(points.len());
        for p in &points {
            if !ids.insert(p.id()) {
                return Err(RouteError::DuplicateId { id: p.id() });
            }
            if !names.insert(p.name()) {
                return Err(RouteError::DuplicateName {
                    name: p.name().to_string(),
                });
            }
        }
        let depot = points
            .iter()
            .position(|p| p.name() == depot_name)
            .ok_or_else(|| RouteError::UnknownPoint(depot_name.to_string()))?;
        Ok(Self { points, depot })
    }

    /// The depot every tour starts and ends at.
    pub fn depot(&self) -> &Point {
        &self.points[self.depot]
    }

    /// All registered points, depot included, in registration order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Points that may be selected as stops (everything but the depot).
    pub fn stops(&self) -> impl Iterator<Item = &Point> {
        let depot = self.depot;
        self.points
            .iter()
            .enumerate()
            .filter(move |&(i, _)| i != depot)
            .map(|(_, p)| p)
    }

    /// Number of registered points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a registry holds at least the depot.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Looks a point up by name.
    pub fn get(&self, name: &str) -> Option<&Point> {
        self.points.iter().find(|p| p.name() == name)
    }

    /// Looks a point up by id.
    pub fn by_id(&self, id: u32) -> Option<&Point> {
        self.points.iter().find(|p| p.id() == id)
    }

    /// Resolves a list of names into points, preserving order.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Point>> {
        names
            .iter()
            .map(|n| {
                let name = n.as_ref();
                self.get(name)
                    .cloned()
                    .ok_or_else(|| RouteError::UnknownPoint(name.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    fn pt(id: u32, name: &str) -> Point {
        Point::new(id, name, Coordinates::new(0.0, id as f64))
    }

    #[test]
    fn test_registry_depot_and_stops() {
        let reg = LocationRegistry::new(vec![pt(1, "A"), pt(2, "D"), pt(3, "B")], "D")
            .expect("valid");
        assert_eq!(reg.depot().id(), 2);
        let stops: Vec<_> = reg.stops().map(|p| p.name()).collect();
        assert_eq!(stops, vec!["A", "B"]);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn test_registry_duplicate_id() {
        let err = LocationRegistry::new(vec![pt(1, "A"), pt(1, "B")], "A").unwrap_err();
        assert_eq!(err, RouteError::DuplicateId { id: 1 });
    }

    #[test]
    fn test_registry_duplicate_name() {
        let err = LocationRegistry::new(vec![pt(1, "A"), pt(2, "A")], "A").unwrap_err();
        assert_eq!(
            err,
            RouteError::DuplicateName {
                name: "A".to_string()
            }
        );
    }

    #[test]
    fn test_registry_unknown_depot() {
        let err = LocationRegistry::new(vec![pt(1, "A")], "Z").unwrap_err();
        assert_eq!(err, RouteError::UnknownPoint("Z".to_string()));
    }

    #[test]
    fn test_select() {
        let reg = LocationRegistry::new(vec![pt(1, "A"), pt(2, "D"), pt(3, "B")], "D")
            .expect("valid");
        let sel = reg.select(&["B", "A"]).expect("known");
        assert_eq!(sel[0].id(), 3);
        assert_eq!(sel[1].id(), 1);
        assert!(reg.select(&["C"]).is_err());
        assert_eq!(reg.by_id(3).map(|p| p.name()), Some("B"));
    }
}
