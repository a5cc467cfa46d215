//! Error types for route planning.

use thiserror::Error;

/// Errors raised before a tour can be computed.
///
/// An infeasible tour is not an error: it is reported through
/// [`RouteResult::Infeasible`](crate::route::RouteResult::Infeasible).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// No points were supplied to the matrix builder.
    #[error("at least one point (the depot) is required")]
    EmptyInput,
    /// Two points share the same id. Selecting the depot as a stop also
    /// lands here.
    #[error("point id {id} appears more than once")]
    DuplicateId {
        /// The repeated id.
        id: u32,
    },
    /// Two points share the same name.
    #[error("point name {name:?} appears more than once")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },
    /// A name did not resolve to any registered point.
    #[error("unknown point {0:?}")]
    UnknownPoint(String),
    /// The selection is larger than the planner accepts.
    #[error("{requested} stops requested, at most {max} are supported")]
    TooManyStops {
        /// Number of selected stops.
        requested: usize,
        /// Configured limit.
        max: usize,
    },
    /// An oracle or table produced a negative or non-finite cost.
    #[error("invalid cost {cost} for {from:?} -> {to:?}")]
    InvalidCost {
        /// Origin point name.
        from: String,
        /// Destination point name.
        to: String,
        /// The rejected value.
        cost: f64,
    },
    /// A catalog could not be parsed or is inconsistent.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RouteError>;

impl RouteError {
    pub(crate) fn invalid_catalog(message: impl Into<String>) -> Self {
        Self::InvalidCatalog(message.into())
    }
}

impl From<serde_json::Error> for RouteError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_catalog(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            RouteError::EmptyInput.to_string(),
            "at least one point (the depot) is required"
        );
        assert_eq!(
            RouteError::DuplicateId { id: 7 }.to_string(),
            "point id 7 appears more than once"
        );
        assert_eq!(
            RouteError::TooManyStops {
                requested: 30,
                max: 15
            }
            .to_string(),
            "30 stops requested, at most 15 are supported"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<u32>("not json").expect_err("invalid json");
        let route_err = RouteError::from(err);
        assert!(matches!(route_err, RouteError::InvalidCatalog(_)));
    }
}
