use thiserror::Error;

/// Errors raised while building a [`Graph`](crate::graph::Graph) or querying it.
///
/// Construction errors abort the build, so a graph is never partially usable.
/// An unreachable target is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Unknown location id {0}")]
    UnknownLocation(usize),

    #[error("Edge ({a}, {b}) references an unknown location")]
    InvalidReference { a: usize, b: usize },

    #[error("Location id {0} is already present")]
    DuplicateId(usize),

    #[error("Edge ({a}, {b}) has invalid weight {weight}, expected a positive distance")]
    InvalidWeight { a: usize, b: usize, weight: i64 },

    #[error("Location ids must be contiguous: expected {expected}, found {found}")]
    NonContiguousId { expected: usize, found: usize },

    #[error("Location {0} has an empty name")]
    EmptyName(usize),

    #[error("Edge from location {0} to itself")]
    SelfLoop(usize),
}
