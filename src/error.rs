//! Error types for graph mutation, solving, and serialization.

use thiserror::Error;

/// Errors surfaced by the planner store and the MST solvers.
///
/// Every variant is recoverable: a failed operation leaves the store in its
/// prior valid state, so the caller can surface a message and retry.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Station latitude or longitude outside the allowed coordinate ranges.
    #[error("station coordinates out of range: ({lat}, {lng})")]
    OutOfRange { lat: f64, lng: f64 },

    /// A station with the same coordinates is already present.
    #[error("a station already exists at ({lat}, {lng})")]
    DuplicateStation { lat: f64, lng: f64 },

    /// Adjacency list length does not match the current station count.
    #[error("adjacency list has {got} entries but the graph has {expected} stations")]
    AdjacencyLengthMismatch { expected: usize, got: usize },

    /// A nonzero adjacency weight outside the allowed path weight range.
    #[error("adjacency weight {weight} is outside the allowed range [1, 10]")]
    InvalidWeight { weight: f64 },

    /// Solving requires at least two stations.
    #[error("at least 2 stations are required to solve, found {count}")]
    InsufficientStations { count: usize },

    /// No spanning tree connects every station.
    #[error("the graph is not connected")]
    DisconnectedGraph,

    /// Imported text is not valid JSON or lacks the expected top-level
    /// fields.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Imported content parsed as JSON but violates a type or structural
    /// rule.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The store could not be encoded for export.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
