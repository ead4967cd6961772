//! Graph-construction error type.
//!
//! Construction errors abort the build entirely — a `CityGraphBuilder` never
//! produces a partial graph.  Everything after construction (weight queries,
//! traffic updates) is infallible by design: numeric inputs are clamped, not
//! rejected.

use thiserror::Error;

/// Errors produced while building a [`CityGraph`](crate::CityGraph).
#[derive(Debug, Error)]
pub enum GraphError {
    /// A road names a location key that was never added.
    #[error("road {road:?} references unknown location {key:?}")]
    InvalidEdgeReference { road: String, key: String },

    /// Two locations were added under the same key.
    #[error("duplicate location key {0:?}")]
    DuplicateLocation(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
