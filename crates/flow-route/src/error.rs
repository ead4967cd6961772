//! Query-error taxonomy for the path solvers.
//!
//! Every variant is a tagged result, never a panic: batch callers match and
//! move on to the next query.  `NoPathFound` in particular is an expected
//! outcome of a valid query against a disconnected graph, not a fault.

use thiserror::Error;

use flow_core::LocationId;

/// Errors produced by a single path query.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// An endpoint id does not exist in the graph (caller error).
    #[error("unknown location {0}")]
    UnknownLocation(LocationId),

    /// The destination is unreachable from the source — a normal outcome.
    #[error("no path from {from} to {to}")]
    NoPathFound { from: LocationId, to: LocationId },

    /// Bellman-Ford found a negative-weight cycle reachable from the source;
    /// no shortest path exists.
    #[error("negative-weight cycle reachable from {from}")]
    NegativeCycleDetected { from: LocationId },
}

pub type RouteResult<T> = Result<T, RouteError>;
