//! Batch route queries against a single graph snapshot.

use flow_core::LocationId;
use flow_graph::CityGraph;
use flow_route::{PathSolver, Route, RouteResult};

/// One origin/destination pair in a batch.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteQuery {
    pub from: LocationId,
    pub to:   LocationId,
}

/// Answer every query against the same snapshot.
///
/// Failures are per-query: an unknown endpoint or unreachable destination
/// yields an `Err` in that slot and the rest of the batch still completes.
/// Output order always matches input order.
///
/// With the `parallel` feature the queries fan out over Rayon's thread
/// pool; the graph is only read, so no coordination is needed.
pub fn batch_routes<S>(
    graph: &CityGraph,
    queries: &[RouteQuery],
    solver: &S,
    consider_traffic: bool,
) -> Vec<RouteResult<Route>>
where
    S: PathSolver + ?Sized,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        queries
            .par_iter()
            .map(|q| solver.find_path(graph, q.from, q.to, consider_traffic))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        queries
            .iter()
            .map(|q| solver.find_path(graph, q.from, q.to, consider_traffic))
            .collect()
    }
}
