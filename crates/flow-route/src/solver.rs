//! The `PathSolver` trait and machinery shared by all three solvers.
//!
//! # Pluggability
//!
//! Callers hold a `&dyn PathSolver` (or a concrete solver) and never care
//! which algorithm runs; all three return the same optimal cost on graphs
//! with non-negative weights and diverge only in performance and
//! negative-weight handling.
//!
//! # Snapshot contract
//!
//! A solver reads one `CityGraph` value for the whole query and never
//! re-reads traffic mid-search.  Callers that mutate traffic concurrently
//! with an in-flight query get no determinism guarantee — use the
//! snapshot-and-swap discipline from `flow-graph` instead.

use flow_core::{LocationId, RoadId};
use flow_graph::CityGraph;

use crate::error::{RouteError, RouteResult};
use crate::route::Route;

/// A shortest-path algorithm over a [`CityGraph`] snapshot.
///
/// Implementations must be `Send + Sync` so batch drivers can share one
/// solver across worker threads.
pub trait PathSolver: Send + Sync {
    /// Compute an optimal path from `from` to `to`.
    ///
    /// With `consider_traffic` set, edge costs are the traffic-inflated
    /// effective weights; otherwise raw base distances.
    fn find_path(
        &self,
        graph: &CityGraph,
        from: LocationId,
        to: LocationId,
        consider_traffic: bool,
    ) -> RouteResult<Route>;

    /// Short human-readable algorithm name.
    fn name(&self) -> &'static str;
}

/// Validate both endpoints, failing fast with `UnknownLocation`.
pub(crate) fn check_endpoints(
    graph: &CityGraph,
    from: LocationId,
    to: LocationId,
) -> RouteResult<()> {
    for id in [from, to] {
        if !graph.contains(id) {
            return Err(RouteError::UnknownLocation(id));
        }
    }
    Ok(())
}

/// The zero-hop route for a source-equals-destination query.
pub(crate) fn trivial_route(at: LocationId) -> Route {
    Route {
        locations: vec![at],
        roads: vec![],
        total_cost: 0.0,
    }
}

/// Shared path reconstruction: walk the predecessor roads back from the
/// destination and reverse.
///
/// `prev_road[v]` is the road that reached `v` on the best-known path, or
/// `RoadId::INVALID` for unreached locations (and the source).
pub(crate) fn reconstruct(
    graph: &CityGraph,
    prev_road: &[RoadId],
    from: LocationId,
    to: LocationId,
    total_cost: f64,
) -> Route {
    let mut roads = Vec::new();
    let mut cur = to;
    loop {
        let road = prev_road[cur.index()];
        if road == RoadId::INVALID {
            break;
        }
        roads.push(road);
        cur = graph.road_from[road.index()];
    }
    roads.reverse();
    debug_assert_eq!(cur, from, "predecessor chain must terminate at the source");

    let mut locations = Vec::with_capacity(roads.len() + 1);
    locations.push(from);
    for &road in &roads {
        locations.push(graph.road_to[road.index()]);
    }

    Route { locations, roads, total_cost }
}

// ── Algorithm selector ────────────────────────────────────────────────────────

/// The three interchangeable algorithms, as a value callers can store in
/// configuration and dispatch on.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    Dijkstra,
    AStar,
    BellmanFord,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Dijkstra, Algorithm::AStar, Algorithm::BellmanFord];

    /// The solver implementing this algorithm.
    pub fn solver(self) -> &'static dyn PathSolver {
        match self {
            Algorithm::Dijkstra => &crate::dijkstra::Dijkstra,
            Algorithm::AStar => &crate::astar::AStar,
            Algorithm::BellmanFord => &crate::bellman_ford::BellmanFord,
        }
    }
}

impl PathSolver for Algorithm {
    fn find_path(
        &self,
        graph: &CityGraph,
        from: LocationId,
        to: LocationId,
        consider_traffic: bool,
    ) -> RouteResult<Route> {
        self.solver().find_path(graph, from, to, consider_traffic)
    }

    fn name(&self) -> &'static str {
        self.solver().name()
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
