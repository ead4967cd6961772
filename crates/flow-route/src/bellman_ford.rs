//! Bellman-Ford — the tolerant baseline.
//!
//! Relaxes every road for up to |V|−1 rounds (with an early exit once a
//! round changes nothing), then runs one detection pass: any edge that can
//! still improve a reachable location proves a negative-weight cycle, and
//! the query fails with `NegativeCycleDetected` instead of returning a path.
//!
//! The domain's weight formula never produces negative weights, but the
//! solver stays general-purpose: it is the correctness oracle the other two
//! are tested against, and it is the only one that answers honestly if a
//! producer ever feeds the graph negative distances.

use flow_core::{LocationId, RoadId};
use flow_graph::CityGraph;

use crate::error::{RouteError, RouteResult};
use crate::route::Route;
use crate::solver::{check_endpoints, reconstruct, trivial_route, PathSolver};

/// Edge-relaxation shortest path with negative-cycle detection.
pub struct BellmanFord;

impl PathSolver for BellmanFord {
    fn find_path(
        &self,
        graph: &CityGraph,
        from: LocationId,
        to: LocationId,
        consider_traffic: bool,
    ) -> RouteResult<Route> {
        check_endpoints(graph, from, to)?;
        if from == to {
            return Ok(trivial_route(from));
        }

        let n = graph.location_count();
        let r = graph.road_count();
        let mut dist = vec![f64::INFINITY; n];
        let mut prev_road = vec![RoadId::INVALID; n];

        dist[from.index()] = 0.0;

        // |V|−1 relaxation rounds, RoadId order — deterministic.
        for _ in 1..n {
            let mut changed = false;
            for i in 0..r {
                let road = RoadId(i as u32);
                let u = graph.road_from[road.index()].index();
                if dist[u].is_infinite() {
                    continue;
                }
                let v = graph.road_to[road.index()].index();
                let candidate = dist[u] + graph.weight(road, consider_traffic);
                if candidate < dist[v] {
                    dist[v] = candidate;
                    prev_road[v] = road;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        // Detection pass: a still-improvable reachable edge means a
        // negative-weight cycle on some path from the source.
        for i in 0..r {
            let road = RoadId(i as u32);
            let u = graph.road_from[road.index()].index();
            if dist[u].is_infinite() {
                continue;
            }
            let v = graph.road_to[road.index()].index();
            if dist[u] + graph.weight(road, consider_traffic) < dist[v] {
                return Err(RouteError::NegativeCycleDetected { from });
            }
        }

        if dist[to.index()].is_infinite() {
            return Err(RouteError::NoPathFound { from, to });
        }
        Ok(reconstruct(graph, &prev_road, from, to, dist[to.index()]))
    }

    fn name(&self) -> &'static str {
        "bellman-ford"
    }
}
