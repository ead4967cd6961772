//! Classic single-source Dijkstra.
//!
//! Requires non-negative edge weights — guaranteed by the effective-weight
//! formula whenever base distances are non-negative.  Frontier entries are
//! `(cost, location)` pairs, so equal-cost ties break on the lower
//! `LocationId` and repeated runs over identical input reproduce the same
//! path exactly.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use flow_core::{LocationId, RoadId};
use flow_graph::CityGraph;

use crate::cost::Cost;
use crate::error::{RouteError, RouteResult};
use crate::route::Route;
use crate::solver::{check_endpoints, reconstruct, trivial_route, PathSolver};

/// Priority-frontier shortest path, the default solver.
pub struct Dijkstra;

impl PathSolver for Dijkstra {
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
        // dist[v] = best known cost to reach v.
        let mut dist = vec![Cost::INFINITY; n];
        // prev_road[v] = road that reached v; INVALID for unreached nodes.
        let mut prev_road = vec![RoadId::INVALID; n];

        dist[from.index()] = Cost::ZERO;

        // Min-heap: Reverse makes BinaryHeap (max) behave as min-heap.
        // Secondary key LocationId ensures deterministic tie-breaking.
        let mut heap: BinaryHeap<Reverse<(Cost, LocationId)>> = BinaryHeap::new();
        heap.push(Reverse((Cost::ZERO, from)));

        while let Some(Reverse((cost, node))) = heap.pop() {
            if node == to {
                return Ok(reconstruct(graph, &prev_road, from, to, cost.0));
            }

            // Skip stale heap entries.
            if cost > dist[node.index()] {
                continue;
            }

            for (road, neighbor) in graph.neighbors(node) {
                let new_cost = cost + Cost(graph.weight(road, consider_traffic));
                if new_cost < dist[neighbor.index()] {
                    dist[neighbor.index()] = new_cost;
                    prev_road[neighbor.index()] = road;
                    heap.push(Reverse((new_cost, neighbor)));
                }
            }
        }

        Err(RouteError::NoPathFound { from, to })
    }

    fn name(&self) -> &'static str {
        "dijkstra"
    }
}
