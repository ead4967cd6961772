//! A* — Dijkstra with an admissible straight-line heuristic.
//!
//! The heuristic is the Euclidean distance between a location's position and
//! the destination's, in the same kilometre units as edge weights.  It never
//! overestimates as long as every road's base distance is at least the
//! straight-line separation of its endpoints; traffic inflation only raises
//! costs further, so the raw-coordinate heuristic stays a lower bound on the
//! traffic-inflated remaining cost.
//!
//! Frontier priority = accumulated cost + heuristic.  Heap entries carry
//! `(f, g, location)` so stale entries are detected on `g` and ties break
//! deterministically on the location id.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use flow_core::{LocationId, RoadId};
use flow_graph::CityGraph;

use crate::cost::Cost;
use crate::error::{RouteError, RouteResult};
use crate::route::Route;
use crate::solver::{check_endpoints, reconstruct, trivial_route, PathSolver};

/// Heuristic-guided shortest path; same optimal cost as Dijkstra, fewer
/// expansions when the goal lies in a consistent direction.
pub struct AStar;

#[inline]
fn heuristic(graph: &CityGraph, node: LocationId, goal: LocationId) -> Cost {
    Cost(graph.position(node).distance_km(graph.position(goal)) as f64)
}

impl PathSolver for AStar {
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
        let mut dist = vec![Cost::INFINITY; n];
        let mut prev_road = vec![RoadId::INVALID; n];

        dist[from.index()] = Cost::ZERO;

        // Entries are (f = g + h, g, location).
        let mut heap: BinaryHeap<Reverse<(Cost, Cost, LocationId)>> = BinaryHeap::new();
        heap.push(Reverse((heuristic(graph, from, to), Cost::ZERO, from)));

        while let Some(Reverse((_f, g, node))) = heap.pop() {
            if node == to {
                return Ok(reconstruct(graph, &prev_road, from, to, g.0));
            }

            if g > dist[node.index()] {
                continue;
            }

            for (road, neighbor) in graph.neighbors(node) {
                let tentative = g + Cost(graph.weight(road, consider_traffic));
                if tentative < dist[neighbor.index()] {
                    dist[neighbor.index()] = tentative;
                    prev_road[neighbor.index()] = road;
                    let f = tentative + heuristic(graph, neighbor, to);
                    heap.push(Reverse((f, tentative, neighbor)));
                }
            }
        }

        Err(RouteError::NoPathFound { from, to })
    }

    fn name(&self) -> &'static str {
        "a-star"
    }
}
