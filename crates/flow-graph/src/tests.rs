//! Unit tests for flow-graph.

#[cfg(test)]
mod helpers {
    use flow_core::{Point, RoadClass};

    use crate::{CityGraph, CityGraphBuilder};

    /// Three-node scenario graph:
    ///
    ///   A→B (10 km), B→C (10 km), A→C (30 km), all traffic 0.
    ///
    /// Positions keep every base distance ≥ the straight-line separation.
    pub fn triangle() -> CityGraph {
        let mut b = CityGraphBuilder::new();
        b.add_location("A", "Alpha", Point::new(0.0, 0.0))
            .add_location("B", "Bravo", Point::new(6.0, 8.0))
            .add_location("C", "Charlie", Point::new(12.0, 16.0));
        b.add_road("A", "B", 10.0, "AB Road", RoadClass::Arterial, 0.0)
            .add_road("B", "C", 10.0, "BC Road", RoadClass::Arterial, 0.0)
            .add_road("A", "C", 30.0, "AC Bypass", RoadClass::Expressway, 0.0);
        b.build().unwrap()
    }
}

// ── Builder & validation ──────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use flow_core::{Point, RoadClass};

    use crate::{CityGraphBuilder, GraphError};

    #[test]
    fn empty_build() {
        let g = CityGraphBuilder::new().build().unwrap();
        assert_eq!(g.location_count(), 0);
        assert_eq!(g.road_count(), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn unknown_destination_rejected() {
        let mut b = CityGraphBuilder::new();
        b.add_location("A", "Alpha", Point::new(0.0, 0.0));
        b.add_road("A", "Z", 5.0, "Ghost Road", RoadClass::Unclassified, 0.1);
        let err = b.build().unwrap_err();
        match err {
            GraphError::InvalidEdgeReference { road, key } => {
                assert_eq!(road, "Ghost Road");
                assert_eq!(key, "Z");
            }
            other => panic!("expected InvalidEdgeReference, got {other}"),
        }
    }

    #[test]
    fn unknown_origin_rejected() {
        let mut b = CityGraphBuilder::new();
        b.add_location("A", "Alpha", Point::new(0.0, 0.0));
        b.add_road("Z", "A", 5.0, "Ghost Road", RoadClass::Unclassified, 0.1);
        assert!(matches!(
            b.build(),
            Err(GraphError::InvalidEdgeReference { .. })
        ));
    }

    #[test]
    fn duplicate_key_rejected() {
        let mut b = CityGraphBuilder::new();
        b.add_location("A", "Alpha", Point::new(0.0, 0.0));
        b.add_location("A", "Alias", Point::new(1.0, 1.0));
        assert!(matches!(b.build(), Err(GraphError::DuplicateLocation(k)) if k == "A"));
    }

    #[test]
    fn parallel_edges_kept() {
        let mut b = CityGraphBuilder::new();
        b.add_location("A", "Alpha", Point::new(0.0, 0.0));
        b.add_location("B", "Bravo", Point::new(0.0, 1.0));
        b.add_road("A", "B", 5.0, "Old Road", RoadClass::Arterial, 0.2);
        b.add_road("A", "B", 7.0, "New Bypass", RoadClass::Expressway, 0.1);
        let g = b.build().unwrap();
        assert_eq!(g.road_count(), 2);
        let a = g.locate("A").unwrap();
        assert_eq!(g.out_degree(a), 2);
    }

    #[test]
    fn graph_debug_is_a_dimension_summary() {
        // Keeps `build().unwrap_err()` usable in tests: Result::unwrap_err
        // needs the Ok type to be Debug.
        let g = super::helpers::triangle();
        let dump = format!("{g:?}");
        assert!(dump.contains("locations: 3"), "{dump}");
        assert!(dump.contains("roads: 3"), "{dump}");
    }

    #[test]
    fn seed_traffic_clamped() {
        let mut b = CityGraphBuilder::new();
        b.add_location("A", "Alpha", Point::new(0.0, 0.0));
        b.add_location("B", "Bravo", Point::new(0.0, 1.0));
        b.add_road("A", "B", 5.0, "Hot Road", RoadClass::Arterial, 3.5);
        b.add_road("B", "A", 5.0, "Cold Road", RoadClass::Arterial, -0.5);
        let g = b.build().unwrap();
        for r in 0..g.road_count() {
            let t = g.traffic_fraction(flow_core::RoadId(r as u32));
            assert!((0.0..=1.0).contains(&t));
        }
    }
}

// ── Effective weight ──────────────────────────────────────────────────────────

#[cfg(test)]
mod weight {
    use crate::TRAFFIC_WEIGHT_FACTOR;

    use super::helpers::triangle;

    #[test]
    fn base_distance_when_traffic_ignored() {
        let g = triangle();
        let a = g.locate("A").unwrap();
        for (road, _) in g.neighbors(a) {
            assert_eq!(g.weight(road, false), g.road_distance_km[road.index()] as f64);
        }
    }

    #[test]
    fn formula_matches_known_values() {
        let mut g = triangle();
        let a = g.locate("A").unwrap();
        let b = g.locate("B").unwrap();
        let (ab, _) = g.neighbors(a).find(|&(_, to)| to == b).unwrap();

        // 1e-6 tolerance: fractions are stored as f32, so 0.9 arrives as
        // 0.9000000357..., not exactly 0.9.
        g.set_traffic_fraction(ab, 0.9);
        assert!((g.weight(ab, true) - 28.0).abs() < 1e-6); // 10 · (1 + 0.9·2)

        g.set_traffic_fraction(ab, 1.0);
        assert!((g.weight(ab, true) - 30.0).abs() < 1e-9); // 10 · (1 + 2)
    }

    #[test]
    fn weight_never_below_distance() {
        let mut g = triangle();
        let a = g.locate("A").unwrap();
        let roads: Vec<_> = g.out_roads(a).collect();
        for &road in &roads {
            for t in [0.0, 0.25, 0.5, 1.0] {
                g.set_traffic_fraction(road, t);
                let d = g.road_distance_km[road.index()] as f64;
                let w = g.weight(road, true);
                assert!(w >= d);
                if t > 0.0 {
                    assert!(w > d, "weight must be strictly above distance at t={t}");
                }
            }
        }
    }

    #[test]
    fn factor_is_two() {
        // The near-gridlock weight is exactly 3× the base distance.
        assert_eq!(TRAFFIC_WEIGHT_FACTOR, 2.0);
    }
}

// ── Traffic fractions & snapshots ─────────────────────────────────────────────

#[cfg(test)]
mod traffic {
    use flow_core::RoadId;

    use super::helpers::triangle;

    #[test]
    fn setter_clamps_silently() {
        let mut g = triangle();
        g.set_traffic_fraction(RoadId(0), 2.5);
        assert_eq!(g.traffic_fraction(RoadId(0)), 1.0);
        g.set_traffic_fraction(RoadId(0), -1.0);
        assert_eq!(g.traffic_fraction(RoadId(0)), 0.0);
    }

    #[test]
    fn snapshot_swap_leaves_original_untouched() {
        let g = triangle();
        let mut next = g.traffic_snapshot();
        next.fill(0.7);
        let g2 = g.with_traffic(next);

        for r in 0..g.road_count() {
            assert_eq!(g.traffic_fraction(RoadId(r as u32)), 0.0);
            assert_eq!(g2.traffic_fraction(RoadId(r as u32)), 0.7);
        }
        // Topology shared by value: same counts, same names.
        assert_eq!(g.road_count(), g2.road_count());
        assert_eq!(g.road_name, g2.road_name);
    }

    #[test]
    fn swap_clamps_incoming_vector() {
        let g = triangle();
        let g2 = g.with_traffic(vec![5.0, -2.0, 0.5]);
        assert_eq!(g2.traffic_fraction(RoadId(0)), 1.0);
        assert_eq!(g2.traffic_fraction(RoadId(1)), 0.0);
        assert_eq!(g2.traffic_fraction(RoadId(2)), 0.5);
    }

    #[test]
    #[should_panic(expected = "traffic vector length")]
    fn swap_rejects_wrong_length() {
        let g = triangle();
        let _ = g.with_traffic(vec![0.0; 2]);
    }
}

// ── Traversal ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod traversal {
    use super::helpers::triangle;

    #[test]
    fn neighbors_and_degrees() {
        let g = triangle();
        let a = g.locate("A").unwrap();
        let c = g.locate("C").unwrap();

        assert_eq!(g.out_degree(a), 2); // A→B, A→C
        let dests: Vec<_> = g.neighbors(a).map(|(_, to)| to).collect();
        assert!(dests.contains(&g.locate("B").unwrap()));
        assert!(dests.contains(&c));

        // C is a sink: empty sequence, not an error.
        assert_eq!(g.out_degree(c), 0);
        assert_eq!(g.neighbors(c).count(), 0);
    }

    #[test]
    fn csr_origin_consistency() {
        let g = triangle();
        for loc in 0..g.location_count() {
            let id = flow_core::LocationId(loc as u32);
            for road in g.out_roads(id) {
                assert_eq!(g.road_from[road.index()], id);
            }
        }
    }

    #[test]
    fn locate_unknown_key() {
        let g = triangle();
        assert!(g.locate("nowhere").is_none());
        assert!(!g.contains(flow_core::LocationId(99)));
    }
}

// ── Spatial queries ───────────────────────────────────────────────────────────

#[cfg(test)]
mod spatial {
    use flow_core::Point;

    use crate::CityGraphBuilder;

    use super::helpers::triangle;

    #[test]
    fn nearest_location() {
        let g = triangle();
        let a = g.locate("A").unwrap();
        let b = g.locate("B").unwrap();
        assert_eq!(g.nearest_location(Point::new(0.1, -0.2)), Some(a));
        assert_eq!(g.nearest_location(Point::new(5.0, 7.0)), Some(b));
    }

    #[test]
    fn k_nearest_ordering() {
        let g = triangle();
        let near = g.k_nearest_locations(Point::new(0.0, 0.0), 2);
        assert_eq!(near[0], g.locate("A").unwrap());
        assert_eq!(near[1], g.locate("B").unwrap());
    }

    #[test]
    fn empty_graph_returns_none() {
        let g = CityGraphBuilder::new().build().unwrap();
        assert!(g.nearest_location(Point::new(0.0, 0.0)).is_none());
    }
}

// ── Sample network ────────────────────────────────────────────────────────────

#[cfg(test)]
mod sample {
    use flow_core::RoadId;

    use crate::sample::ncr_city;

    #[test]
    fn dimensions() {
        let g = ncr_city();
        assert_eq!(g.location_count(), 10);
        assert_eq!(g.road_count(), 17);
        assert_eq!(g.location_name[g.locate("A").unwrap().index()], "Delhi");
    }

    #[test]
    fn invariants_hold() {
        let g = ncr_city();
        for r in 0..g.road_count() {
            let road = RoadId(r as u32);
            let t = g.traffic_fraction(road);
            assert!((0.0..=1.0).contains(&t));
            assert!(g.road_distance_km[road.index()] > 0.0);
            assert!(g.weight(road, true) >= g.road_distance_km[road.index()] as f64);
            assert!(g.contains(g.road_to[road.index()]));
            assert!(g.contains(g.road_from[road.index()]));
        }
    }

    #[test]
    fn distances_dominate_separation() {
        // Required for the A* heuristic to stay admissible on this dataset.
        let g = ncr_city();
        for r in 0..g.road_count() {
            let road = RoadId(r as u32);
            let from = g.position(g.road_from[road.index()]);
            let to = g.position(g.road_to[road.index()]);
            assert!(
                g.road_distance_km[road.index()] >= from.distance_km(to),
                "road {} shorter than straight line",
                g.road_name[road.index()]
            );
        }
    }
}
