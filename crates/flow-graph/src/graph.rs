//! City graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing roads.
//! Given a `LocationId n`, its outgoing roads occupy the slice:
//!
//! ```text
//! road_from[ road_out_start[n] .. road_out_start[n+1] ]
//! ```
//!
//! All road arrays (`road_from`, `road_to`, `road_distance_km`, `road_name`,
//! `road_class`, traffic fractions) are sorted by origin and indexed by
//! `RoadId`.  Iteration over a location's outgoing roads is therefore a
//! contiguous memory scan — ideal for the solvers' inner loops.
//!
//! # Effective weight
//!
//! The cost the solvers see is derived on every call, never cached:
//!
//! ```text
//! weight = distance_km * (1 + traffic * TRAFFIC_WEIGHT_FACTOR)   (traffic on)
//! weight = distance_km                                            (traffic off)
//! ```
//!
//! Traffic fractions mutate between queries, so a cached weight would go
//! stale immediately.  Weight ≥ distance always holds for non-negative
//! distances because fractions are clamped to [0, 1].
//!
//! # Snapshot discipline
//!
//! A solver query reads one `CityGraph` value for its whole duration.  The
//! simulation driver never mutates a graph that readers hold; it builds the
//! next tick's traffic vector and swaps in a fresh snapshot via
//! [`CityGraph::with_traffic`].  `set_traffic_fraction` exists for callers
//! that own their graph exclusively.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use flow_core::{LocationId, Point, RoadClass, RoadId};

use crate::error::{GraphError, GraphResult};

/// Multiplier applied to the traffic fraction in the effective-weight
/// formula: a fully congested road costs three times its base distance.
pub const TRAFFIC_WEIGHT_FACTOR: f64 = 2.0;

// ── R-tree location entry ─────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[x, y]` point with the
/// associated `LocationId`.
#[derive(Clone)]
struct LocationEntry {
    point: [f32; 2],
    id: LocationId,
}

impl RTreeObject for LocationEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for LocationEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Construction input ────────────────────────────────────────────────────────

/// One location in the graph-construction input.
///
/// The `key` is the producer's stable external identifier; internally every
/// location becomes a dense [`LocationId`].  Immutable after construction.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationSpec {
    pub key: String,
    pub name: String,
    pub position: Point,
}

/// One directed road in the graph-construction input.
///
/// Parallel roads between the same pair of locations are kept as distinct
/// edges when their names differ; the model never deduplicates them.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadSpec {
    pub from: String,
    pub to: String,
    /// Base distance in kilometres.
    pub distance_km: f32,
    pub name: String,
    pub class: RoadClass,
    /// Seed traffic fraction; clamped to [0, 1] at build time.
    pub traffic: f32,
}

// ── CityGraph ─────────────────────────────────────────────────────────────────

/// Directed city graph in CSR format plus a spatial index over locations.
///
/// Column arrays are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`CityGraphBuilder`].
#[derive(Clone)]
pub struct CityGraph {
    // ── Location data (indexed by LocationId) ─────────────────────────────
    /// External identifier of each location.
    pub location_key: Vec<String>,
    /// Display name of each location.
    pub location_name: Vec<String>,
    /// Planar position; used only by the A* heuristic and nearest queries.
    pub location_pos: Vec<Point>,

    // ── CSR road adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing roads of location `n` are at RoadIds
    /// `road_out_start[n] .. road_out_start[n+1]`.  Length = locations + 1.
    pub road_out_start: Vec<u32>,

    // ── Road data (indexed by RoadId = position in sorted order) ──────────
    /// Origin of each road.  Redundant with CSR but required for efficient
    /// path reconstruction (trace a predecessor road back to its origin).
    pub road_from: Vec<LocationId>,
    /// Destination of each road.
    pub road_to: Vec<LocationId>,
    /// Base distance in kilometres.
    pub road_distance_km: Vec<f32>,
    /// Display name (e.g. "NH-48").
    pub road_name: Vec<String>,
    /// Congestion profile, consumed by the traffic estimator.
    pub road_class: Vec<RoadClass>,

    /// Current traffic fraction per road, each in [0.0, 1.0].  Private so
    /// every write path goes through the clamping setter or a snapshot swap.
    traffic: Vec<f32>,

    // ── Lookup structures ─────────────────────────────────────────────────
    key_to_id: FxHashMap<String, LocationId>,
    spatial_idx: RTree<LocationEntry>,
}

impl CityGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.location_pos.len()
    }

    pub fn road_count(&self) -> usize {
        self.road_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.location_pos.is_empty()
    }

    /// `true` if `location` indexes a real location in this graph.
    #[inline]
    pub fn contains(&self, location: LocationId) -> bool {
        location.index() < self.location_count()
    }

    /// Resolve an external key to its dense id.
    pub fn locate(&self, key: &str) -> Option<LocationId> {
        self.key_to_id.get(key).copied()
    }

    #[inline]
    pub fn position(&self, location: LocationId) -> Point {
        self.location_pos[location.index()]
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `RoadId`s of all outgoing roads from `location`.
    ///
    /// This is a contiguous index range — no heap allocation.  A sink
    /// location yields an empty iterator, which is not an error.
    #[inline]
    pub fn out_roads(&self, location: LocationId) -> impl Iterator<Item = RoadId> + '_ {
        let start = self.road_out_start[location.index()] as usize;
        let end = self.road_out_start[location.index() + 1] as usize;
        (start..end).map(|i| RoadId(i as u32))
    }

    /// Outgoing `(road, destination)` pairs from `location`.
    #[inline]
    pub fn neighbors(&self, location: LocationId) -> impl Iterator<Item = (RoadId, LocationId)> + '_ {
        self.out_roads(location)
            .map(|r| (r, self.road_to[r.index()]))
    }

    /// Out-degree of `location` (number of outgoing roads).
    #[inline]
    pub fn out_degree(&self, location: LocationId) -> usize {
        let start = self.road_out_start[location.index()] as usize;
        let end = self.road_out_start[location.index() + 1] as usize;
        end - start
    }

    // ── Effective weight ──────────────────────────────────────────────────

    /// Effective cost of `road`, derived from the current traffic fraction.
    ///
    /// Pure function of current state — no side effects, nothing cached.
    #[inline]
    pub fn weight(&self, road: RoadId, consider_traffic: bool) -> f64 {
        let d = self.road_distance_km[road.index()] as f64;
        if consider_traffic {
            d * (1.0 + self.traffic[road.index()] as f64 * TRAFFIC_WEIGHT_FACTOR)
        } else {
            d
        }
    }

    // ── Traffic fractions ─────────────────────────────────────────────────

    /// Current traffic fraction of `road`.
    #[inline]
    pub fn traffic_fraction(&self, road: RoadId) -> f32 {
        self.traffic[road.index()]
    }

    /// Overwrite one road's traffic fraction.
    ///
    /// Out-of-range inputs are silently clamped to [0.0, 1.0], matching the
    /// bounded-multiplier contract of the estimators.  The only mutator.
    #[inline]
    pub fn set_traffic_fraction(&mut self, road: RoadId, value: f32) {
        self.traffic[road.index()] = value.clamp(0.0, 1.0);
    }

    /// Clone the current traffic fractions, e.g. as the starting point for
    /// the next tick's vector.
    pub fn traffic_snapshot(&self) -> Vec<f32> {
        self.traffic.clone()
    }

    /// Produce a new snapshot sharing this graph's topology but carrying
    /// `traffic` as its fractions (each clamped to [0.0, 1.0]).
    ///
    /// Readers of `self` are unaffected — this is the swap half of the
    /// snapshot-and-swap discipline used by the simulation driver.
    ///
    /// # Panics
    /// Panics if `traffic.len() != self.road_count()`.
    pub fn with_traffic(&self, mut traffic: Vec<f32>) -> CityGraph {
        assert_eq!(
            traffic.len(),
            self.road_count(),
            "traffic vector length must match road count"
        );
        for t in &mut traffic {
            *t = t.clamp(0.0, 1.0);
        }
        let mut next = self.clone();
        next.traffic = traffic;
        next
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the `LocationId` nearest to `pos`.
    ///
    /// Returns `None` only if the graph has no locations.
    pub fn nearest_location(&self, pos: Point) -> Option<LocationId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|e| e.id)
    }

    /// Return up to `k` nearest locations to `pos`, ascending by distance.
    pub fn k_nearest_locations(&self, pos: Point, k: usize) -> Vec<LocationId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .take(k)
            .map(|e| e.id)
            .collect()
    }
}

/// Summary form: the column arrays and the R-tree are too large to dump,
/// and `rstar::RTree` has no `Debug` impl anyway.
impl std::fmt::Debug for CityGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CityGraph")
            .field("locations", &self.location_count())
            .field("roads", &self.road_count())
            .finish_non_exhaustive()
    }
}

// ── CityGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`CityGraph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts locations and directed roads in any order and
/// validates referential integrity only at `build()` time: every road must
/// name two known location keys, and location keys must be unique.  On any
/// violation `build()` fails and no graph is produced.
///
/// # Example
///
/// ```
/// use flow_core::{Point, RoadClass};
/// use flow_graph::CityGraphBuilder;
///
/// let mut b = CityGraphBuilder::new();
/// b.add_location("A", "Delhi", Point::new(0.0, 0.0));
/// b.add_location("B", "Gurgaon", Point::new(2.0, 4.0));
/// b.add_road("A", "B", 30.0, "NH-48", RoadClass::TrunkHighway, 0.8);
/// let graph = b.build().unwrap();
/// assert_eq!(graph.location_count(), 2);
/// assert_eq!(graph.road_count(), 1);
/// ```
pub struct CityGraphBuilder {
    locations: Vec<LocationSpec>,
    roads: Vec<RoadSpec>,
}

impl CityGraphBuilder {
    pub fn new() -> Self {
        Self { locations: Vec::new(), roads: Vec::new() }
    }

    /// Pre-allocate for the expected number of locations and roads.
    pub fn with_capacity(locations: usize, roads: usize) -> Self {
        Self {
            locations: Vec::with_capacity(locations),
            roads: Vec::with_capacity(roads),
        }
    }

    /// Build directly from producer-supplied spec records.
    pub fn from_specs(locations: Vec<LocationSpec>, roads: Vec<RoadSpec>) -> Self {
        Self { locations, roads }
    }

    /// Add a location under a unique external key.
    pub fn add_location(&mut self, key: &str, name: &str, position: Point) -> &mut Self {
        self.locations.push(LocationSpec {
            key: key.to_owned(),
            name: name.to_owned(),
            position,
        });
        self
    }

    /// Add a **directed** road from `from` to `to`.
    pub fn add_road(
        &mut self,
        from: &str,
        to: &str,
        distance_km: f32,
        name: &str,
        class: RoadClass,
        traffic: f32,
    ) -> &mut Self {
        self.roads.push(RoadSpec {
            from: from.to_owned(),
            to: to.to_owned(),
            distance_km,
            name: name.to_owned(),
            class,
            traffic,
        });
        self
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    /// Consume the builder and produce a [`CityGraph`].
    ///
    /// Fails with [`GraphError::DuplicateLocation`] or
    /// [`GraphError::InvalidEdgeReference`]; on failure nothing of the graph
    /// survives.  Time complexity: O(R log R) for the edge sort plus
    /// O(L log L) for the R-tree bulk load.
    pub fn build(self) -> GraphResult<CityGraph> {
        // Resolve keys first so every road error names the offending key.
        let mut key_to_id =
            FxHashMap::with_capacity_and_hasher(self.locations.len(), Default::default());
        for (i, loc) in self.locations.iter().enumerate() {
            let id = LocationId(i as u32);
            if key_to_id.insert(loc.key.clone(), id).is_some() {
                return Err(GraphError::DuplicateLocation(loc.key.clone()));
            }
        }

        struct RawRoad {
            from: LocationId,
            to: LocationId,
            spec: RoadSpec,
        }

        let mut raw = Vec::with_capacity(self.roads.len());
        for spec in self.roads {
            let resolve = |key: &str| {
                key_to_id
                    .get(key)
                    .copied()
                    .ok_or_else(|| GraphError::InvalidEdgeReference {
                        road: spec.name.clone(),
                        key: key.to_owned(),
                    })
            };
            let from = resolve(&spec.from)?;
            let to = resolve(&spec.to)?;
            raw.push(RawRoad { from, to, spec });
        }

        // Sort roads by origin for CSR construction.  Stable sort keeps the
        // insertion order of parallel edges deterministic.
        raw.sort_by_key(|r| r.from.0);

        let location_count = self.locations.len();
        let road_count = raw.len();

        let road_from: Vec<LocationId> = raw.iter().map(|r| r.from).collect();
        let road_to: Vec<LocationId> = raw.iter().map(|r| r.to).collect();
        let road_distance_km: Vec<f32> = raw.iter().map(|r| r.spec.distance_km).collect();
        let road_class: Vec<RoadClass> = raw.iter().map(|r| r.spec.class).collect();
        let traffic: Vec<f32> = raw
            .iter()
            .map(|r| r.spec.traffic.clamp(0.0, 1.0))
            .collect();
        let road_name: Vec<String> = raw.into_iter().map(|r| r.spec.name).collect();

        // Build CSR row pointer.
        let mut road_out_start = vec![0u32; location_count + 1];
        for from in &road_from {
            road_out_start[from.index() + 1] += 1;
        }
        for i in 1..=location_count {
            road_out_start[i] += road_out_start[i - 1];
        }
        debug_assert_eq!(road_out_start[location_count] as usize, road_count);

        // Bulk-load the R-tree (faster than L single inserts).
        let entries: Vec<LocationEntry> = self
            .locations
            .iter()
            .enumerate()
            .map(|(i, loc)| LocationEntry {
                point: [loc.position.x, loc.position.y],
                id: LocationId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        let mut location_key = Vec::with_capacity(location_count);
        let mut location_name = Vec::with_capacity(location_count);
        let mut location_pos = Vec::with_capacity(location_count);
        for loc in self.locations {
            location_key.push(loc.key);
            location_name.push(loc.name);
            location_pos.push(loc.position);
        }

        Ok(CityGraph {
            location_key,
            location_name,
            location_pos,
            road_out_start,
            road_from,
            road_to,
            road_distance_km,
            road_name,
            road_class,
            traffic,
            key_to_id,
            spatial_idx,
        })
    }
}

impl Default for CityGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
