//! The result of a successful path query.

use flow_core::{LocationId, RoadId};

/// An ordered path through the graph and its total effective cost.
///
/// `locations` always starts at the query source and ends at the
/// destination; `roads` holds the connecting edge for each consecutive
/// pair, so `roads.len() == locations.len() - 1` (both empty only for the
/// trivial source-equals-destination query, where `locations` is the single
/// endpoint).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Visited locations in order, source first.
    pub locations: Vec<LocationId>,
    /// Roads traversed in order, one per hop.
    pub roads: Vec<RoadId>,
    /// Sum of effective weights along `roads`.
    pub total_cost: f64,
}

impl Route {
    /// Number of roads traversed.
    #[inline]
    pub fn hops(&self) -> usize {
        self.roads.len()
    }

    /// `true` if the source and destination are the same location.
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.roads.is_empty()
    }
}
