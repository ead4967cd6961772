//! Planar coordinate type.
//!
//! Locations live on an abstract x/y plane measured in kilometres — the
//! engine never renders a map, so there is no geodesy here.  The coordinate
//! is used for exactly two things: the A* straight-line heuristic and
//! nearest-location queries.  Both need the same property: the Euclidean
//! separation of two locations never exceeds the base distance of any road
//! joining them.

/// A 2-D plane coordinate in kilometres, stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line (Euclidean) distance in kilometres.
    ///
    /// This is the admissible A* heuristic: a lower bound on any road
    /// distance between the two points, and therefore also on any
    /// traffic-inflated weight (inflation only ever increases cost).
    #[inline]
    pub fn distance_km(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Cheap bounding-box rejection check before an exact distance test.
    #[inline]
    pub fn within_bbox(self, center: Point, half_km: f32) -> bool {
        (self.x - center.x).abs() <= half_km && (self.y - center.y).abs() <= half_km
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
