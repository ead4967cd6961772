//! Road classification enum shared between the graph and the estimators.
//!
//! The congestion factor table is keyed by this enum and matched
//! exhaustively, so an unrecognised road identity is a construction-time
//! concern (pick a class when building the graph), never a silent runtime
//! default on a name string.

/// Congestion profile of a road, assigned at graph construction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum RoadClass {
    /// Major trunk highway, typically busier than its surroundings.
    TrunkHighway,
    /// Major connecting route between population centres.
    Connector,
    /// Ordinary arterial road.
    Arterial,
    /// Regional highway, slightly below-average load.
    RegionalHighway,
    /// Access-controlled expressway, usually less congested.
    Expressway,
    /// No specific profile known (default state).
    #[default]
    Unclassified,
}

impl RoadClass {
    /// Fixed per-class traffic multiplier, 0.8–1.2.
    #[inline]
    pub fn congestion_factor(self) -> f32 {
        match self {
            RoadClass::TrunkHighway    => 1.2,
            RoadClass::Connector       => 1.1,
            RoadClass::Arterial        => 1.0,
            RoadClass::RegionalHighway => 0.9,
            RoadClass::Expressway      => 0.8,
            RoadClass::Unclassified    => 1.0,
        }
    }

    /// Human-readable label, useful for tables handed to presentation code.
    pub fn as_str(self) -> &'static str {
        match self {
            RoadClass::TrunkHighway    => "trunk highway",
            RoadClass::Connector       => "connector",
            RoadClass::Arterial        => "arterial",
            RoadClass::RegionalHighway => "regional highway",
            RoadClass::Expressway      => "expressway",
            RoadClass::Unclassified    => "unclassified",
        }
    }
}

impl std::fmt::Display for RoadClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
