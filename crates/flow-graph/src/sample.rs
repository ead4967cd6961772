//! Reference dataset: a ten-city NCR (Delhi National Capital Region)
//! network with seventeen classed roads and seed traffic fractions.
//!
//! Positions are kilometre-plane coordinates chosen so that every road's
//! base distance exceeds the straight-line separation of its endpoints —
//! the property the A* heuristic relies on.  Used by tests and by the
//! simulation driver's tests; production callers supply their own specs.

use flow_core::{Point, RoadClass};

use crate::graph::{CityGraph, CityGraphBuilder};

/// Build the NCR reference network.
pub fn ncr_city() -> CityGraph {
    let mut b = CityGraphBuilder::with_capacity(10, 17);

    b.add_location("A", "Delhi", Point::new(0.0, 0.0))
        .add_location("B", "Gurgaon", Point::new(2.0, 4.0))
        .add_location("C", "Noida", Point::new(5.0, 2.0))
        .add_location("D", "Faridabad", Point::new(3.0, -2.0))
        .add_location("E", "Sonipat", Point::new(-3.0, 3.0))
        .add_location("F", "Rohtak", Point::new(1.0, 6.0))
        .add_location("G", "Greater Noida", Point::new(6.0, 0.0))
        .add_location("H", "Rewari", Point::new(-2.0, -3.0))
        .add_location("I", "Meerut", Point::new(4.0, 5.0))
        .add_location("J", "Jhajjar", Point::new(-4.0, -1.0));

    // (from, to, km, name, class, seed traffic)
    b.add_road("A", "B", 30.0, "NH-48", RoadClass::TrunkHighway, 0.8)
        .add_road("A", "C", 25.0, "DND Flyway", RoadClass::Connector, 0.5)
        .add_road("A", "D", 28.0, "Mathura Road", RoadClass::Arterial, 0.3)
        .add_road("A", "E", 45.0, "GT Karnal Road", RoadClass::Arterial, 0.6)
        .add_road("B", "F", 70.0, "NH-9", RoadClass::RegionalHighway, 0.2)
        .add_road("B", "I", 80.0, "KMP Expressway", RoadClass::Expressway, 0.4)
        .add_road("C", "G", 20.0, "Noida-Greater Noida Expressway", RoadClass::Connector, 0.1)
        .add_road("C", "I", 65.0, "NH-58", RoadClass::Unclassified, 0.7)
        .add_road("D", "G", 35.0, "Yamuna Expressway", RoadClass::RegionalHighway, 0.5)
        .add_road("D", "H", 90.0, "KMP Expressway", RoadClass::Expressway, 0.3)
        .add_road("E", "F", 50.0, "NH-9", RoadClass::RegionalHighway, 0.4)
        .add_road("E", "J", 60.0, "SH-20", RoadClass::Unclassified, 0.2)
        .add_road("F", "I", 90.0, "NH-334", RoadClass::Unclassified, 0.3)
        .add_road("G", "I", 75.0, "Eastern Peripheral Expressway", RoadClass::Expressway, 0.6)
        .add_road("H", "J", 55.0, "SH-15", RoadClass::Unclassified, 0.4)
        .add_road("I", "F", 90.0, "NH-334B", RoadClass::Unclassified, 0.2)
        .add_road("J", "H", 55.0, "KMP Expressway", RoadClass::Expressway, 0.3);

    b.build().expect("sample network is internally consistent")
}
