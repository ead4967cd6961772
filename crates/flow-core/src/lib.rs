//! `flow-core` — foundational types for the flow traffic-routing engine.
//!
//! This crate is a dependency of every other `flow-*` crate.  It
//! intentionally has no `flow-*` dependencies and minimal external ones
//! (only `rand`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                  |
//! |----------------|-------------------------------------------|
//! | [`ids`]        | `LocationId`, `RoadId`                    |
//! | [`point`]      | `Point`, Euclidean distance               |
//! | [`time`]       | `Tick`, `SimClock`, `CivilTime`           |
//! | [`rng`]        | `SimRng` (explicitly seeded, injectable)  |
//! | [`road_class`] | `RoadClass` congestion profiles           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod point;
pub mod rng;
pub mod road_class;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{LocationId, RoadId};
pub use point::Point;
pub use rng::SimRng;
pub use road_class::RoadClass;
pub use time::{CivilTime, SimClock, Tick};
