//! `flow-sim` — tick-driven traffic simulation over a city graph.
//!
//! # Per-tick pipeline
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Civil    — derive hour / weekday / month from the clock; check holidays.
//!   ② Estimate — one network-wide traffic level (tables + seeded jitter).
//!   ③ Weather  — one seasonal condition draw for the whole network.
//!   ④ Per road — scale by road class, apply the weather impact ceiling.
//!   ⑤ Swap     — install the new traffic vector as a fresh graph snapshot.
//! ```
//!
//! Route queries run against a snapshot taken from [`Simulation::graph`];
//! a concurrent or subsequent tick never mutates it.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | Runs [`batch_routes`] on Rayon's thread pool.       |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use flow_graph::sample::ncr_city;
//! use flow_sim::{NoopObserver, SimConfig, Simulation};
//!
//! let mut sim = Simulation::new(SimConfig::default(), ncr_city());
//! sim.run(&mut NoopObserver);
//! ```

pub mod batch;
pub mod config;
pub mod observer;
pub mod sim;


pub use batch::{batch_routes, RouteQuery};
pub use config::SimConfig;
pub use observer::{NoopObserver, TickObserver};
pub use sim::{Simulation, TickReport};
