//! `flow-graph` — the city graph model with traffic-dependent edge weights.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`graph`]  | `CityGraph` (CSR + R-tree), `CityGraphBuilder`, specs     |
//! | [`sample`] | the NCR reference network                                 |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod error;
pub mod graph;
pub mod sample;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use graph::{CityGraph, CityGraphBuilder, LocationSpec, RoadSpec, TRAFFIC_WEIGHT_FACTOR};
