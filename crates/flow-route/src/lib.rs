//! `flow-route` — the pathfinding engine.
//!
//! Three interchangeable solvers over a [`flow_graph::CityGraph`] snapshot:
//! they agree on optimal cost under non-negative weights and diverge only in
//! performance characteristics and negative-weight handling.
//!
//! # Crate layout
//!
//! | Module           | Contents                                      |
//! |------------------|-----------------------------------------------|
//! | [`solver`]       | `PathSolver` trait, `Algorithm`, shared steps |
//! | [`dijkstra`]     | `Dijkstra`                                    |
//! | [`astar`]        | `AStar`                                       |
//! | [`bellman_ford`] | `BellmanFord`                                 |
//! | [`route`]        | `Route`                                       |
//! | [`cost`]         | `Cost` total-order float wrapper              |
//! | [`error`]        | `RouteError`, `RouteResult<T>`                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod astar;
pub mod bellman_ford;
pub mod cost;
pub mod dijkstra;
pub mod error;
pub mod route;
pub mod solver;


pub use astar::AStar;
pub use bellman_ford::BellmanFord;
pub use cost::Cost;
pub use dijkstra::Dijkstra;
pub use error::{RouteError, RouteResult};
pub use route::Route;
pub use solver::{Algorithm, PathSolver};
