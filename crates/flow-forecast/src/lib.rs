//! `flow-forecast` — traffic estimation and weather impact.
//!
//! Neither estimator can fail: all numeric inputs are clamped or masked into
//! range, and all randomness comes from an injected [`flow_core::SimRng`].
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`traffic`] | `TrafficEstimator`, `ForecastPoint`                     |
//! | [`weather`] | `Season`, `WeatherCondition`, `WeatherModel`, reports   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod traffic;
pub mod weather;

#[cfg(test)]
mod tests;

pub use traffic::{ForecastPoint, TrafficEstimator};
pub use weather::{
    Season, WeatherCondition, WeatherModel, WeatherReport, ALL_CONDITIONS, IMPACT_CEILING,
};
