//! Time-of-day traffic estimation.
//!
//! # Design
//!
//! The estimate is a product of fixed lookup tables plus one random jitter:
//!
//! ```text
//! level = hourly[hour] * weekday[day] * holiday? 0.6 : 1.0 * U(0.9, 1.1)
//! ```
//!
//! clamped to [0.1, 1.0].  The tables are total fixed-size arrays — every
//! hour and weekday has an entry, so there is no "unknown key" path at
//! runtime.  Out-of-range arguments are masked into range rather than
//! rejected; estimation never fails.
//!
//! The jitter makes `predict` non-deterministic by design.  Callers needing
//! reproducibility inject a seeded [`SimRng`]; no ambient RNG is touched.

use flow_core::{RoadClass, SimClock, SimRng};

/// Base traffic level per hour of day (24-hour clock).
///
/// Morning rush 07–10, evening rush 17–20, near-empty roads overnight.
const HOURLY_BASE: [f32; 24] = [
    0.1, 0.1, 0.1, 0.1, 0.2, 0.3, // 00–05
    0.5, 0.7, 0.9, 0.8, 0.6, 0.4, // 06–11
    0.5, 0.5, 0.4, 0.5, 0.6, 0.8, // 12–17
    0.9, 0.8, 0.6, 0.4, 0.3, 0.2, // 18–23
];

/// Multiplier per day of week (0 = Monday).  Friday runs hot; weekends cool.
const WEEKDAY_FACTOR: [f32; 7] = [1.0, 1.0, 1.0, 1.0, 1.1, 0.7, 0.6];

/// Holiday traffic reduction.
const HOLIDAY_FACTOR: f32 = 0.6;

/// One hour of a traffic forecast.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastPoint {
    /// Unix timestamp of the forecast hour.
    pub unix_secs: i64,
    /// Predicted traffic level in [0.1, 1.0].
    pub level: f32,
}

/// Table-driven traffic estimator.
///
/// Stateless; one value can serve any number of graphs.  All outputs lie in
/// [0.1, 1.0].
#[derive(Clone, Copy, Debug, Default)]
pub struct TrafficEstimator;

impl TrafficEstimator {
    pub fn new() -> Self {
        TrafficEstimator
    }

    /// Predict the network-wide traffic level for a given hour.
    ///
    /// `hour` is taken modulo 24 and `weekday` is clamped to 0–6, so any
    /// input produces a valid estimate.
    pub fn predict(&self, hour: u32, weekday: u32, is_holiday: bool, rng: &mut SimRng) -> f32 {
        let base = HOURLY_BASE[(hour % 24) as usize];
        let mut level = base * WEEKDAY_FACTOR[weekday.min(6) as usize];
        if is_holiday {
            level *= HOLIDAY_FACTOR;
        }
        // ±10 % jitter.
        level *= rng.gen_range(0.9..=1.1);
        level.clamp(0.1, 1.0)
    }

    /// Adjust a network-wide estimate for one road's congestion profile.
    ///
    /// The factor table lives on [`RoadClass`] and is matched exhaustively;
    /// re-clamps to [0.1, 1.0].
    #[inline]
    pub fn for_road(&self, class: RoadClass, base: f32) -> f32 {
        (base * class.congestion_factor()).clamp(0.1, 1.0)
    }

    /// Hourly traffic forecast anchored at the clock's current time.
    ///
    /// Each of the `hours_ahead` points is an independent draw via
    /// [`predict`](Self::predict) — only the hour-of-day and weekday inputs
    /// advance, nothing is chained.  Forecasts assume no holiday; the
    /// simulation driver passes real holiday information to `predict`
    /// directly.
    pub fn forecast(
        &self,
        clock: &SimClock,
        hours_ahead: u32,
        rng: &mut SimRng,
    ) -> Vec<ForecastPoint> {
        let start = clock.current_unix_secs();
        (0..hours_ahead)
            .map(|i| {
                let unix_secs = start + i as i64 * 3_600;
                let civil = flow_core::CivilTime::from_unix(unix_secs);
                let level = self.predict(civil.hour, civil.weekday, false, rng);
                ForecastPoint { unix_secs, level }
            })
            .collect()
    }
}
