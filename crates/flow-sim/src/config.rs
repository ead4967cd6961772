//! Simulation run configuration.

use std::collections::BTreeSet;

use flow_core::{SimClock, Tick};

/// Global knobs for one simulation run.
///
/// Holidays are stored as Unix **day numbers** (`unix_secs.div_euclid(86_400)`)
/// rather than timestamps so membership is a single integer lookup and a
/// holiday covers its whole civil day regardless of tick resolution.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Unix timestamp of tick 0.
    pub start_unix_secs: i64,
    /// Real seconds per tick.  Default: 3600 (1 hour).
    pub tick_duration_secs: u32,
    /// Run length for [`Simulation::run`][crate::Simulation::run].
    pub total_ticks: u64,
    /// Master RNG seed.  Same seed + same graph = same run.
    pub seed: u64,
    /// Unix day numbers on which holiday traffic reduction applies.
    pub holidays: BTreeSet<i64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_unix_secs:    0,
            tick_duration_secs: 3_600,
            total_ticks:        24,
            seed:               42,
            holidays:           BTreeSet::new(),
        }
    }
}

impl SimConfig {
    /// First tick at or beyond which `run` stops.
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// A fresh clock positioned at tick 0 of this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_unix_secs, self.tick_duration_secs)
    }

    /// Whether the civil day containing `unix_secs` is a configured holiday.
    #[inline]
    pub fn is_holiday(&self, unix_secs: i64) -> bool {
        self.holidays.contains(&unix_secs.div_euclid(86_400))
    }

    /// Mark the civil day containing `unix_secs` as a holiday.
    pub fn add_holiday(&mut self, unix_secs: i64) -> &mut Self {
        self.holidays.insert(unix_secs.div_euclid(86_400));
        self
    }
}
