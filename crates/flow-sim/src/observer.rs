//! Simulation observer trait for progress reporting and data collection.

use flow_core::Tick;
use flow_graph::CityGraph;

use crate::TickReport;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — congestion logger
///
/// ```rust,ignore
/// struct PeakTracker { worst: f32 }
///
/// impl TickObserver for PeakTracker {
///     fn on_tick_end(&mut self, report: &TickReport, graph: &CityGraph) {
///         let peak = graph.traffic_snapshot().into_iter().fold(0.0f32, f32::max);
///         if peak > self.worst {
///             self.worst = peak;
///             println!("{}: new peak {peak:.2} under {}", report.tick, report.weather.condition);
///         }
///     }
/// }
/// ```
pub trait TickObserver {
    /// Called at the very start of each tick, before any estimation.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each tick's snapshot swap.
    ///
    /// `graph` is the freshly installed snapshot; its traffic reflects the
    /// report's civil time and weather.
    fn on_tick_end(&mut self, _report: &TickReport, _graph: &CityGraph) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`TickObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl TickObserver for NoopObserver {}
