//! The `Simulation` struct and its tick loop.

use flow_core::{CivilTime, SimClock, SimRng, Tick};
use flow_forecast::{ForecastPoint, Season, TrafficEstimator, WeatherModel, WeatherReport};
use flow_graph::CityGraph;

use crate::{SimConfig, TickObserver};

// ── TickReport ────────────────────────────────────────────────────────────────

/// What one tick produced: the calendar context it ran under, the
/// network-wide traffic estimate, and the sampled weather.
///
/// The per-road fractions themselves live on the new graph snapshot; read
/// them through [`Simulation::graph`] after the tick.
///
/// Serialize-only, like the [`WeatherReport`] it embeds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TickReport {
    /// The tick that was processed (the clock has advanced past it).
    pub tick: Tick,
    /// Calendar facts the estimator saw.
    pub civil: CivilTime,
    /// Whether the holiday reduction applied.
    pub is_holiday: bool,
    /// Network-wide traffic level before per-road and weather adjustment.
    pub network_level: f32,
    /// The weather drawn for this tick, in presentation-ready form.
    pub weather: WeatherReport,
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// The tick-driven traffic simulation.
///
/// Each tick re-estimates every road's traffic from the current civil time
/// and one freshly sampled weather condition, then replaces the held graph
/// with a new snapshot via [`CityGraph::with_traffic`].  Route queries
/// against a snapshot obtained from [`graph`](Self::graph) are therefore
/// never affected by a concurrent tick — they see one consistent state.
///
/// # Per-tick pipeline
///
/// 1. Read civil time from the clock; look up holiday status.
/// 2. One network-wide estimate: [`TrafficEstimator::predict`].
/// 3. One weather draw for the whole network: [`WeatherModel::sample`].
/// 4. Per road: scale by road class, apply the weather impact ceiling.
/// 5. Swap in the new snapshot and advance the clock.
///
/// All randomness flows from the seeded [`SimRng`]; two simulations built
/// from the same config and graph replay identically.
pub struct Simulation {
    /// Run configuration (start time, tick length, seed, holidays).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick and maps to wall time.
    pub clock: SimClock,

    graph:        CityGraph,
    estimator:    TrafficEstimator,
    weather:      WeatherModel,
    rng:          SimRng,
    forecast_rng: SimRng,
}

impl Simulation {
    // ── Construction ──────────────────────────────────────────────────────

    /// Build a simulation over `graph`, seeded from the config.
    ///
    /// The tick loop and [`forecast`](Self::forecast) get separate RNG
    /// streams split from the one seed, so interleaving forecasts with
    /// ticks does not change what the ticks produce.
    pub fn new(config: SimConfig, graph: CityGraph) -> Self {
        let clock = config.make_clock();
        let mut rng = SimRng::new(config.seed);
        let forecast_rng = rng.child(1);
        Self {
            config,
            clock,
            graph,
            estimator: TrafficEstimator::new(),
            weather: WeatherModel::new(),
            rng,
            forecast_rng,
        }
    }

    /// The current graph snapshot.
    ///
    /// Clone it (cheaply enough for query batches; see
    /// [`batch_routes`][crate::batch_routes]) or borrow it for queries; it
    /// is never mutated in place, only replaced wholesale by [`tick`](Self::tick).
    #[inline]
    pub fn graph(&self) -> &CityGraph {
        &self.graph
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Process one tick: re-estimate all traffic, swap the snapshot,
    /// advance the clock.
    pub fn tick(&mut self) -> TickReport {
        let now = self.clock.current_tick;
        let civil = self.clock.civil();
        let is_holiday = self.config.is_holiday(self.clock.current_unix_secs());

        let network_level =
            self.estimator
                .predict(civil.hour, civil.weekday, is_holiday, &mut self.rng);

        // One draw per tick: weather is a network-wide condition, not a
        // per-road one.
        let season = Season::from_month(civil.month);
        let condition = self.weather.sample(season, &mut self.rng);

        let mut traffic = self.graph.traffic_snapshot();
        for (i, slot) in traffic.iter_mut().enumerate() {
            let level = self.estimator.for_road(self.graph.road_class[i], network_level);
            *slot = self.weather.apply_impact(level, condition);
        }
        self.graph = self.graph.with_traffic(traffic);

        self.clock.advance();

        TickReport {
            tick: now,
            civil,
            is_holiday,
            network_level,
            weather: self.weather.report(season, condition),
        }
    }

    /// Run from the current tick to `config.end_tick()`, invoking observer
    /// hooks at every tick boundary.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: TickObserver>(&mut self, observer: &mut O) {
        while self.clock.current_tick < self.config.end_tick() {
            observer.on_tick_start(self.clock.current_tick);
            let report = self.tick();
            observer.on_tick_end(&report, &self.graph);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: TickObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            observer.on_tick_start(self.clock.current_tick);
            let report = self.tick();
            observer.on_tick_end(&report, &self.graph);
        }
    }

    // ── Forecasting ───────────────────────────────────────────────────────

    /// Hourly traffic forecast anchored at the current clock position.
    ///
    /// Draws come from the dedicated forecast stream, so a run with
    /// forecasts interleaved replays the same tick traffic as a run
    /// without them.
    pub fn forecast(&mut self, hours_ahead: u32) -> Vec<ForecastPoint> {
        self.estimator
            .forecast(&self.clock, hours_ahead, &mut self.forecast_rng)
    }
}
