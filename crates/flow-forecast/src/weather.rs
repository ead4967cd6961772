//! Stochastic seasonal weather and its traffic impact.
//!
//! # Design
//!
//! The season is a pure function of the calendar month.  Each season carries
//! a categorical distribution over conditions; sampling draws once from an
//! injected [`SimRng`].  Monsoon and summer put zero probability mass on
//! snow.
//!
//! The impact multiplier feeds [`apply_impact`](WeatherModel::apply_impact),
//! the **single** site of the 0.95 near-gridlock ceiling: even compounding
//! multipliers cannot push a road past 95 % congestion.  This is a domain
//! rule, deliberately asymmetric with the estimator's 1.0 clamp.

use flow_core::SimRng;

// ── Season ────────────────────────────────────────────────────────────────────

/// Season of the year as the weather model sees it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Season {
    Winter,
    Summer,
    Monsoon,
}

impl Season {
    /// Derive the season from a calendar month (1–12).
    ///
    /// Dec–Feb winter, Mar–Jun summer, Jul–Nov monsoon.  Out-of-range months
    /// fall into monsoon, the July-onward arm.
    pub fn from_month(month: u32) -> Season {
        match month {
            12 | 1 | 2 => Season::Winter,
            3..=6 => Season::Summer,
            _ => Season::Monsoon,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Summer => "summer",
            Season::Monsoon => "monsoon",
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Season::Winter => 0,
            Season::Summer => 1,
            Season::Monsoon => 2,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── WeatherCondition ──────────────────────────────────────────────────────────

/// Current weather condition and its fixed traffic impact.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeatherCondition {
    Clear,
    Rain,
    HeavyRain,
    Fog,
    Snow,
}

/// All conditions, in the order the seasonal weight rows use.
pub const ALL_CONDITIONS: [WeatherCondition; 5] = [
    WeatherCondition::Clear,
    WeatherCondition::Rain,
    WeatherCondition::HeavyRain,
    WeatherCondition::Fog,
    WeatherCondition::Snow,
];

impl WeatherCondition {
    /// Multiplicative traffic impact, 1.0 (clear) to 1.6 (snow).
    #[inline]
    pub fn impact(self) -> f32 {
        match self {
            WeatherCondition::Clear => 1.0,
            WeatherCondition::Rain => 1.3,
            WeatherCondition::HeavyRain => 1.5,
            WeatherCondition::Fog => 1.4,
            WeatherCondition::Snow => 1.6,
        }
    }

    /// Pictogram for presentation layers.  Plain data, not formatting.
    pub fn icon(self) -> &'static str {
        match self {
            WeatherCondition::Clear => "☀️",
            WeatherCondition::Rain => "🌧️",
            WeatherCondition::HeavyRain => "⛈️",
            WeatherCondition::Fog => "🌫️",
            WeatherCondition::Snow => "❄️",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Normal traffic conditions",
            WeatherCondition::Rain => "Slower speeds, increased congestion",
            WeatherCondition::HeavyRain => "Significant delays, careful driving required",
            WeatherCondition::Fog => "Reduced visibility, slower traffic",
            WeatherCondition::Snow => "Severe delays, hazardous conditions",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeatherCondition::Clear => "clear",
            WeatherCondition::Rain => "rain",
            WeatherCondition::HeavyRain => "heavy rain",
            WeatherCondition::Fog => "fog",
            WeatherCondition::Snow => "snow",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── WeatherModel ──────────────────────────────────────────────────────────────

/// Probability of each condition per season, rows indexed by
/// `Season::index()`, columns matching [`ALL_CONDITIONS`].  Rows sum to 1.
const SEASON_WEIGHTS: [[f32; 5]; 3] = [
    [0.4, 0.2, 0.1, 0.2, 0.1], // winter
    [0.6, 0.2, 0.1, 0.1, 0.0], // summer — no snow
    [0.2, 0.4, 0.3, 0.1, 0.0], // monsoon — no snow
];

/// Maximum traffic fraction attainable after weather impact.  The system
/// models "near-gridlock" as the worst state, never a full 1.0.
pub const IMPACT_CEILING: f32 = 0.95;

/// Structured weather observation for presentation layers: condition name,
/// icon, description, and impact value as plain values.
///
/// Serialize-only: the `&'static str` fields point into the binary, so
/// reports flow outward to presentation code and are never read back.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeatherReport {
    pub season: Season,
    pub condition: WeatherCondition,
    pub impact: f32,
    pub icon: &'static str,
    pub description: &'static str,
}

/// Seasonal weather sampler.
///
/// Stateless between calls — the only persistent input is the season, which
/// the caller derives from its clock's month.
#[derive(Clone, Copy, Debug, Default)]
pub struct WeatherModel;

impl WeatherModel {
    pub fn new() -> Self {
        WeatherModel
    }

    /// Draw one condition from the season's categorical distribution.
    pub fn sample(&self, season: Season, rng: &mut SimRng) -> WeatherCondition {
        let weights = &SEASON_WEIGHTS[season.index()];
        let mut draw: f32 = rng.gen_range(0.0..1.0);
        let mut last_possible = WeatherCondition::Clear;
        for (condition, &w) in ALL_CONDITIONS.iter().zip(weights) {
            if w <= 0.0 {
                continue;
            }
            if draw < w {
                return *condition;
            }
            draw -= w;
            last_possible = *condition;
        }
        // Float rounding can leave a sliver past the final bucket; it
        // belongs to the last condition with positive mass.
        last_possible
    }

    /// Apply a condition's impact to a base traffic level.
    ///
    /// Returns `min(0.95, base * impact)` — the single place the
    /// near-gridlock ceiling is enforced.
    #[inline]
    pub fn apply_impact(&self, base_traffic: f32, condition: WeatherCondition) -> f32 {
        (base_traffic * condition.impact()).min(IMPACT_CEILING)
    }

    /// Bundle a sampled condition into a presentation-ready report.
    pub fn report(&self, season: Season, condition: WeatherCondition) -> WeatherReport {
        WeatherReport {
            season,
            condition,
            impact: condition.impact(),
            icon: condition.icon(),
            description: condition.description(),
        }
    }
}
