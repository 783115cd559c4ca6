// src/estimator.rs

//! # ROI estimator
//!
//! Compares what the current playlist-placement spend buys against the
//! organic strategy, for one month of streams.
//!
//! `compute` is total: it accepts any input, never fails and never panics.
//! Minimum bounds are the form's business ([`crate::form`]). An unrecognized
//! genre uses the configured fallback rate. When a strategy yields zero real
//! fans, its cost per fan is `None` instead of an infinite or NaN amount.
//!
//! All constants come from [`EstimatorConfig`]; the function itself holds no
//! numbers of its own.

use tracing::{debug, warn};

use crate::config::EstimatorConfig;
use crate::genre::GenreCategory;
use crate::mechanics::{cost, econ, fans};

#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorInput {
    /// Current monthly playlist-placement spend, in currency units.
    pub monthly_spend: f64,
    /// Monthly streams those placements bring in.
    pub monthly_stream_volume: u64,
    pub genre: GenreCategory,
}

impl CalculatorInput {
    pub fn new(monthly_spend: f64, monthly_stream_volume: u64, genre: impl Into<GenreCategory>) -> Self {
        Self { monthly_spend, monthly_stream_volume, genre: genre.into() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorResult {
    pub baseline_real_fans: u64,
    pub baseline_bot_plays: u64,
    pub projected_real_fans: u64,
    pub monthly_savings: f64,
    pub roi_percent: f64,
    /// Real-fan percentage that was applied.
    pub genre_rate: f64,
    pub used_fallback_rate: bool,
    /// Spend per baseline real fan; `None` when there are none.
    pub baseline_cost_per_fan: Option<f64>,
    /// Platform fee per projected real fan; `None` when there are none.
    pub projected_cost_per_fan: Option<f64>,
}

impl CalculatorResult {
    /// Extra real fans the organic strategy is projected to reach.
    pub fn fan_gain(&self) -> u64 {
        self.projected_real_fans.saturating_sub(self.baseline_real_fans)
    }
}

pub fn compute(cfg: &EstimatorConfig, input: &CalculatorInput) -> CalculatorResult {
    let (genre_rate, used_fallback_rate) = cfg.genre_rates.lookup(&input.genre);
    if used_fallback_rate {
        warn!(genre = %input.genre, rate = genre_rate, "unrecognized genre, using fallback rate");
    }

    let volume = input.monthly_stream_volume;
    let baseline = fans::real_fans(volume, genre_rate);
    let bots = fans::bot_plays(volume, baseline);
    let projected = fans::projected_fans(baseline, cfg.performance_multiplier);

    let savings = econ::savings(input.monthly_spend, cfg.platform_fee);
    let roi = econ::roi_percent(savings, input.monthly_spend, baseline, projected);

    let out = CalculatorResult {
        baseline_real_fans: baseline,
        baseline_bot_plays: bots,
        projected_real_fans: projected,
        monthly_savings: savings,
        roi_percent: roi,
        genre_rate,
        used_fallback_rate,
        baseline_cost_per_fan: cost::per_fan(input.monthly_spend, baseline),
        projected_cost_per_fan: cost::per_fan(cfg.platform_fee, projected),
    };
    debug!(
        spend = input.monthly_spend,
        volume,
        genre = %input.genre,
        baseline,
        projected,
        roi,
        "computed roi estimate"
    );
    out
}

/// [`compute`] with the shipped constants.
pub fn estimate(input: &CalculatorInput) -> CalculatorResult {
    compute(&EstimatorConfig::default(), input)
}
