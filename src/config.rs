//! Estimator configuration.
//!
//! Every business constant of the calculator lives here so the figures can
//! change without touching the formulas. `Default` reproduces the values the
//! landing page ships with; a TOML file may override any subset of them.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::genre::{Genre, GenreCategory};

pub const DEFAULT_PERFORMANCE_MULTIPLIER: f64 = 3.2;
pub const DEFAULT_PLATFORM_FEE: f64 = 299.0;
pub const DEFAULT_FALLBACK_RATE: f64 = 15.0;
pub const DEFAULT_MIN_MONTHLY_SPEND: f64 = 100.0;
pub const DEFAULT_MIN_STREAM_VOLUME: u64 = 1_000;
pub const DEFAULT_CALCULATION_DELAY_MS: u64 = 1_500;

/// Real-fan percentage per genre, in (0, 100].
///
/// One field per [`Genre`], so a known genre can never miss its entry;
/// `fallback_rate` only applies to unrecognized labels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct GenreRates {
    pub pop: f64,
    pub hip_hop: f64,
    pub electronic: f64,
    pub rock: f64,
    pub indie: f64,
    pub other: f64,
    #[serde(rename = "fallback_rate", alias = "fallback-rate")]
    pub fallback_rate: f64,
}

impl Default for GenreRates {
    fn default() -> Self {
        Self {
            pop: 12.0,
            hip_hop: 14.0,
            electronic: 16.0,
            rock: 18.0,
            indie: 22.0,
            other: 15.0,
            fallback_rate: DEFAULT_FALLBACK_RATE,
        }
    }
}

impl GenreRates {
    pub fn rate(&self, genre: Genre) -> f64 {
        match genre {
            Genre::Pop => self.pop,
            Genre::HipHop => self.hip_hop,
            Genre::Electronic => self.electronic,
            Genre::Rock => self.rock,
            Genre::Indie => self.indie,
            Genre::Other => self.other,
        }
    }

    /// Rate for a submitted category and whether the fallback was used.
    pub fn lookup(&self, category: &GenreCategory) -> (f64, bool) {
        match category {
            GenreCategory::Known(g) => (self.rate(*g), false),
            GenreCategory::Unrecognized(_) => (self.fallback_rate, true),
        }
    }

    fn validate(&self) -> Result<()> {
        let entries = Genre::ALL
            .into_iter()
            .map(|g| (g.as_str(), self.rate(g)))
            .chain(std::iter::once(("fallback_rate", self.fallback_rate)));
        for (name, rate) in entries {
            if !(rate > 0.0 && rate <= 100.0) {
                return Err(Error::Config(format!(
                    "genre rate {name} must be in (0, 100], got {rate}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EstimatorConfig {
    /// How many more real fans the organic strategy is assumed to reach.
    pub performance_multiplier: f64,
    /// Monthly cost of the organic strategy.
    pub platform_fee: f64,
    pub min_monthly_spend: f64,
    pub min_stream_volume: u64,
    /// Simulated "Calculating..." time before results are revealed.
    pub calculation_delay_ms: u64,
    pub genre_rates: GenreRates,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            performance_multiplier: DEFAULT_PERFORMANCE_MULTIPLIER,
            platform_fee: DEFAULT_PLATFORM_FEE,
            min_monthly_spend: DEFAULT_MIN_MONTHLY_SPEND,
            min_stream_volume: DEFAULT_MIN_STREAM_VOLUME,
            calculation_delay_ms: DEFAULT_CALCULATION_DELAY_MS,
            genre_rates: GenreRates::default(),
        }
    }
}

impl EstimatorConfig {
    /// Parse and validate a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: EstimatorConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let cfg = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            multiplier = cfg.performance_multiplier,
            platform_fee = cfg.platform_fee,
            "loaded estimator config"
        );
        Ok(cfg)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        self.genre_rates.validate()?;
        if !(self.performance_multiplier.is_finite() && self.performance_multiplier >= 1.0) {
            return Err(Error::Config(format!(
                "performance_multiplier must be a finite value >= 1, got {}",
                self.performance_multiplier
            )));
        }
        if !(self.platform_fee.is_finite() && self.platform_fee >= 0.0) {
            return Err(Error::Config(format!(
                "platform_fee must be a finite value >= 0, got {}",
                self.platform_fee
            )));
        }
        if !(self.min_monthly_spend.is_finite() && self.min_monthly_spend >= 0.0) {
            return Err(Error::Config(format!(
                "min_monthly_spend must be a finite value >= 0, got {}",
                self.min_monthly_spend
            )));
        }
        Ok(())
    }

    pub fn calculation_delay(&self) -> Duration {
        Duration::from_millis(self.calculation_delay_ms)
    }
}
