//! Form boundary: raw field text in, a validated [`CalculatorInput`] out.
//!
//! This is where minimum bounds are enforced. The estimator never sees a
//! rejection; it is only called with what this module lets through (or,
//! for live previews, with whatever parses).

use std::fmt;

use thiserror::Error;

use crate::config::EstimatorConfig;
use crate::estimator::CalculatorInput;
use crate::genre::{Genre, GenreCategory};
use crate::report::group_thousands;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    MonthlySpend,
    MonthlyStreams,
    Genre,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::MonthlySpend => "monthly spend",
            Field::MonthlyStreams => "monthly streams",
            Field::Genre => "genre",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(Field),
    #[error("{field} is not a valid number: {value:?}")]
    NotANumber { field: Field, value: String },
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: Field, min: f64 },
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(f) => *f,
            FieldError::NotANumber { field, .. } | FieldError::BelowMinimum { field, .. } => *field,
        }
    }

    /// Inline message shown under the offending input.
    pub fn message(&self, cfg: &EstimatorConfig) -> String {
        match self.field() {
            Field::MonthlySpend => format!(
                "Please enter a valid amount (minimum ${})",
                group_min(cfg.min_monthly_spend)
            ),
            Field::MonthlyStreams => format!(
                "Please enter a valid number of streams (minimum {})",
                group_thousands(cfg.min_stream_volume)
            ),
            Field::Genre => "Please select a genre".to_string(),
        }
    }
}

fn group_min(min: f64) -> String {
    if min.fract() == 0.0 && (0.0..u64::MAX as f64).contains(&min) {
        group_thousands(min as u64)
    } else {
        min.to_string()
    }
}

/// Every rejected field of one submission.
#[derive(Clone, Debug, Default, PartialEq, Error)]
#[error("{}", join_errors(.0))]
pub struct FormErrors(pub Vec<FieldError>);

fn join_errors(errs: &[FieldError]) -> String {
    errs.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; ")
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field() == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculatorForm {
    pub monthly_spend: String,
    pub monthly_streams: String,
    pub genre: String,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self {
            monthly_spend: "500".to_string(),
            monthly_streams: "10000".to_string(),
            genre: Genre::Pop.as_str().to_string(),
        }
    }
}

impl CalculatorForm {
    pub fn new(monthly_spend: impl Into<String>, monthly_streams: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            monthly_spend: monthly_spend.into(),
            monthly_streams: monthly_streams.into(),
            genre: genre.into(),
        }
    }

    pub fn validate(&self, cfg: &EstimatorConfig) -> Result<CalculatorInput, FormErrors> {
        let mut errs = Vec::new();

        let spend = match parse_spend(&self.monthly_spend) {
            Ok(v) if v < cfg.min_monthly_spend => {
                errs.push(FieldError::BelowMinimum { field: Field::MonthlySpend, min: cfg.min_monthly_spend });
                None
            }
            Ok(v) => Some(v),
            Err(e) => {
                errs.push(e);
                None
            }
        };

        let streams = match parse_streams(&self.monthly_streams) {
            Ok(v) if v < cfg.min_stream_volume => {
                errs.push(FieldError::BelowMinimum {
                    field: Field::MonthlyStreams,
                    min: cfg.min_stream_volume as f64,
                });
                None
            }
            Ok(v) => Some(v),
            Err(e) => {
                errs.push(e);
                None
            }
        };

        if self.genre.trim().is_empty() {
            errs.push(FieldError::Required(Field::Genre));
        }

        match (spend, streams) {
            (Some(s), Some(v)) if errs.is_empty() => Ok(CalculatorInput {
                monthly_spend: s,
                monthly_stream_volume: v,
                genre: GenreCategory::parse(&self.genre),
            }),
            _ => Err(FormErrors(errs)),
        }
    }

    /// Parse the current values without enforcing minimums, for live previews.
    pub fn parse_lenient(&self) -> Option<CalculatorInput> {
        let spend = parse_spend(&self.monthly_spend).ok()?;
        let streams = parse_streams(&self.monthly_streams).ok()?;
        Some(CalculatorInput {
            monthly_spend: spend,
            monthly_stream_volume: streams,
            genre: GenreCategory::parse(&self.genre),
        })
    }
}

fn parse_spend(raw: &str) -> Result<f64, FieldError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(FieldError::Required(Field::MonthlySpend));
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FieldError::NotANumber { field: Field::MonthlySpend, value: raw.to_string() }),
    }
}

fn parse_streams(raw: &str) -> Result<u64, FieldError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(FieldError::Required(Field::MonthlyStreams));
    }
    s.parse::<u64>()
        .map_err(|_| FieldError::NotANumber { field: Field::MonthlyStreams, value: raw.to_string() })
}
