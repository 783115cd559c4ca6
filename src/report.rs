//! Display formatting for a computed estimate.
//!
//! Mirrors what the results panel shows: grouped integers, dollar amounts,
//! cost per real fan (or "N/A"), the rounded ROI and the width of its bar.

use std::fmt;

use crate::config::EstimatorConfig;
use crate::estimator::{CalculatorInput, CalculatorResult};

/// Shown instead of a cost per fan when there are no fans to divide by.
pub const NOT_APPLICABLE: &str = "N/A";

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Grouped amount with at most three fraction digits, trailing zeros trimmed.
pub fn format_amount(v: f64) -> String {
    if !v.is_finite() {
        return NOT_APPLICABLE.to_string();
    }
    let rounded = (v * 1000.0).round() / 1000.0;
    let sign = if rounded < 0.0 { "-" } else { "" };
    let abs = rounded.abs();
    let whole = abs.trunc();
    let frac = format!("{:.3}", abs - whole);
    let frac = frac.trim_start_matches('0').trim_end_matches('0').trim_end_matches('.');
    let whole = if whole < u64::MAX as f64 { group_thousands(whole as u64) } else { format!("{whole}") };
    format!("{sign}{whole}{frac}")
}

/// `$0.42`, or [`NOT_APPLICABLE`].
pub fn format_cost_per_fan(cost: Option<f64>) -> String {
    match cost {
        Some(c) => format!("${c:.2}"),
        None => NOT_APPLICABLE.to_string(),
    }
}

/// ROI rounded to a whole percent.
pub fn roi_display(roi_percent: f64) -> i64 {
    if roi_percent.is_finite() { roi_percent.round() as i64 } else { 0 }
}

/// Width of the ROI bar in percent of its track.
pub fn roi_bar_width(roi_percent: f64) -> f64 {
    if roi_percent.is_finite() { roi_percent.clamp(0.0, 100.0) } else { 0.0 }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub real_fans: String,
    pub bot_plays: String,
    pub current_cost_per_fan: String,
    pub projected_real_fans: String,
    pub monthly_savings: String,
    pub projected_cost_per_fan: String,
    pub roi: String,
    pub roi_bar_width: f64,
    genre: String,
    genre_rate: f64,
    fallback: bool,
    platform_fee: String,
}

impl Report {
    pub fn new(input: &CalculatorInput, res: &CalculatorResult, cfg: &EstimatorConfig) -> Self {
        Self {
            real_fans: group_thousands(res.baseline_real_fans),
            bot_plays: group_thousands(res.baseline_bot_plays),
            current_cost_per_fan: format_cost_per_fan(res.baseline_cost_per_fan),
            projected_real_fans: group_thousands(res.projected_real_fans),
            monthly_savings: format!("${}", format_amount(res.monthly_savings)),
            projected_cost_per_fan: format_cost_per_fan(res.projected_cost_per_fan),
            roi: format!("{}%", roi_display(res.roi_percent)),
            roi_bar_width: roi_bar_width(res.roi_percent),
            genre: input.genre.to_string(),
            genre_rate: res.genre_rate,
            fallback: res.used_fallback_rate,
            platform_fee: format!("${}", format_amount(cfg.platform_fee)),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let note = if self.fallback { " (fallback)" } else { "" };
        writeln!(f, "Genre: {} ({}% real fans{note})", self.genre, self.genre_rate)?;
        writeln!(f)?;
        writeln!(f, "Current Playlist Strategy")?;
        writeln!(f, "  Real Fans Generated    {}", self.real_fans)?;
        writeln!(f, "  Bot Plays (No Value)   {}", self.bot_plays)?;
        writeln!(f, "  Cost Per Real Fan      {}", self.current_cost_per_fan)?;
        writeln!(f)?;
        writeln!(f, "Organic Strategy ({}/month)", self.platform_fee)?;
        writeln!(f, "  Projected Real Fans    {}", self.projected_real_fans)?;
        writeln!(f, "  Monthly Savings        {}", self.monthly_savings)?;
        writeln!(f, "  Cost Per Real Fan      {}", self.projected_cost_per_fan)?;
        writeln!(f)?;
        let filled = (self.roi_bar_width / 5.0).round() as usize;
        write!(
            f,
            "Overall ROI Improvement  {}  [{}{}]",
            self.roi,
            "#".repeat(filled),
            " ".repeat(20 - filled.min(20))
        )
    }
}
