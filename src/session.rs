// src/session.rs
#![cfg(feature = "session")]

//! Calculator session.
//!
//! Holds the state of one visitor's calculator: the form fields, the live
//! estimate (recomputed on every field change) and the reveal phase.
//!
//! Submitting a valid form does not show results right away; the panel sits
//! in [`Phase::Calculating`] for `calculation_delay` first. Time is passed in
//! by the caller, so nothing here sleeps or spawns.

use std::time::Instant;

use tracing::debug;

use crate::config::EstimatorConfig;
use crate::estimator::{CalculatorInput, CalculatorResult, compute};
use crate::form::{CalculatorForm, FormErrors};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Calculating { ready_at: Instant },
    ShowingResults,
}

#[derive(Clone, Debug)]
pub struct CalculatorSession {
    cfg: EstimatorConfig,
    form: CalculatorForm,
    live: Option<(CalculatorInput, CalculatorResult)>,
    phase: Phase,
    /// Set by the first reveal; later submits recalculate without hiding the panel.
    revealed: bool,
}

impl CalculatorSession {
    /// Starts from the default form, already computed.
    pub fn new(cfg: EstimatorConfig) -> Self {
        Self::with_form(cfg, CalculatorForm::default())
    }

    pub fn with_form(cfg: EstimatorConfig, form: CalculatorForm) -> Self {
        let mut s = Self { cfg, form, live: None, phase: Phase::Idle, revealed: false };
        s.recompute();
        s
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.cfg
    }

    pub fn form(&self) -> &CalculatorForm {
        &self.form
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn set_monthly_spend(&mut self, raw: impl Into<String>) {
        self.form.monthly_spend = raw.into();
        self.recompute();
    }

    pub fn set_monthly_streams(&mut self, raw: impl Into<String>) {
        self.form.monthly_streams = raw.into();
        self.recompute();
    }

    pub fn set_genre(&mut self, raw: impl Into<String>) {
        self.form.genre = raw.into();
        self.recompute();
    }

    /// Latest estimate for the current fields, shown or not.
    pub fn live(&self) -> Option<&CalculatorResult> {
        self.live.as_ref().map(|(_, r)| r)
    }

    /// Input the live estimate was computed from.
    pub fn live_input(&self) -> Option<&CalculatorInput> {
        self.live.as_ref().map(|(i, _)| i)
    }

    /// The estimate, once the first reveal is over. Stays visible while a
    /// later submit is calculating.
    pub fn results(&self) -> Option<&CalculatorResult> {
        if self.revealed { self.live() } else { None }
    }

    pub fn is_calculating(&self) -> bool {
        matches!(self.phase, Phase::Calculating { .. })
    }

    /// Validate and start the reveal. Ignored while already calculating.
    pub fn submit(&mut self, now: Instant) -> Result<(), FormErrors> {
        if self.is_calculating() {
            debug!("submit ignored, already calculating");
            return Ok(());
        }
        let input = self.form.validate(&self.cfg)?;
        let result = compute(&self.cfg, &input);
        self.live = Some((input, result));
        let ready_at = now + self.cfg.calculation_delay();
        self.phase = Phase::Calculating { ready_at };
        debug!(delay_ms = self.cfg.calculation_delay_ms, "calculating");
        Ok(())
    }

    /// Advance the reveal; returns the phase after the update.
    pub fn poll(&mut self, now: Instant) -> Phase {
        if let Phase::Calculating { ready_at } = self.phase {
            if now >= ready_at {
                self.phase = Phase::ShowingResults;
                self.revealed = true;
                debug!("showing results");
            }
        }
        self.phase
    }

    fn recompute(&mut self) {
        if let Some(input) = self.form.parse_lenient() {
            let result = compute(&self.cfg, &input);
            self.live = Some((input, result));
        }
    }
}
