// demos/session.rs
// Run with:
//   cargo run --example session
//
// Walks one visitor through the calculator: live recompute while typing,
// submit, the simulated "Calculating..." wait, then the results.

use std::time::{Duration, Instant};

use fan_roi::{CalculatorSession, EstimatorConfig, Phase, Report};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut s = CalculatorSession::new(EstimatorConfig::default());
    println!("defaults -> {:?}", s.live());

    s.set_genre("indie");
    s.set_monthly_spend("80");
    println!("typing   -> {:?}", s.live());

    let t0 = Instant::now();
    if let Err(errs) = s.submit(t0) {
        for e in errs.iter() {
            println!("rejected -> {}", e.message(s.config()));
        }
    }

    s.set_monthly_spend("1200");
    s.submit(t0).expect("form is valid now");
    println!("phase    -> {:?}", s.phase());

    let half = s.config().calculation_delay() / 2;
    println!("poll     -> {:?}", s.poll(t0 + half));

    let done = t0 + s.config().calculation_delay() + Duration::from_millis(1);
    if s.poll(done) == Phase::ShowingResults {
        if let (Some(input), Some(res)) = (s.live_input(), s.results()) {
            println!("\n{}", Report::new(input, res, s.config()));
        }
    }
}
