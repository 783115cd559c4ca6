// demos/roi.rs
// Run with:
//   cargo run --example roi -- --spend 500 --streams 10000 --genre pop
//   RUST_LOG=debug cargo run --example roi -- --genre k-pop

use std::path::PathBuf;

use clap::Parser;
use fan_roi::{CalculatorForm, EstimatorConfig, Report, compute};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Estimate real fans and ROI against playlist placements")]
struct Args {
    /// Monthly playlist placement spend ($)
    #[arg(long, default_value = "500")]
    spend: String,

    /// Monthly streams from placements
    #[arg(long, default_value = "10000")]
    streams: String,

    /// Primary genre (pop, hip-hop, electronic, rock, indie, other)
    #[arg(long, default_value = "pop")]
    genre: String,

    /// TOML file overriding the estimator constants
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> fan_roi::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let cfg = match &args.config {
        Some(path) => EstimatorConfig::load(path)?,
        None => EstimatorConfig::default(),
    };

    let form = CalculatorForm::new(args.spend, args.streams, args.genre);
    let input = match form.validate(&cfg) {
        Ok(input) => input,
        Err(errs) => {
            for e in errs.iter() {
                eprintln!("{}: {}", e.field(), e.message(&cfg));
            }
            return Err(errs.into());
        }
    };

    let res = compute(&cfg, &input);
    println!("{}", Report::new(&input, &res, &cfg));
    Ok(())
}
