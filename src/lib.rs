/*!
`fan_roi` — a small, pure ROI estimator for music promotion.

What it does
- Splits a month of playlist-placement streams into real fans and bot plays,
  using a per-genre real-fan rate.
- Projects the real fans the organic strategy would reach
  (`baseline × performance_multiplier`), and compares the spend against the
  platform fee: monthly savings and ROI percent.
- Reports the cost of one real fan for both strategies, with `None` standing
  in when there are no fans to divide by.

How to use (call surface only)
- Build an [`EstimatorConfig`] (`Default` holds the shipped constants, or
  load a TOML file with [`EstimatorConfig::load`]).
- Validate raw form text with [`CalculatorForm::validate`], or build a
  [`CalculatorInput`] directly.
- Call `compute(&cfg, &input) -> CalculatorResult`. It is total and
  deterministic; call it on every input change.
- Optionally render it with [`Report`], or keep one visitor's state in a
  `CalculatorSession` (feature `session`).

What it does NOT do
- No persistence, no I/O beyond reading a config file, no threads.
- No page layout, animations or other presentation.
*/

pub mod config;
pub mod error;
pub mod estimator;
pub mod form;
pub mod genre;
pub mod mechanics;
pub mod report;

#[cfg(feature = "session")]
pub mod session;

pub use config::{EstimatorConfig, GenreRates};
pub use error::{Error, Result};
pub use estimator::{CalculatorInput, CalculatorResult, compute, estimate};
pub use form::{CalculatorForm, Field, FieldError, FormErrors};
pub use genre::{Genre, GenreCategory, UnknownGenre};
pub use report::Report;

#[cfg(feature = "session")]
pub use session::{CalculatorSession, Phase};
