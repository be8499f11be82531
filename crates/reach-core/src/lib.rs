//! # reach-core — Share-driven advertising reach estimation.
//!
//! An investment buys an initial batch of views. A fraction of viewers click,
//! a fraction of clickers share, and every share brings new views, which feed
//! the next generation:
//!
//! ```text
//! investment -> views0 -> (clicks -> shares -> views1) -> (... -> views2) -> ... -> sum
//! ```
//!
//! Two computation modes are available, selected by a `proportional` flag:
//! - **Truncated** (`false`, the default): fractional remainders are discarded
//!   at every integer-division step. Results are always whole.
//! - **Proportional** (`true`): fractions are kept and each stage result is
//!   rounded to 2 decimals, half to even.
//!
//! All arithmetic is exact base-10 ([`rust_decimal::Decimal`]), so results are
//! deterministic across platforms.

pub mod constants;
pub mod error;
pub mod estimator;
pub mod series;

pub use error::EstimateError;
pub use estimator::{clicks, initial_views, new_views, shares, total_reach};
pub use series::{ReachSeries, reach_series};
