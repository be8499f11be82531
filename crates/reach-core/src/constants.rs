//! Estimator constants. Rates are expressed as integer ratios so truncated
//! mode can floor-divide by the denominator before multiplying.

/// Views bought by each real invested.
pub const VIEWS_PER_REAL: u32 = 30;

/// Clicks produced per [`CLICKS_DIVISOR`] views.
pub const CLICKS_MULTIPLIER: u32 = 12;
pub const CLICKS_DIVISOR: u32 = 100;

/// Shares produced per [`SHARES_DIVISOR`] clicks.
pub const SHARES_MULTIPLIER: u32 = 3;
pub const SHARES_DIVISOR: u32 = 20;

/// New views generated by each share.
pub const VIEWS_PER_SHARE: u32 = 40;

/// Decimal places kept by proportional results.
pub const ROUNDING_DIGITS: u32 = 2;

/// Share-driven generations appended after the initial views, at most.
pub const MAX_SHARE_GENERATIONS: usize = 4;

/// Upper bound on the reach series length (initial views plus every
/// share-driven generation).
///
/// # Examples
///
/// ```
/// use reach_core::constants::{MAX_SERIES_LEN, MAX_SHARE_GENERATIONS};
/// assert_eq!(MAX_SERIES_LEN, MAX_SHARE_GENERATIONS + 1);
/// ```
pub const MAX_SERIES_LEN: usize = MAX_SHARE_GENERATIONS + 1;
