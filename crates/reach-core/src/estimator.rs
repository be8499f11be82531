//! The four derivation stages and the reach total.
//!
//! Every stage takes a `proportional` flag that must stay the same for the
//! whole chain of a single estimate. Truncated mode floors at each stage
//! boundary in a fixed order (floor, integer divide, multiply); proportional
//! mode keeps fractions and rounds the stage result.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{
    CLICKS_DIVISOR, CLICKS_MULTIPLIER, ROUNDING_DIGITS, SHARES_DIVISOR, SHARES_MULTIPLIER,
    VIEWS_PER_REAL, VIEWS_PER_SHARE,
};
use crate::error::EstimateError;
use crate::series::reach_series;

/// Round to [`ROUNDING_DIGITS`] decimals, ties to even.
fn round_count(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(ROUNDING_DIGITS, RoundingStrategy::MidpointNearestEven)
}

fn ensure_non_negative(quantity: &'static str, value: Decimal) -> Result<(), EstimateError> {
    if value < Decimal::ZERO {
        return Err(EstimateError::NegativeInput { quantity, value });
    }
    Ok(())
}

fn checked_mul(lhs: Decimal, rhs: u32) -> Result<Decimal, EstimateError> {
    lhs.checked_mul(Decimal::from(rhs))
        .ok_or(EstimateError::ArithmeticOverflow)
}

fn checked_div(lhs: Decimal, rhs: u32) -> Result<Decimal, EstimateError> {
    lhs.checked_div(Decimal::from(rhs))
        .ok_or(EstimateError::ArithmeticOverflow)
}

/// Apply the rate `multiplier / divisor` to `value`.
///
/// Truncated: `(floor(value) div divisor) * multiplier`, so a remainder below
/// `divisor` never contributes. Proportional: `round((value / divisor) * multiplier)`.
fn apply_rate(
    value: Decimal,
    multiplier: u32,
    divisor: u32,
    proportional: bool,
) -> Result<Decimal, EstimateError> {
    if proportional {
        let scaled = checked_mul(checked_div(value, divisor)?, multiplier)?;
        Ok(round_count(scaled))
    } else {
        let batches = checked_div(value.floor(), divisor)?.floor();
        checked_mul(batches, multiplier)
    }
}

/// Initial view count bought by `investment` reais.
///
/// Truncated mode drops the centavos before applying the rate; proportional
/// mode rounds `30 * investment` to 2 decimals.
///
/// # Examples
///
/// ```
/// use reach_core::initial_views;
/// use rust_decimal::Decimal;
///
/// let investment = Decimal::new(105, 1); // 10.5
/// assert_eq!(initial_views(investment, false).unwrap(), Decimal::from(300));
/// assert_eq!(initial_views(investment, true).unwrap(), Decimal::from(315));
/// ```
pub fn initial_views(investment: Decimal, proportional: bool) -> Result<Decimal, EstimateError> {
    ensure_non_negative("investment", investment)?;
    if proportional {
        Ok(round_count(checked_mul(investment, VIEWS_PER_REAL)?))
    } else {
        checked_mul(investment.floor(), VIEWS_PER_REAL)
    }
}

/// Clicks produced by `views` (12 per 100 views).
pub fn clicks(views: Decimal, proportional: bool) -> Result<Decimal, EstimateError> {
    ensure_non_negative("views", views)?;
    apply_rate(views, CLICKS_MULTIPLIER, CLICKS_DIVISOR, proportional)
}

/// Shares produced by `clicks` (3 per 20 clicks).
pub fn shares(clicks: Decimal, proportional: bool) -> Result<Decimal, EstimateError> {
    ensure_non_negative("clicks", clicks)?;
    apply_rate(clicks, SHARES_MULTIPLIER, SHARES_DIVISOR, proportional)
}

/// Views generated by the shares that `views` leads to.
///
/// The final `shares * 40` step is rounded in both modes. In truncated mode
/// the share count is already whole, so the rounding never changes it.
pub fn new_views(views: Decimal, proportional: bool) -> Result<Decimal, EstimateError> {
    let clicks = clicks(views, proportional)?;
    let shares = shares(clicks, proportional)?;
    let views_out = round_count(checked_mul(shares, VIEWS_PER_SHARE)?);

    tracing::trace!(%views, %clicks, %shares, new_views = %views_out, proportional, "share generation");
    Ok(views_out)
}

/// Maximum number of views `investment` reaches: the initial views plus up
/// to four share-driven generations, stopping early at the first generation
/// that produces no views.
///
/// See [`reach_series`] for the individual generations.
pub fn total_reach(investment: Decimal, proportional: bool) -> Result<Decimal, EstimateError> {
    reach_series(investment, proportional).map(|series| series.total())
}
