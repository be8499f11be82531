//! Reach series: the initial views followed by every share-driven generation.
//!
//! The series starts with [`initial_views`] and appends
//! [`new_views`] of the last element while that value is strictly positive,
//! for at most [`MAX_SHARE_GENERATIONS`] generations. Its sum is the total
//! reach.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::constants::{MAX_SERIES_LEN, MAX_SHARE_GENERATIONS};
use crate::error::EstimateError;
use crate::estimator::{initial_views, new_views};

/// A computed reach series. Always holds between 1 and [`MAX_SERIES_LEN`]
/// view counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReachSeries {
    investment: Decimal,
    proportional: bool,
    generations: Vec<Decimal>,
    total: Decimal,
    exhausted: bool,
}

impl ReachSeries {
    /// Investment the series was computed from.
    pub fn investment(&self) -> Decimal {
        self.investment
    }

    /// Whether proportional mode was used.
    pub fn proportional(&self) -> bool {
        self.proportional
    }

    /// Views bought directly by the investment.
    pub fn initial(&self) -> Decimal {
        self.generations[0]
    }

    /// Every view count in order, starting with the initial views.
    pub fn generations(&self) -> &[Decimal] {
        &self.generations
    }

    /// View counts produced by sharing (everything after the initial views).
    pub fn shared(&self) -> &[Decimal] {
        &self.generations[1..]
    }

    pub fn len(&self) -> usize {
        self.generations.len()
    }

    /// Never true; a series always contains the initial views.
    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// Sum of all generations.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// True when the cascade ended because a generation produced no views,
    /// false when it ran for all [`MAX_SHARE_GENERATIONS`] generations.
    pub fn exhausted(&self) -> bool {
        self.exhausted
    }
}

/// Compute the reach series for `investment`.
///
/// # Examples
///
/// ```
/// use reach_core::reach_series;
/// use rust_decimal::Decimal;
///
/// let series = reach_series(Decimal::from(100), false).unwrap();
/// assert_eq!(series.len(), 5);
/// assert_eq!(series.initial(), Decimal::from(3000));
/// assert_eq!(series.total(), Decimal::from(8160));
/// ```
pub fn reach_series(investment: Decimal, proportional: bool) -> Result<ReachSeries, EstimateError> {
    let initial = initial_views(investment, proportional)?;

    let mut generations = Vec::with_capacity(MAX_SERIES_LEN);
    generations.push(initial);

    let mut last = initial;
    let mut exhausted = false;
    for generation in 1..=MAX_SHARE_GENERATIONS {
        let next = new_views(last, proportional)?;
        if next <= Decimal::ZERO {
            debug!(generation, views = %last, "cascade exhausted");
            exhausted = true;
            break;
        }
        debug!(generation, views = %next, "share generation");
        generations.push(next);
        last = next;
    }

    let total = generations
        .iter()
        .try_fold(Decimal::ZERO, |acc, views| acc.checked_add(*views))
        .ok_or(EstimateError::ArithmeticOverflow)?;

    debug!(
        %investment,
        proportional,
        generations = generations.len(),
        %total,
        "reach series complete"
    );

    Ok(ReachSeries {
        investment,
        proportional,
        generations,
        total,
        exhausted,
    })
}
