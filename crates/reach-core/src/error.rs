//! Error types for the reach estimator.
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    #[error("negative {quantity}: {value}")] NegativeInput { quantity: &'static str, value: Decimal },
    #[error("arithmetic overflow")] ArithmeticOverflow,
}
