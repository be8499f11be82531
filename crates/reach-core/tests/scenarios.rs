//! Reference scenarios for the public reach-core API.
//!
//! Each literal below is a fixed expectation for the estimator; changing any
//! rate constant or the rounding mode breaks at least one of them.

use reach_core::constants::MAX_SERIES_LEN;
use reach_core::{
    EstimateError, clicks, initial_views, new_views, reach_series, shares, total_reach,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn initial_views_scenarios() {
    assert_eq!(initial_views(dec!(405), false).unwrap(), dec!(12150));
    assert_eq!(initial_views(dec!(10.5), true).unwrap(), dec!(315));
}

#[test]
fn clicks_scenarios() {
    assert_eq!(clicks(dec!(3000), false).unwrap(), dec!(360));
    assert_eq!(clicks(dec!(25), true).unwrap(), dec!(3));
}

#[test]
fn shares_scenario() {
    assert_eq!(shares(dec!(768), false).unwrap(), dec!(114));
}

#[test]
fn new_views_scenario() {
    assert_eq!(new_views(dec!(3000), false).unwrap(), dec!(2160));
}

#[test]
fn total_reach_scenarios() {
    assert_eq!(total_reach(dec!(100), false).unwrap(), dec!(8160));
    assert_eq!(total_reach(dec!(30), true).unwrap(), dec!(2592.40));
    assert_eq!(total_reach(dec!(1), true).unwrap(), dec!(86.40));
}

#[test]
fn total_reach_matches_series_total() {
    for investment in [dec!(0), dec!(1), dec!(33.333), dec!(82.24), dec!(6542)] {
        for proportional in [false, true] {
            let series = reach_series(investment, proportional).unwrap();
            assert_eq!(total_reach(investment, proportional).unwrap(), series.total());
            assert!((1..=MAX_SERIES_LEN).contains(&series.len()));
        }
    }
}

#[test]
fn modes_diverge_on_fractional_investment() {
    let truncated = total_reach(dec!(10.5), false).unwrap();
    let proportional = total_reach(dec!(10.5), true).unwrap();
    assert!(proportional > truncated);
    assert_eq!(truncated, truncated.trunc());
}

#[test]
fn negative_investment_fails_fast() {
    let err = total_reach(dec!(-0.5), false).unwrap_err();
    assert_eq!(
        err,
        EstimateError::NegativeInput { quantity: "investment", value: dec!(-0.5) }
    );
    assert_eq!(err.to_string(), "negative investment: -0.5");
}

#[test]
fn series_serializes_to_json() {
    let series = reach_series(dec!(100), false).unwrap();
    let json = serde_json::to_value(&series).unwrap();

    assert_eq!(json["proportional"], serde_json::Value::Bool(false));
    assert_eq!(json["exhausted"], serde_json::Value::Bool(false));
    assert_eq!(json["generations"].as_array().unwrap().len(), 5);

    let total: Decimal = json["total"].as_str().unwrap().parse().unwrap();
    assert_eq!(total, dec!(8160));
}
