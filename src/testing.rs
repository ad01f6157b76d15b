//! Testing helpers.

use assert_float_eq::*;

use crate::fee::Evaluation;

/// Asserts that the per-minute and per-hour prices of an evaluation describe the same rate.
pub fn assert_evaluation_consistent(evaluation: &Evaluation) {
    assert!(
        evaluation.per_minute_price.is_finite() && evaluation.per_minute_price > 0.0,
        "non-positive per-minute price in {evaluation:?}"
    );
    let per_hour_price = evaluation.per_minute_price * 60.0;
    if per_hour_price != evaluation.per_hour_price {
        assert_float_relative_eq!(evaluation.per_hour_price, per_hour_price, 1e-12);
    }
}
