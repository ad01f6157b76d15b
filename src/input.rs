//! Parsing and validation of user-entered rate and weeks-per-month strings.

use strum_macros::Display;
use thiserror::Error;

use crate::fee::{EvaluationInput, PricingMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Field {
    #[strum(serialize = "rate")]
    Rate,
    #[strum(serialize = "weeks per month")]
    WeeksPerMonth,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("the {0} must be entered")]
    MissingInput(Field),

    #[error("the {field} must be a positive number, got '{value}'")]
    InvalidNumericInput { field: Field, value: String },

    #[error("{}", describe_rate_bounds(.mode))]
    RateOutOfRange { mode: PricingMode, rate: u64 },
}

fn describe_rate_bounds(mode: &PricingMode) -> String {
    let bounds = mode.rate_bounds();
    match mode {
        PricingMode::PerMinute => format!(
            "a {mode} rate must be between {} and {}",
            bounds.start(),
            bounds.end()
        ),
        PricingMode::PerHour => format!("a {mode} rate must be at least {}", bounds.start()),
    }
}

/// Removes surrounding whitespace and thousands separators.
fn normalise(value: &str) -> String {
    value.replace(',', "").trim().to_string()
}

fn parse_rate(value: &str) -> Result<u64, InvalidInput> {
    if value.is_empty() {
        return Err(InvalidInput::MissingInput(Field::Rate));
    }
    let normalised = normalise(value);
    match normalised.parse::<i64>() {
        Ok(rate) if rate > 0 => Ok(rate as u64),
        _ => Err(InvalidInput::InvalidNumericInput {
            field: Field::Rate,
            value: value.to_string(),
        }),
    }
}

fn parse_weeks(value: &str) -> Result<f64, InvalidInput> {
    if value.is_empty() {
        return Err(InvalidInput::MissingInput(Field::WeeksPerMonth));
    }
    let normalised = normalise(value);
    match normalised.parse::<f64>() {
        Ok(weeks) if weeks.is_finite() && weeks > 0.0 => Ok(weeks),
        _ => Err(InvalidInput::InvalidNumericInput {
            field: Field::WeeksPerMonth,
            value: value.to_string(),
        }),
    }
}

impl EvaluationInput {
    /// Parses and validates the raw rate and weeks-per-month strings for the given `mode`.
    /// Both values are checked for being well-formed before the rate is checked against the
    /// bounds of the mode.
    pub fn parse(mode: PricingMode, rate: &str, weeks_per_month: &str) -> Result<Self, InvalidInput> {
        let rate = parse_rate(rate)?;
        let weeks_per_month = parse_weeks(weeks_per_month)?;
        if !mode.rate_bounds().contains(&rate) {
            return Err(InvalidInput::RateOutOfRange { mode, rate });
        }
        Ok(Self {
            mode,
            rate,
            weeks_per_month,
        })
    }
}
