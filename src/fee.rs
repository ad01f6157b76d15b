//! Evaluation of a tutoring rate against the monthly fee ceiling.
//!
//! A rate is denominated either per minute or per hour. For a given number of weekly sessions,
//! the evaluator derives the unit prices implied by charging exactly the monthly fee, and the
//! maximum fee the entered rate would allow. The rate is _compliant_ when that maximum meets or
//! exceeds the monthly fee.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use thiserror::Error;
use tracing::{debug, trace};

use crate::schedule::FeeSchedule;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum PricingMode {
    #[strum(serialize = "per minute")]
    PerMinute,
    #[strum(serialize = "per hour")]
    PerHour,
}
impl PricingMode {
    /// The range of rates accepted in this mode.
    pub fn rate_bounds(&self) -> RangeInclusive<u64> {
        match self {
            PricingMode::PerMinute => 1..=999,
            PricingMode::PerHour => 1_000..=u64::MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationInput {
    pub mode: PricingMode,
    pub rate: u64,
    pub weeks_per_month: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub sessions_per_week: u32,
    pub compliant: bool,
    pub per_minute_price: f64,
    pub per_hour_price: f64,
    pub max_allowed_fee: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("no lesson time in {sessions} session(s) over {weeks_per_month} week(s)")]
    EmptyTerm { weeks_per_month: f64, sessions: u32 },
}

#[derive(Debug, Clone, Default)]
pub struct FeeEvaluator {
    schedule: FeeSchedule,
}
impl FeeEvaluator {
    pub fn new(schedule: FeeSchedule) -> Result<Self, anyhow::Error> {
        schedule.validate()?;
        Ok(Self { schedule })
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    /// Evaluates the rate assuming a fixed number of weekly `sessions`.
    pub fn evaluate_at(
        &self,
        mode: PricingMode,
        rate: u64,
        weeks_per_month: f64,
        sessions: u32,
    ) -> Result<Evaluation, EvaluationError> {
        if sessions == 0 || !weeks_per_month.is_finite() || weeks_per_month <= 0.0 {
            return Err(EvaluationError::EmptyTerm {
                weeks_per_month,
                sessions,
            });
        }

        let monthly_fee = self.schedule.monthly_fee;
        let lessons = weeks_per_month * sessions as f64;
        let (per_minute_price, per_hour_price, max_allowed_fee) = match mode {
            PricingMode::PerMinute => {
                let minutes = lessons * self.schedule.lesson_minutes as f64;
                let per_minute_price = monthly_fee / minutes;
                (per_minute_price, per_minute_price * 60.0, rate as f64 * minutes)
            }
            PricingMode::PerHour => {
                let hours = lessons * self.schedule.lesson_hours();
                let per_hour_price = monthly_fee / hours;
                (per_hour_price / 60.0, per_hour_price, rate as f64 * hours)
            }
        };

        Ok(Evaluation {
            sessions_per_week: sessions,
            compliant: max_allowed_fee >= monthly_fee,
            per_minute_price,
            per_hour_price,
            max_allowed_fee,
        })
    }

    /// Finds the fewest weekly sessions for which the rate is compliant, trying every count from 1
    /// up to the schedule's `max_sessions` in ascending order. The first compliant count is taken
    /// as the minimum; this relies on the maximum fee growing with the session count and is not
    /// checked here.
    ///
    /// When no count up to the bound is compliant, the evaluation at the bound is returned.
    pub fn find_minimal_sessions(
        &self,
        mode: PricingMode,
        rate: u64,
        weeks_per_month: f64,
    ) -> Result<Evaluation, EvaluationError> {
        for sessions in 1..=self.schedule.max_sessions {
            let evaluation = self.evaluate_at(mode, rate, weeks_per_month, sessions)?;
            trace!("{mode} rate {rate}, sessions: {sessions}, max fee: {}", evaluation.max_allowed_fee);
            if evaluation.compliant {
                debug!("{mode} rate {rate} over {weeks_per_month} weeks is compliant at {sessions} session(s)");
                return Ok(evaluation);
            }
        }

        debug!(
            "{mode} rate {rate} over {weeks_per_month} weeks is not compliant within {} session(s)",
            self.schedule.max_sessions
        );
        self.evaluate_at(mode, rate, weeks_per_month, self.schedule.max_sessions)
    }

    pub fn evaluate(&self, input: &EvaluationInput) -> Result<Evaluation, EvaluationError> {
        self.find_minimal_sessions(input.mode, input.rate, input.weeks_per_month)
    }

    /// Evaluates every session count from 1 up to the schedule's `max_sessions`.
    pub fn sweep(
        &self,
        mode: PricingMode,
        rate: u64,
        weeks_per_month: f64,
    ) -> Result<Vec<Evaluation>, EvaluationError> {
        (1..=self.schedule.max_sessions)
            .map(|sessions| self.evaluate_at(mode, rate, weeks_per_month, sessions))
            .collect()
    }
}
