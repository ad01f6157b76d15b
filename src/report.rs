//! The filing reports rendered from an evaluation.
//!
//! Two interchangeable ways of stating the fee on a filing are produced: _TYPE 1_ gives the
//! monthly fee alongside the per-hour price, while _TYPE 2_ gives the monthly fee alongside the
//! formula of lesson minutes, weekly sessions and weeks per month.

use std::fmt::{Display, Formatter};

use crate::display::{DisplayTrimmed, DisplayWon};
use crate::fee::{Evaluation, EvaluationInput};
use crate::schedule::FeeSchedule;

pub fn verdict(compliant: bool) -> &'static str {
    if compliant {
        "reportable"
    } else {
        "adjustment needed"
    }
}

#[derive(Debug)]
pub struct Report<'a> {
    pub schedule: &'a FeeSchedule,
    pub input: &'a EvaluationInput,
    pub evaluation: &'a Evaluation,
}
impl Report<'_> {
    pub fn type1(&self) -> String {
        format!(
            "monthly fee = {}; per-hour price = {}",
            DisplayWon(self.schedule.monthly_fee),
            DisplayWon(self.evaluation.per_hour_price.round_ties_even())
        )
    }

    pub fn type2(&self) -> String {
        format!(
            "monthly fee = {}; formula = ({} min × {} sessions × {} weeks)",
            DisplayWon(self.schedule.monthly_fee),
            self.schedule.lesson_minutes,
            self.evaluation.sessions_per_week,
            DisplayTrimmed(self.input.weeks_per_month)
        )
    }

    pub fn details(&self) -> Vec<String> {
        vec![
            format!("result: {}", verdict(self.evaluation.compliant)),
            format!("weeks per month: {}", DisplayTrimmed(self.input.weeks_per_month)),
            format!("sessions per week (adjusted): {}", self.evaluation.sessions_per_week),
            format!("per-minute price: {:.2} won/min", self.evaluation.per_minute_price),
            format!("per-hour price: {:.0} won/hour", self.evaluation.per_hour_price),
            format!(
                "maximum fee at the {} rate of {}: {}",
                self.input.mode,
                self.input.rate,
                DisplayWon(self.evaluation.max_allowed_fee)
            ),
        ]
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "TYPE 1 (per-hour price)")?;
        writeln!(f, "  {}", self.type1())?;
        writeln!(f, "TYPE 2 (formula)")?;
        writeln!(f, "  {}", self.type2())?;
        writeln!(f, "Details")?;
        for line in self.details() {
            writeln!(f, "  - {line}")?;
        }
        Ok(())
    }
}
