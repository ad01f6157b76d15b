//! The fixed constants of the fee formula, bundled into a schedule that an evaluator is built from.

use std::path::Path;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use crate::file::ReadJsonFile;

/// Duration of a single lesson, in minutes.
pub const LESSON_MINUTES: u32 = 45;

/// The monthly fee ceiling, in whole currency units.
pub const MONTHLY_FEE: f64 = 110_000.0;

/// Upper bound on the number of weekly sessions tried before giving up.
pub const MAX_SESSIONS_SEARCHED: u32 = 20;

/// Largest search bound a schedule may configure.
pub const MAX_SESSIONS_LIMIT: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    pub lesson_minutes: u32,
    pub monthly_fee: f64,
    pub max_sessions: u32,
}
impl FeeSchedule {
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.lesson_minutes == 0 {
            bail!("lesson duration must be positive")
        }
        if !self.monthly_fee.is_finite() || self.monthly_fee <= 0.0 {
            bail!("monthly fee must be a positive amount")
        }
        if self.max_sessions == 0 {
            bail!("at least one session must be searched")
        }
        if self.max_sessions > MAX_SESSIONS_LIMIT {
            bail!("at most {MAX_SESSIONS_LIMIT} sessions may be searched")
        }
        Ok(())
    }

    /// Reads a schedule from a JSON file, rejecting one that fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let schedule = Self::read_json_file(path)
            .with_context(|| format!("reading fee schedule from {}", path.display()))?;
        schedule
            .validate()
            .with_context(|| format!("invalid fee schedule in {}", path.display()))?;
        Ok(schedule)
    }

    pub fn lesson_hours(&self) -> f64 {
        self.lesson_minutes as f64 / 60.0
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            lesson_minutes: LESSON_MINUTES,
            monthly_fee: MONTHLY_FEE,
            max_sessions: MAX_SESSIONS_SEARCHED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_is_valid() {
        let schedule = FeeSchedule::default();
        schedule.validate().unwrap();
        assert_eq!(45, schedule.lesson_minutes);
        assert_eq!(110_000.0, schedule.monthly_fee);
        assert_eq!(20, schedule.max_sessions);
        assert_eq!(0.75, schedule.lesson_hours());
    }

    #[test]
    fn validate_rejects_degenerate_schedules() {
        let schedule = FeeSchedule {
            lesson_minutes: 0,
            ..FeeSchedule::default()
        };
        assert_eq!(
            "lesson duration must be positive",
            schedule.validate().unwrap_err().to_string()
        );

        let schedule = FeeSchedule {
            monthly_fee: 0.0,
            ..FeeSchedule::default()
        };
        assert_eq!(
            "monthly fee must be a positive amount",
            schedule.validate().unwrap_err().to_string()
        );

        let schedule = FeeSchedule {
            monthly_fee: f64::NAN,
            ..FeeSchedule::default()
        };
        assert!(schedule.validate().is_err());

        let schedule = FeeSchedule {
            max_sessions: 0,
            ..FeeSchedule::default()
        };
        assert_eq!(
            "at least one session must be searched",
            schedule.validate().unwrap_err().to_string()
        );
    }

    #[test]
    fn validate_bounds_search() {
        let schedule = FeeSchedule {
            max_sessions: MAX_SESSIONS_LIMIT,
            ..FeeSchedule::default()
        };
        schedule.validate().unwrap();

        let schedule = FeeSchedule {
            max_sessions: u32::MAX,
            ..FeeSchedule::default()
        };
        assert_eq!(
            "at most 100 sessions may be searched",
            schedule.validate().unwrap_err().to_string()
        );
    }

    #[test]
    fn load_validates() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("fee-schedule-valid-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"max_sessions": 10}"#).unwrap();
        let schedule = FeeSchedule::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(10, schedule.unwrap().max_sessions);

        let path = dir.join(format!("fee-schedule-unbounded-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"max_sessions": 4294967295}"#).unwrap();
        let result = FeeSchedule::load(&path);
        std::fs::remove_file(&path).unwrap();
        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("invalid fee schedule in "));
        assert_eq!(
            "at most 100 sessions may be searched",
            err.root_cause().to_string()
        );
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let schedule: FeeSchedule = serde_json::from_str(r#"{"max_sessions": 7}"#).unwrap();
        assert_eq!(
            FeeSchedule {
                max_sessions: 7,
                ..FeeSchedule::default()
            },
            schedule
        );
    }
}
