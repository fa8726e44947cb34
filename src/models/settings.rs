use crate::errors::{AppError, AppResult};
use chrono::Weekday;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WEEKLY_GOAL: f64 = 1000.0;

/// Driver preferences stored in the `driver-settings` blob.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub weekly_goal: f64,
    /// 0 = Sunday ... 6 = Saturday
    pub day_off: u8,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            weekly_goal: DEFAULT_WEEKLY_GOAL,
            day_off: 0,
        }
    }
}

impl UserSettings {
    pub fn validate(&self) -> AppResult<()> {
        if !self.weekly_goal.is_finite() || self.weekly_goal <= 0.0 {
            return Err(AppError::InvalidSettings(format!(
                "weekly goal must be a positive amount, got {}",
                self.weekly_goal
            )));
        }
        if self.day_off > 6 {
            return Err(AppError::InvalidSettings(format!(
                "day off must be between 0 (Sunday) and 6 (Saturday), got {}",
                self.day_off
            )));
        }
        Ok(())
    }

    pub fn day_off_weekday(&self) -> Weekday {
        weekday_from_index(self.day_off)
    }
}

/// Sunday-based index (0..=6) to chrono weekday; out of range wraps.
pub fn weekday_from_index(idx: u8) -> Weekday {
    match idx % 7 {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_run() {
        let s = UserSettings::default();
        assert_eq!(s.weekly_goal, 1000.0);
        assert_eq!(s.day_off, 0);
        assert_eq!(s.day_off_weekday(), Weekday::Sun);
    }

    #[test]
    fn rejects_non_positive_goal_and_bad_day() {
        let zero = UserSettings {
            weekly_goal: 0.0,
            day_off: 1,
        };
        assert!(matches!(zero.validate(), Err(AppError::InvalidSettings(_))));

        let nan = UserSettings {
            weekly_goal: f64::NAN,
            day_off: 1,
        };
        assert!(nan.validate().is_err());

        let day = UserSettings {
            weekly_goal: 500.0,
            day_off: 7,
        };
        assert!(day.validate().is_err());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&UserSettings::default()).unwrap();
        assert_eq!(json, r#"{"weeklyGoal":1000.0,"dayOff":0}"#);
    }
}
