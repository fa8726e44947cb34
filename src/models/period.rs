use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// History window used by `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Period {
    Day,
    Week,
    Month,
}

impl Period {
    pub fn code(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Period::Day => "Today",
            Period::Week => "Last 7 days",
            Period::Month => "Last month",
        }
    }

    pub fn from_code(code: &str) -> AppResult<Self> {
        match code.trim().to_lowercase().as_str() {
            "day" | "d" | "today" => Ok(Period::Day),
            "week" | "w" => Ok(Period::Week),
            "month" | "m" => Ok(Period::Month),
            other => Err(AppError::InvalidPeriod(other.to_string())),
        }
    }
}
