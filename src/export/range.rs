// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::{Months, NaiveDate};

fn invalid(msg: &str, raw: &str) -> AppError {
    AppError::InvalidDate(format!("{msg}: {raw}"))
}

/// First and last day covered by a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid("invalid year", p))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid("invalid year", p))?;
            let d2 =
                NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid("invalid year", p))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid("invalid month", p))?;
            let d2 = d1
                .checked_add_months(Months::new(1))
                .and_then(|d| d.pred_opt())
                .ok_or_else(|| invalid("invalid month", p))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| invalid("invalid date", p))?;
            Ok((d, d))
        }
        _ => Err(invalid("unsupported range format", p)),
    }
}

/// Parse --range (year / month / day / interval).
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();
    let Some((start_raw, end_raw)) = r.split_once(':') else {
        return bounds(r);
    };

    let (start, end) = (start_raw.trim(), end_raw.trim());
    if start.len() != end.len() {
        return Err(invalid("start and end must have same format", r));
    }

    let (d1, _) = bounds(start)?;
    let (_, d2) = bounds(end)?;
    if d1 > d2 {
        return Err(invalid("start is after end", r));
    }
    Ok((d1, d2))
}
