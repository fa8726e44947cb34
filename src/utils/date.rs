use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Instant used for a back-filled entry: noon of `day` in `tz`.
/// Noon keeps the record on the same calendar day across DST shifts.
pub fn entry_instant<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    let noon = day.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN));
    match tz.from_local_datetime(&noon) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        LocalResult::None => Utc.from_utc_datetime(&noon),
    }
}

/// Format with a user-configured strftime pattern; an invalid pattern
/// falls back to `%d/%m/%Y` instead of failing at display time.
pub fn format_with(dt: &DateTime<Local>, pattern: &str) -> String {
    let valid = StrftimeItems::new(pattern).all(|i| !matches!(i, Item::Error));
    let pattern = if valid { pattern } else { "%d/%m/%Y" };
    dt.format(pattern).to_string()
}

/// Inclusive day range check used by `export --range`.
pub fn in_range(day: NaiveDate, range: Option<(NaiveDate, NaiveDate)>) -> bool {
    match range {
        Some((start, end)) => day >= start && day <= end,
        None => true,
    }
}
