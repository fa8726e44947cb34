//! Period filters, totals, weekly goal math and chart rollups.
//!
//! Everything here is a pure function over a snapshot of the records.
//! Calendar days are taken in the time zone of the `now` argument, so the
//! CLI passes `Local::now()` and tests can pin a fixed offset.

use crate::models::period::Period;
use crate::models::record::DailyRecord;
use crate::models::settings::UserSettings;
use crate::models::summary::{Bucket, GoalProgress, GoalTier, TodaySummary, Totals};
use chrono::{DateTime, Datelike, Days, Months, NaiveDate, TimeZone, Weekday};
use std::collections::BTreeMap;

pub const ROLLUP_DAYS: usize = 7;
pub const ROLLUP_WEEKS: usize = 4;
pub const RECENT_RECORDS: usize = 5;

/// Calendar day of a record as seen from `tz`.
pub fn record_day<Tz: TimeZone>(record: &DailyRecord, tz: &Tz) -> NaiveDate {
    record.date.with_timezone(tz).date_naive()
}

/// Sunday on or before `day`.
pub fn week_start(day: NaiveDate) -> NaiveDate {
    let back = u64::from(day.weekday().num_days_from_sunday());
    day.checked_sub_days(Days::new(back)).unwrap_or(day)
}

/// First calendar day included by a period filter.
pub fn period_start(today: NaiveDate, period: Period) -> NaiveDate {
    match period {
        Period::Day => today,
        Period::Week => today.checked_sub_days(Days::new(7)).unwrap_or(today),
        Period::Month => today.checked_sub_months(Months::new(1)).unwrap_or(today),
    }
}

pub fn filter_period<'a, Tz: TimeZone>(
    records: &'a [DailyRecord],
    now: &DateTime<Tz>,
    period: Period,
) -> Vec<&'a DailyRecord> {
    let tz = now.timezone();
    let today = now.date_naive();
    let start = period_start(today, period);

    records
        .iter()
        .filter(|r| {
            let day = record_day(r, &tz);
            match period {
                Period::Day => day == today,
                Period::Week | Period::Month => day >= start,
            }
        })
        .collect()
}

pub fn totals<'a, I>(records: I) -> Totals
where
    I: IntoIterator<Item = &'a DailyRecord>,
{
    let mut t = Totals::default();
    for r in records {
        t.add(r.revenue, r.total_cost(), r.net_profit);
    }
    t
}

/// Records of the current Sunday-based week, up to today.
pub fn week_records<'a, Tz: TimeZone>(
    records: &'a [DailyRecord],
    now: &DateTime<Tz>,
) -> Vec<&'a DailyRecord> {
    let tz = now.timezone();
    let today = now.date_naive();
    let start = week_start(today);

    records
        .iter()
        .filter(|r| {
            let day = record_day(r, &tz);
            day >= start && day <= today
        })
        .collect()
}

pub fn weekly_total<Tz: TimeZone>(records: &[DailyRecord], now: &DateTime<Tz>) -> f64 {
    week_records(records, now).iter().map(|r| r.net_profit).sum()
}

/// Percentage of the goal reached, clamped to 0..=100.
pub fn progress_percent(weekly_total: f64, weekly_goal: f64) -> f64 {
    if weekly_goal <= 0.0 {
        return 100.0;
    }
    (weekly_total / weekly_goal * 100.0).clamp(0.0, 100.0)
}

pub fn remaining_amount(weekly_total: f64, weekly_goal: f64) -> f64 {
    (weekly_goal - weekly_total).max(0.0)
}

/// Days after today and before the next day off.
/// Zero when today is the day off or the day off is tomorrow.
pub fn working_days_left(today: Weekday, day_off: Weekday) -> u32 {
    if today == day_off {
        return 0;
    }
    let until_day_off =
        (day_off.num_days_from_sunday() + 7 - today.num_days_from_sunday()) % 7;
    until_day_off.saturating_sub(1)
}

pub fn suggested_daily_target(remaining: f64, working_days: u32) -> Option<f64> {
    (working_days > 0).then(|| remaining / f64::from(working_days))
}

pub fn goal_progress<Tz: TimeZone>(
    records: &[DailyRecord],
    now: &DateTime<Tz>,
    settings: &UserSettings,
) -> GoalProgress {
    let weekly_total = weekly_total(records, now);
    let progress = progress_percent(weekly_total, settings.weekly_goal);
    let remaining = remaining_amount(weekly_total, settings.weekly_goal);
    let days = working_days_left(now.weekday(), settings.day_off_weekday());

    GoalProgress {
        weekly_goal: settings.weekly_goal,
        weekly_total,
        progress,
        remaining,
        working_days_left: days,
        daily_target: suggested_daily_target(remaining, days),
        tier: GoalTier::from_progress(progress),
    }
}

pub fn today_summary<Tz: TimeZone>(records: &[DailyRecord], now: &DateTime<Tz>) -> TodaySummary {
    let today = filter_period(records, now, Period::Day);

    let kilometers = today.iter().filter_map(|r| r.kilometers).sum();
    let efficiencies: Vec<f64> = today.iter().filter_map(|r| r.fuel_efficiency).collect();
    let avg_efficiency = if efficiencies.is_empty() {
        None
    } else {
        Some(efficiencies.iter().sum::<f64>() / efficiencies.len() as f64)
    };

    TodaySummary {
        totals: totals(today.iter().copied()),
        records: today.len(),
        kilometers,
        avg_efficiency,
    }
}

/// Newest records first, as stored.
pub fn recent(records: &[DailyRecord], n: usize) -> &[DailyRecord] {
    &records[..records.len().min(n)]
}

fn rollup<F>(records: &[DailyRecord], keep: usize, key: F) -> Vec<Bucket>
where
    F: Fn(&DailyRecord) -> NaiveDate,
{
    let mut groups: BTreeMap<NaiveDate, Totals> = BTreeMap::new();
    for r in records {
        groups
            .entry(key(r))
            .or_default()
            .add(r.revenue, r.total_cost(), r.net_profit);
    }

    let skip = groups.len().saturating_sub(keep);
    groups
        .into_iter()
        .skip(skip)
        .map(|(start, totals)| Bucket { start, totals })
        .collect()
}

/// Most recent `keep` calendar days with records, oldest first.
pub fn daily_rollup<Tz: TimeZone>(records: &[DailyRecord], tz: &Tz, keep: usize) -> Vec<Bucket> {
    rollup(records, keep, |r| record_day(r, tz))
}

/// Most recent `keep` Sunday-based weeks with records, oldest first.
pub fn weekly_rollup<Tz: TimeZone>(records: &[DailyRecord], tz: &Tz, keep: usize) -> Vec<Bucket> {
    rollup(records, keep, |r| week_start(record_day(r, tz)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::derive::derive_record;
    use crate::models::record::RecordInput;
    use chrono::{FixedOffset, Utc};

    fn tz() -> FixedOffset {
        FixedOffset::west_opt(3 * 3600).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<FixedOffset> {
        tz().with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn rec(id: &str, when: DateTime<FixedOffset>, revenue: f64, fuel: f64, costs: f64) -> DailyRecord {
        let input = RecordInput {
            revenue,
            fuel,
            variable_costs: costs,
            kilometers: None,
            fuel_type: None,
        };
        DailyRecord::from_new(id.into(), derive_record(&input, when.with_timezone(&Utc)))
    }

    #[test]
    fn day_filter_keeps_only_today_in_any_order() {
        // Wednesday 2025-06-18, 10:00 at UTC-3
        let now = at(2025, 6, 18, 10);
        let records = vec![
            rec("y1", at(2025, 6, 17, 22), 100.0, 10.0, 0.0),
            rec("t1", at(2025, 6, 18, 8), 200.0, 50.0, 10.0),
            rec("y2", at(2025, 6, 17, 9), 80.0, 0.0, 0.0),
            rec("t2", at(2025, 6, 18, 0), 50.0, 0.0, 5.0),
        ];

        let today = filter_period(&records, &now, Period::Day);
        let ids: Vec<&str> = today.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2"]);

        let t = totals(today);
        assert_eq!(t.revenue, 250.0);
        assert_eq!(t.cost, 65.0);
        assert_eq!(t.profit, 185.0);
    }

    #[test]
    fn local_calendar_not_utc_decides_the_day() {
        let now = at(2025, 6, 18, 10);
        // 23:30 local on the 17th is already the 18th in UTC
        let late = tz()
            .with_ymd_and_hms(2025, 6, 17, 23, 30, 0)
            .unwrap();
        let records = vec![rec("late", late, 10.0, 0.0, 0.0)];
        assert!(filter_period(&records, &now, Period::Day).is_empty());
    }

    #[test]
    fn week_and_month_windows() {
        let now = at(2025, 3, 31, 12);
        let records = vec![
            rec("a", at(2025, 3, 24, 1), 1.0, 0.0, 0.0),
            rec("b", at(2025, 3, 23, 23), 1.0, 0.0, 0.0),
            rec("c", at(2025, 2, 28, 8), 1.0, 0.0, 0.0),
            rec("d", at(2025, 2, 27, 8), 1.0, 0.0, 0.0),
        ];

        let week: Vec<&str> = filter_period(&records, &now, Period::Week)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(week, vec!["a"]);

        // March 31 minus one month clamps to February 28
        let month: Vec<&str> = filter_period(&records, &now, Period::Month)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(month, vec!["a", "b", "c"]);
    }

    #[test]
    fn progress_is_clamped_and_remaining_floored() {
        assert_eq!(progress_percent(1200.0, 1000.0), 100.0);
        assert_eq!(remaining_amount(1200.0, 1000.0), 0.0);
        assert_eq!(progress_percent(250.0, 1000.0), 25.0);
        assert_eq!(remaining_amount(250.0, 1000.0), 750.0);
        assert_eq!(progress_percent(-50.0, 1000.0), 0.0);
    }

    #[test]
    fn working_days_wrap_around_the_day_off() {
        // Sunday off
        assert_eq!(working_days_left(Weekday::Mon, Weekday::Sun), 5);
        assert_eq!(working_days_left(Weekday::Sat, Weekday::Sun), 0);
        assert_eq!(working_days_left(Weekday::Sun, Weekday::Sun), 0);
        // Wednesday off, seen from Thursday: Fri, Sat, Sun, Mon, Tue
        assert_eq!(working_days_left(Weekday::Thu, Weekday::Wed), 5);
        assert_eq!(working_days_left(Weekday::Tue, Weekday::Wed), 0);
        assert_eq!(working_days_left(Weekday::Mon, Weekday::Wed), 1);
    }

    #[test]
    fn no_daily_target_without_working_days() {
        assert_eq!(suggested_daily_target(500.0, 0), None);
        assert_eq!(suggested_daily_target(500.0, 4), Some(125.0));
    }

    #[test]
    fn weekly_goal_uses_sunday_window() {
        // Tuesday 2025-06-17
        let now = at(2025, 6, 17, 18);
        let records = vec![
            rec("tue", at(2025, 6, 17, 9), 400.0, 80.0, 20.0),
            rec("sun", at(2025, 6, 15, 0), 250.0, 50.0, 0.0),
            rec("sat", at(2025, 6, 14, 23), 999.0, 0.0, 0.0),
        ];
        let settings = UserSettings {
            weekly_goal: 1000.0,
            day_off: 0,
        };

        let g = goal_progress(&records, &now, &settings);
        assert_eq!(g.weekly_total, 500.0);
        assert_eq!(g.progress, 50.0);
        assert_eq!(g.remaining, 500.0);
        assert_eq!(g.working_days_left, 4);
        assert_eq!(g.daily_target, Some(125.0));
        assert_eq!(g.tier, GoalTier::KeepGoing);
    }

    #[test]
    fn goal_exceeded_is_reached() {
        let now = at(2025, 6, 20, 18);
        let records = vec![rec("fri", at(2025, 6, 20, 9), 1300.0, 100.0, 0.0)];
        let g = goal_progress(&records, &now, &UserSettings::default());
        assert_eq!(g.progress, 100.0);
        assert_eq!(g.remaining, 0.0);
        assert_eq!(g.tier, GoalTier::Reached);
    }

    #[test]
    fn today_summary_averages_only_known_efficiency() {
        let now = at(2025, 6, 18, 20);
        let mut with_km = rec("a", at(2025, 6, 18, 9), 200.0, 20.0, 0.0);
        with_km.kilometers = Some(100.0);
        with_km.fuel_efficiency = Some(30.0);
        let without_km = rec("b", at(2025, 6, 18, 15), 100.0, 10.0, 5.0);

        let s = today_summary(&[with_km, without_km], &now);
        assert_eq!(s.records, 2);
        assert_eq!(s.kilometers, 100.0);
        assert_eq!(s.avg_efficiency, Some(30.0));
        assert_eq!(s.totals.profit, 265.0);

        let empty = today_summary(&[], &now);
        assert_eq!(empty.avg_efficiency, None);
        assert_eq!(empty.records, 0);
    }

    #[test]
    fn daily_rollup_keeps_last_seven_days_oldest_first() {
        let mut records = Vec::new();
        for d in 1..=9 {
            records.push(rec(&format!("r{d}"), at(2025, 6, d, 10), 100.0, 20.0, 0.0));
        }
        // a second record on the 9th lands in the same bucket
        records.push(rec("r9b", at(2025, 6, 9, 18), 50.0, 0.0, 0.0));
        records.reverse();

        let buckets = daily_rollup(&records, &tz(), ROLLUP_DAYS);
        assert_eq!(buckets.len(), 7);
        assert_eq!(buckets[0].start, NaiveDate::from_ymd_opt(2025, 6, 3).unwrap());
        let last = buckets.last().unwrap();
        assert_eq!(last.start, NaiveDate::from_ymd_opt(2025, 6, 9).unwrap());
        assert_eq!(last.totals.revenue, 150.0);
        assert_eq!(last.totals.profit, 130.0);
    }

    #[test]
    fn weekly_rollup_groups_by_sunday() {
        let records = vec![
            rec("a", at(2025, 6, 21, 10), 100.0, 0.0, 0.0), // Sat, week of 15th
            rec("b", at(2025, 6, 15, 10), 100.0, 0.0, 0.0), // Sun, week of 15th
            rec("c", at(2025, 6, 14, 10), 10.0, 0.0, 0.0),  // Sat, week of 8th
            rec("d", at(2025, 5, 20, 10), 1.0, 0.0, 0.0),
            rec("e", at(2025, 5, 10, 10), 1.0, 0.0, 0.0),
            rec("f", at(2025, 5, 1, 10), 1.0, 0.0, 0.0),
        ];

        let weeks = weekly_rollup(&records, &tz(), ROLLUP_WEEKS);
        assert_eq!(weeks.len(), 4);
        assert_eq!(weeks[0].start, NaiveDate::from_ymd_opt(2025, 5, 4).unwrap());
        assert_eq!(weeks[3].start, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert_eq!(weeks[3].totals.revenue, 200.0);
        assert_eq!(weeks[2].totals.revenue, 10.0);
    }

    #[test]
    fn recent_takes_newest_five() {
        let now = at(2025, 6, 18, 10);
        let records: Vec<DailyRecord> = (0..8)
            .map(|i| rec(&format!("r{i}"), now, 1.0, 0.0, 0.0))
            .collect();
        let r = recent(&records, RECENT_RECORDS);
        assert_eq!(r.len(), 5);
        assert_eq!(r[0].id, "r0");
        assert_eq!(recent(&records[..2], RECENT_RECORDS).len(), 2);
    }
}
