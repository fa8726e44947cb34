use super::open_ledger;
use crate::config::Config;
use crate::core::aggregate::goal_progress;
use crate::errors::AppResult;
use crate::models::settings::weekday_name;
use crate::ui::messages::{field, header};
use crate::utils::colors::{RESET, color_for_progress};
use crate::utils::formatting::{bold, fmt_money, fmt_money_colored, fmt_percent, progress_bar};
use chrono::Local;

const BAR_WIDTH: usize = 30;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let ledger = open_ledger(cfg)?;
    let settings = ledger.settings();
    let g = goal_progress(ledger.list(), &Local::now(), settings);
    let cur = cfg.currency.as_str();

    header("Weekly goal");
    println!(
        "  {}{} {}{}",
        color_for_progress(g.progress),
        progress_bar(g.progress, BAR_WIDTH),
        fmt_percent(g.progress),
        RESET
    );
    field("Goal", fmt_money(cur, g.weekly_goal));
    field("This week", fmt_money_colored(cur, g.weekly_total));
    field("Remaining", fmt_money(cur, g.remaining));
    field("Day off", weekday_name(settings.day_off_weekday()));
    field("Working days left", g.working_days_left);

    match g.daily_target {
        Some(target) if g.remaining > 0.0 => {
            field("Suggested per day", bold(&fmt_money(cur, target)));
        }
        _ => field("Suggested per day", "--"),
    }

    println!("\n  {}", g.tier.message());
    Ok(())
}
