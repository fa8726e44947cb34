use super::{audit, open_ledger};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::derive::{InputPolicy, parse_amount};
use crate::errors::AppResult;
use crate::models::settings::weekday_name;
use crate::ui::messages::{field, header, success};
use crate::utils::formatting::fmt_money;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        goal,
        day_off,
        print,
    } = cmd
    {
        let mut ledger = open_ledger(cfg)?;
        let mut settings = *ledger.settings();

        if goal.is_some() || day_off.is_some() {
            if let Some(g) = goal {
                // a goal is never silently zeroed
                settings.weekly_goal = parse_amount("weekly goal", g, InputPolicy::Strict)?;
            }
            if let Some(d) = day_off {
                settings.day_off = *d;
            }

            ledger.set_settings(settings)?;

            let msg = format!(
                "Settings saved: weekly goal {}, day off {}",
                fmt_money(&cfg.currency, settings.weekly_goal),
                weekday_name(settings.day_off_weekday())
            );
            audit(&ledger, "settings", "", &msg);
            success(msg);
        }

        if *print || (goal.is_none() && day_off.is_none()) {
            header("Settings");
            field("Weekly goal", fmt_money(&cfg.currency, settings.weekly_goal));
            field(
                "Day off",
                format!("{} ({})", weekday_name(settings.day_off_weekday()), settings.day_off),
            );
        }
    }
    Ok(())
}
