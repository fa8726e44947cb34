use super::{audit, open_ledger};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::derive::RawInput;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::formatting::{fmt_efficiency, fmt_money};
use chrono::{Local, Utc};

/// Add a daily record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        revenue,
        fuel,
        fuel_type,
        kilometers,
        variable_costs,
        date: date_arg,
    } = cmd
    {
        //
        // 1. Entry instant: now, or noon of the requested day
        //
        let when = match date_arg {
            Some(d) => {
                let day = date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
                date::entry_instant(day, &Local)
            }
            None => Utc::now(),
        };

        //
        // 2. Parse, derive and store
        //
        let raw = RawInput {
            revenue,
            fuel,
            variable_costs,
            kilometers,
            fuel_type: fuel_type.as_deref(),
        };

        let mut ledger = open_ledger(cfg)?;
        let rec = AddLogic::apply(&mut ledger, &raw, when, cfg.input_policy)?;

        let mut msg = format!(
            "Record {} added. Net profit: {}",
            rec.short_id(),
            fmt_money(&cfg.currency, rec.net_profit)
        );
        if rec.fuel_efficiency.is_some() {
            msg.push_str(&format!(" | Efficiency: {}", fmt_efficiency(rec.fuel_efficiency)));
        }

        audit(&ledger, "add", rec.short_id(), &msg);
        success(msg);
        if rec.is_loss() {
            warning("This record closed at a loss.");
        }
    }

    Ok(())
}
