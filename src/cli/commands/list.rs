use super::{open_ledger, records_table};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::{filter_period, totals};
use crate::errors::AppResult;
use crate::models::period::Period;
use crate::models::record::DailyRecord;
use crate::ui::messages::{field, header, info};
use crate::utils::formatting::{fmt_money, fmt_money_colored};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let ledger = open_ledger(cfg)?;

        let (title, selected): (&str, Vec<&DailyRecord>) = if period.eq_ignore_ascii_case("all") {
            ("All records", ledger.list().iter().collect())
        } else {
            let p = Period::from_code(period)?;
            (p.title(), filter_period(ledger.list(), &Local::now(), p))
        };

        header(title);

        if selected.is_empty() {
            info("No records for this period.");
            return Ok(());
        }

        println!("{}", records_table(&selected, cfg).render());

        let t = totals(selected.iter().copied());
        let cur = cfg.currency.as_str();
        field("Records", selected.len());
        field("Revenue", fmt_money(cur, t.revenue));
        field("Costs", fmt_money(cur, t.cost));
        field("Net profit", fmt_money_colored(cur, t.profit));
    }
    Ok(())
}
