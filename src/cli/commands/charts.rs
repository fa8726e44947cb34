use super::open_ledger;
use crate::config::Config;
use crate::core::aggregate::{ROLLUP_DAYS, ROLLUP_WEEKS, daily_rollup, weekly_rollup};
use crate::errors::AppResult;
use crate::models::summary::Bucket;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{fmt_money, fmt_money_colored};
use crate::utils::table::{Column, Table};
use chrono::Local;

fn bucket_table(first: &str, buckets: &[Bucket], date_fmt: &str, cur: &str) -> Table {
    let mut t = Table::new(vec![
        Column::left(first),
        Column::right("Revenue"),
        Column::right("Costs"),
        Column::right("Profit"),
    ]);
    for b in buckets {
        t.add_row(vec![
            b.start.format(date_fmt).to_string(),
            fmt_money(cur, b.totals.revenue),
            fmt_money(cur, b.totals.cost),
            fmt_money_colored(cur, b.totals.profit),
        ]);
    }
    t
}

/// Daily and weekly evolution, oldest first.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let ledger = open_ledger(cfg)?;
    let cur = cfg.currency.as_str();

    if ledger.list().is_empty() {
        info("No records yet: nothing to chart.");
        return Ok(());
    }

    header(format!("Last {} days", ROLLUP_DAYS));
    let days = daily_rollup(ledger.list(), &Local, ROLLUP_DAYS);
    println!("{}", bucket_table("Day", &days, "%a %d/%m", cur).render());

    header(format!("Last {} weeks", ROLLUP_WEEKS));
    let weeks = weekly_rollup(ledger.list(), &Local, ROLLUP_WEEKS);
    println!("{}", bucket_table("Week of", &weeks, "%d/%m/%Y", cur).render());

    Ok(())
}
