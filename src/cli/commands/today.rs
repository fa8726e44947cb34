use super::{open_ledger, records_table};
use crate::config::Config;
use crate::core::aggregate::{RECENT_RECORDS, recent, today_summary};
use crate::errors::AppResult;
use crate::models::record::DailyRecord;
use crate::ui::messages::{field, header, info};
use crate::utils::formatting::{fmt_efficiency, fmt_km, fmt_money, fmt_money_colored};
use chrono::Local;

/// Dashboard: today's totals and the latest records.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let ledger = open_ledger(cfg)?;
    let now = Local::now();
    let summary = today_summary(ledger.list(), &now);
    let cur = cfg.currency.as_str();

    header(format!("Today ({})", now.format("%Y-%m-%d")));
    field("Revenue", fmt_money(cur, summary.totals.revenue));
    field("Costs", fmt_money(cur, summary.totals.cost));
    field("Net profit", fmt_money_colored(cur, summary.totals.profit));
    field("Records", summary.records);
    field(
        "Kilometers",
        fmt_km((summary.records > 0).then_some(summary.kilometers)),
    );
    field("Avg. efficiency", fmt_efficiency(summary.avg_efficiency));

    header("Latest records");
    let latest: Vec<&DailyRecord> = recent(ledger.list(), RECENT_RECORDS).iter().collect();
    if latest.is_empty() {
        info("No records yet. Add one with `rideledger add --revenue <amount>`.");
    } else {
        println!("{}", records_table(&latest, cfg).render());
    }

    Ok(())
}
