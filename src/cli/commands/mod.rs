pub mod add;
pub mod charts;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod goal;
pub mod init;
pub mod list;
pub mod log;
pub mod settings;
pub mod today;

use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::db::kv::SqliteKv;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::models::record::DailyRecord;
use crate::ui::messages::warning;
use crate::utils::colors::colorize_optional;
use crate::utils::date::format_with;
use crate::utils::formatting::{fmt_efficiency, fmt_km, fmt_money, fmt_money_colored};
use crate::utils::table::{Column, Table};

/// Open the configured database and load records and settings.
pub(crate) fn open_ledger(cfg: &Config) -> AppResult<Ledger<SqliteKv>> {
    Ledger::load(SqliteKv::open(&cfg.database)?)
}

/// Internal log (non-blocking): a failed write only warns.
pub(crate) fn audit(ledger: &Ledger<SqliteKv>, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&ledger.kv().pool().conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

/// Records table shared by `list` and `today`.
pub(crate) fn records_table(records: &[&DailyRecord], cfg: &Config) -> Table {
    let cur = cfg.currency.as_str();
    let mut t = Table::new(vec![
        Column::left("Id"),
        Column::left("Date"),
        Column::right("Revenue"),
        Column::right("Fuel"),
        Column::left("Type"),
        Column::right("Costs"),
        Column::right("Km"),
        Column::right("km/L"),
        Column::right("Profit"),
    ]);

    for r in records {
        t.add_row(vec![
            r.short_id().to_string(),
            format_with(&r.local_date(), &cfg.date_format),
            fmt_money(cur, r.revenue),
            fmt_money(cur, r.fuel),
            colorize_optional(r.fuel_type.map(|f| f.label()).unwrap_or("--")),
            fmt_money(cur, r.variable_costs),
            colorize_optional(&fmt_km(r.kilometers)),
            colorize_optional(&fmt_efficiency(r.fuel_efficiency)),
            fmt_money_colored(cur, r.net_profit),
        ]);
    }
    t
}
