use super::{audit, open_ledger};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::logic::ExportLogic;
use crate::ui::messages::warning;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let ledger = open_ledger(cfg)?;
        let rows = ExportLogic::select(ledger.list(), range.as_deref(), &Local)?;

        if rows.is_empty() {
            warning("No records match the requested range: writing an empty export.");
        }

        ExportLogic::write(&rows, *format, file, *force)?;

        audit(
            &ledger,
            "export",
            format.as_str(),
            &format!("Exported {} records to {}", rows.len(), file),
        );
    }
    Ok(())
}
