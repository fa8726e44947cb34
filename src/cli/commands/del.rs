use super::{audit, open_ledger};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::fmt_money;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut ledger = open_ledger(cfg)?;

        let Some(target) = ledger.find(id)?.cloned() else {
            warning(format!("No record found with id '{}': nothing deleted.", id));
            return Ok(());
        };

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete record {} ({}, net profit {})? This action is irreversible.",
            target.short_id(),
            target.local_date().format("%Y-%m-%d"),
            fmt_money(&cfg.currency, target.net_profit)
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        match DeleteLogic::apply(&mut ledger, &target.id)? {
            Some(removed) => {
                let msg = format!("Record {} deleted.", removed.short_id());
                audit(&ledger, "del", removed.short_id(), &msg);
                success(msg);
            }
            None => warning(format!("No record found with id '{}': nothing deleted.", id)),
        }
    }

    Ok(())
}
