use super::{audit, open_ledger};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditFields, EditLogic};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::{fmt_efficiency, fmt_money};

/// Edit a record in place.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        revenue,
        fuel,
        fuel_type,
        kilometers,
        variable_costs,
    } = cmd
    {
        let fields = EditFields {
            revenue: revenue.as_deref(),
            fuel: fuel.as_deref(),
            variable_costs: variable_costs.as_deref(),
            kilometers: kilometers.as_deref(),
            fuel_type: fuel_type.as_deref(),
        };

        if fields.is_empty() {
            info("Nothing to change: pass at least one of --revenue, --fuel, --fuel-type, --km, --costs.");
            return Ok(());
        }

        let mut ledger = open_ledger(cfg)?;

        match EditLogic::apply(&mut ledger, id, &fields, cfg.input_policy)? {
            Some((before, after)) => {
                let msg = format!(
                    "Record {} updated. Net profit: {} → {} | Efficiency: {}",
                    after.short_id(),
                    fmt_money(&cfg.currency, before.net_profit),
                    fmt_money(&cfg.currency, after.net_profit),
                    fmt_efficiency(after.fuel_efficiency)
                );
                audit(&ledger, "edit", after.short_id(), &msg);
                success(msg);
            }
            None => warning(format!("No record found with id '{}'.", id)),
        }
    }

    Ok(())
}
