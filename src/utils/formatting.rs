//! Formatting utilities used for CLI and export outputs.

use crate::utils::colors::{RESET, color_for_amount};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `R$ 12.50`, `R$ -3.00`
pub fn fmt_money(currency: &str, amount: f64) -> String {
    // avoid printing "-0.00"
    let amount = if amount.abs() < 0.005 { 0.0 } else { amount };
    format!("{} {:.2}", currency, amount)
}

/// Money colored green/red by sign.
pub fn fmt_money_colored(currency: &str, amount: f64) -> String {
    format!(
        "{}{}{}",
        color_for_amount(amount),
        fmt_money(currency, amount),
        RESET
    )
}

pub fn fmt_efficiency(eff: Option<f64>) -> String {
    match eff {
        Some(v) => format!("{:.2} km/L", v),
        None => "--".to_string(),
    }
}

pub fn fmt_km(km: Option<f64>) -> String {
    match km {
        Some(v) => format!("{:.0} km", v),
        None => "--".to_string(),
    }
}

pub fn fmt_percent(p: f64) -> String {
    format!("{:.1}%", p)
}

/// Text progress bar, e.g. `[########------------]`
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled))
    )
}
