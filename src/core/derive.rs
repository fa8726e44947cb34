//! Derivation engine: the only place where net profit and fuel efficiency
//! are computed, and where driver-typed amounts are parsed.

use crate::errors::{AppError, AppResult};
use crate::models::fuel_type::FuelType;
use crate::models::record::{NewRecord, RecordInput};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How malformed amounts typed by the driver are handled.
/// The same policy applies to new records and to edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Non-numeric or negative text is rejected.
    #[default]
    Strict,
    /// Non-numeric or negative text counts as zero.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derived {
    pub net_profit: f64,
    pub fuel_efficiency: Option<f64>,
}

pub fn net_profit(revenue: f64, fuel: f64, variable_costs: f64) -> f64 {
    revenue - fuel - variable_costs
}

/// Liters bought with `fuel` money, or None when nothing was bought.
pub fn liters(fuel: f64, fuel_type: Option<FuelType>) -> Option<f64> {
    let l = fuel / FuelType::price_or_default(fuel_type);
    (l.is_finite() && l > 0.0).then_some(l)
}

/// Kilometers per liter. Absent when no distance or no fuel was recorded.
pub fn fuel_efficiency(
    kilometers: Option<f64>,
    fuel: f64,
    fuel_type: Option<FuelType>,
) -> Option<f64> {
    let km = kilometers.filter(|k| *k > 0.0)?;
    let l = liters(fuel, fuel_type)?;
    let eff = km / l;
    eff.is_finite().then_some(eff)
}

pub fn derive(input: &RecordInput) -> Derived {
    Derived {
        net_profit: net_profit(input.revenue, input.fuel, input.variable_costs),
        fuel_efficiency: fuel_efficiency(input.kilometers, input.fuel, input.fuel_type),
    }
}

/// Build the stored form of a record, with derived fields filled in.
pub fn derive_record(input: &RecordInput, date: DateTime<Utc>) -> NewRecord {
    let d = derive(input);
    NewRecord {
        date,
        revenue: input.revenue,
        fuel: input.fuel,
        fuel_type: input.fuel_type,
        kilometers: input.kilometers.filter(|k| *k > 0.0),
        fuel_efficiency: d.fuel_efficiency,
        variable_costs: input.variable_costs,
        net_profit: d.net_profit,
    }
}

fn parse_decimal(raw: &str) -> Option<f64> {
    let v: f64 = raw.trim().replace(',', ".").parse().ok()?;
    (v.is_finite() && v >= 0.0).then_some(v)
}

/// Parse a monetary amount. Blank text is zero under both policies.
pub fn parse_amount(field: &'static str, raw: &str, policy: InputPolicy) -> AppResult<f64> {
    if raw.trim().is_empty() {
        return Ok(0.0);
    }
    match (parse_decimal(raw), policy) {
        (Some(v), _) => Ok(v),
        (None, InputPolicy::Lenient) => Ok(0.0),
        (None, InputPolicy::Strict) => Err(AppError::InvalidAmount {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Parse a distance. Blank or zero means "not recorded".
pub fn parse_distance(raw: &str, policy: InputPolicy) -> AppResult<Option<f64>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    match (parse_decimal(raw), policy) {
        (Some(v), _) => Ok((v > 0.0).then_some(v)),
        (None, InputPolicy::Lenient) => Ok(None),
        (None, InputPolicy::Strict) => Err(AppError::InvalidAmount {
            field: "kilometers",
            value: raw.to_string(),
        }),
    }
}

pub fn parse_fuel_type(raw: Option<&str>) -> AppResult<Option<FuelType>> {
    match raw {
        None => Ok(None),
        Some(code) if code.trim().is_empty() => Ok(None),
        Some(code) => FuelType::from_code(code)
            .map(Some)
            .ok_or_else(|| AppError::InvalidFuelType(code.to_string())),
    }
}

/// Text exactly as typed in the entry form.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawInput<'a> {
    pub revenue: &'a str,
    pub fuel: &'a str,
    pub variable_costs: &'a str,
    pub kilometers: &'a str,
    pub fuel_type: Option<&'a str>,
}

pub fn parse_input(raw: &RawInput<'_>, policy: InputPolicy) -> AppResult<RecordInput> {
    Ok(RecordInput {
        revenue: parse_amount("revenue", raw.revenue, policy)?,
        fuel: parse_amount("fuel", raw.fuel, policy)?,
        variable_costs: parse_amount("variable costs", raw.variable_costs, policy)?,
        kilometers: parse_distance(raw.kilometers, policy)?,
        // Entry form defaults to gasoline.
        fuel_type: Some(parse_fuel_type(raw.fuel_type)?.unwrap_or_default()),
    })
}
