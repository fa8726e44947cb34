//! Earnings entries as they are stored in the `driver-records` blob.

use crate::models::fuel_type::FuelType;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Raw amounts entered by the driver, before derivation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RecordInput {
    pub revenue: f64,
    pub fuel: f64,
    pub variable_costs: f64,
    pub kilometers: Option<f64>,
    pub fuel_type: Option<FuelType>,
}

/// A record without its id: what the store receives on add/update.
/// Built only by `core::derive::derive_record`, so the derived fields
/// always agree with the amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    pub date: DateTime<Utc>,
    pub revenue: f64,
    pub fuel: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<FuelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kilometers: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_efficiency: Option<f64>,
    pub variable_costs: f64,
    pub net_profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    pub revenue: f64,
    pub fuel: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<FuelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kilometers: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_efficiency: Option<f64>,
    pub variable_costs: f64,
    pub net_profit: f64,
}

impl DailyRecord {
    pub fn from_new(id: String, rec: NewRecord) -> Self {
        Self {
            id,
            date: rec.date,
            revenue: rec.revenue,
            fuel: rec.fuel,
            fuel_type: rec.fuel_type,
            kilometers: rec.kilometers,
            fuel_efficiency: rec.fuel_efficiency,
            variable_costs: rec.variable_costs,
            net_profit: rec.net_profit,
        }
    }

    /// The raw amounts of this record, e.g. to prefill an edit.
    pub fn input(&self) -> RecordInput {
        RecordInput {
            revenue: self.revenue,
            fuel: self.fuel,
            variable_costs: self.variable_costs,
            kilometers: self.kilometers,
            fuel_type: self.fuel_type,
        }
    }

    /// Fuel plus variable costs.
    pub fn total_cost(&self) -> f64 {
        self.fuel + self.variable_costs
    }

    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }

    pub fn local_date(&self) -> DateTime<Local> {
        self.date.with_timezone(&Local)
    }

    pub fn is_loss(&self) -> bool {
        self.net_profit < 0.0
    }
}
