// src/export/model.rs

use crate::models::record::DailyRecord;
use serde::Serialize;

/// Flat row used by CSV and JSON exports.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    pub id: String,
    pub date: String,
    pub revenue: f64,
    pub fuel: f64,
    pub fuel_type: String,
    pub kilometers: Option<f64>,
    pub fuel_efficiency: Option<f64>,
    pub variable_costs: f64,
    pub net_profit: f64,
}

impl From<&DailyRecord> for RecordExport {
    fn from(r: &DailyRecord) -> Self {
        Self {
            id: r.id.clone(),
            date: r.date.to_rfc3339(),
            revenue: r.revenue,
            fuel: r.fuel,
            fuel_type: r.fuel_type.map(|f| f.code().to_string()).unwrap_or_default(),
            kilometers: r.kilometers,
            fuel_efficiency: r.fuel_efficiency,
            variable_costs: r.variable_costs,
            net_profit: r.net_profit,
        }
    }
}

/// Column headers, in struct order.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "date",
        "revenue",
        "fuel",
        "fuel_type",
        "kilometers",
        "fuel_efficiency",
        "variable_costs",
        "net_profit",
    ]
}
