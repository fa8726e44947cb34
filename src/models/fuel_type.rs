use serde::{Deserialize, Serialize};

/// Per-liter prices used to turn a fuel expense into liters.
pub const GASOLINE_PRICE: f64 = 5.89;
pub const ETHANOL_PRICE: f64 = 3.99;
pub const CNG_PRICE: f64 = 4.50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    #[default]
    Gasoline,
    Ethanol,
    Cng,
}

impl FuelType {
    pub fn code(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "gasoline",
            FuelType::Ethanol => "ethanol",
            FuelType::Cng => "cng",
        }
    }

    /// Label shown in tables (the driver-facing names).
    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "Gasolina",
            FuelType::Ethanol => "Etanol",
            FuelType::Cng => "GNV",
        }
    }

    pub fn price_per_liter(&self) -> f64 {
        match self {
            FuelType::Gasoline => GASOLINE_PRICE,
            FuelType::Ethanol => ETHANOL_PRICE,
            FuelType::Cng => CNG_PRICE,
        }
    }

    /// Price for an optional fuel type; absent falls back to gasoline.
    pub fn price_or_default(fuel_type: Option<FuelType>) -> f64 {
        fuel_type.unwrap_or_default().price_per_liter()
    }

    /// Helper: convert input code from CLI (code or label, any case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "gasoline" | "gasolina" | "g" => Some(FuelType::Gasoline),
            "ethanol" | "etanol" | "e" => Some(FuelType::Ethanol),
            "cng" | "gnv" | "c" => Some(FuelType::Cng),
            _ => None,
        }
    }
}
