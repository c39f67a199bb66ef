// src/export/model.rs

use crate::models::calculation::CalculationRecord;
use crate::db::queries::format_created_at;
use serde::Serialize;

/// Flat row for CSV / JSON export of a calculation.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CalculationExport {
    pub id: String,
    pub created_at: String,
    pub electricity_kwh: Option<f64>,
    pub fuel_liters: Option<f64>,
    pub travel_km: Option<f64>,
    pub waste_kg: Option<f64>,
    pub total_carbon_kg: f64,
}

impl From<&CalculationRecord> for CalculationExport {
    fn from(r: &CalculationRecord) -> Self {
        Self {
            id: r.id.to_string(),
            created_at: format_created_at(&r.created_at),
            electricity_kwh: r.electricity_kwh,
            fuel_liters: r.fuel_liters,
            travel_km: r.travel_km,
            waste_kg: r.waste_kg,
            total_carbon_kg: r.total_carbon_kg,
        }
    }
}
