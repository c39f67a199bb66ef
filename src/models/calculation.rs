use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identifier of a stored calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for RecordId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(RecordId)
            .map_err(|_| AppError::InvalidId(s.to_string()))
    }
}

/// Payload handed to the store on submission. The store assigns the id and
/// the creation timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCalculation {
    pub owner: String,
    pub electricity_kwh: Option<f64>,
    pub fuel_liters: Option<f64>,
    pub travel_km: Option<f64>,
    pub waste_kg: Option<f64>,
    pub total_carbon_kg: f64,
}

impl NewCalculation {
    pub fn into_record(self, id: RecordId, created_at: DateTime<Utc>) -> CalculationRecord {
        CalculationRecord {
            id,
            owner: self.owner,
            electricity_kwh: self.electricity_kwh,
            fuel_liters: self.fuel_liters,
            travel_km: self.travel_km,
            waste_kg: self.waste_kg,
            total_carbon_kg: self.total_carbon_kg,
            created_at,
        }
    }
}

/// A persisted calculation. Never edited once stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationRecord {
    pub id: RecordId,
    pub owner: String,
    pub electricity_kwh: Option<f64>,
    pub fuel_liters: Option<f64>,
    pub travel_km: Option<f64>,
    pub waste_kg: Option<f64>,
    pub total_carbon_kg: f64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_roundtrips_through_text() {
        let id = RecordId::new();
        let parsed: RecordId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn record_id_rejects_garbage() {
        let err = "not-an-id".parse::<RecordId>().unwrap_err();
        assert!(matches!(err, AppError::InvalidId(s) if s == "not-an-id"));
    }
}
