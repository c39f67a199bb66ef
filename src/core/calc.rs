use crate::core::estimator::{self, Breakdown};
use crate::core::session::Session;
use crate::db::store::CalculationStore;
use crate::errors::AppError;
use crate::models::calculation::{CalculationRecord, NewCalculation};
use crate::models::usage::UsageInput;

/// What happened to the computed result on the store side.
#[derive(Debug)]
pub enum SaveOutcome {
    Saved(CalculationRecord),
    /// No session: the result is only shown.
    Skipped,
    Failed(AppError),
}

#[derive(Debug)]
pub struct Submission {
    pub breakdown: Breakdown,
    pub saved: SaveOutcome,
}

impl Submission {
    pub fn total_kg(&self) -> f64 {
        self.breakdown.total_kg
    }
}

/// High-level logic for the `calc` command.
pub struct CalcLogic;

impl CalcLogic {
    /// Insert payload: figures the user left out (or that are unusable) stay
    /// absent, the total is the estimate computed from the same input.
    pub fn new_calculation(owner: &str, usage: &UsageInput, total_kg: f64) -> NewCalculation {
        NewCalculation {
            owner: owner.to_string(),
            electricity_kwh: usage.electricity_kwh.value_for_storage(),
            fuel_liters: usage.fuel_liters.value_for_storage(),
            travel_km: usage.travel_km.value_for_storage(),
            waste_kg: usage.waste_kg.value_for_storage(),
            total_carbon_kg: total_kg,
        }
    }

    /// Estimate the footprint and, when there is a session, store it.
    ///
    /// The estimate is always returned; a store failure only changes the
    /// save outcome.
    pub fn submit<S>(store: &mut S, session: Option<&Session>, usage: &UsageInput) -> Submission
    where
        S: CalculationStore + ?Sized,
    {
        let breakdown = estimator::breakdown(usage);

        let saved = match session {
            None => SaveOutcome::Skipped,
            Some(s) => {
                let calc = Self::new_calculation(s.user_id(), usage, breakdown.total_kg);
                match store.insert(calc) {
                    Ok(record) => SaveOutcome::Saved(record),
                    Err(AppError::Save(d)) => SaveOutcome::Failed(AppError::Save(d)),
                    Err(e) => SaveOutcome::Failed(AppError::Save(e.to_string())),
                }
            }
        };

        Submission { breakdown, saved }
    }
}
