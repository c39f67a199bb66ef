//! Persistence capability used by the calculator and history logic.

use crate::errors::AppResult;
use crate::models::calculation::{CalculationRecord, NewCalculation, RecordId};

/// The three operations the application needs from a calculation store.
///
/// Every read and delete is scoped to an owner; records of other users are
/// never visible through this interface.
pub trait CalculationStore {
    /// Persist a new calculation, returning it with its assigned id and
    /// creation time.
    fn insert(&mut self, calc: NewCalculation) -> AppResult<CalculationRecord>;

    /// Most recent calculations of `owner`, newest first, at most `limit`.
    fn query(&self, owner: &str, limit: usize) -> AppResult<Vec<CalculationRecord>>;

    /// Delete one calculation of `owner`. `Ok(false)` when there is no such
    /// record for that owner.
    fn delete_by_id(&mut self, owner: &str, id: &RecordId) -> AppResult<bool>;
}
