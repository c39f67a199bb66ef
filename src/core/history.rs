//! Bounded, newest-first view of a user's past calculations.

use crate::db::store::CalculationStore;
use crate::errors::{AppError, AppResult};
use crate::models::calculation::{CalculationRecord, RecordId};

/// Number of calculations kept in the history view.
pub const HISTORY_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    Loading,
    Loaded,
    Empty,
}

#[derive(Debug)]
pub struct HistoryManager {
    owner: String,
    state: HistoryState,
    records: Vec<CalculationRecord>,
}

fn load_failure(e: AppError) -> AppError {
    match e {
        AppError::HistoryLoad(_) => e,
        other => AppError::HistoryLoad(other.to_string()),
    }
}

fn delete_failure(e: AppError) -> AppError {
    match e {
        AppError::Delete(_) => e,
        other => AppError::Delete(other.to_string()),
    }
}

impl HistoryManager {
    /// A manager that has not fetched anything yet.
    pub fn new<S: Into<String>>(owner: S) -> Self {
        Self {
            owner: owner.into(),
            state: HistoryState::Loading,
            records: Vec::new(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn state(&self) -> HistoryState {
        self.state
    }

    pub fn records(&self) -> &[CalculationRecord] {
        &self.records
    }

    fn settle(&mut self) {
        self.state = if self.records.is_empty() {
            HistoryState::Empty
        } else {
            HistoryState::Loaded
        };
    }

    /// Re-fetch the newest calculations of the current owner.
    ///
    /// On failure the previous list is kept and the error is returned.
    pub fn load<S>(&mut self, store: &S) -> AppResult<&[CalculationRecord]>
    where
        S: CalculationStore + ?Sized,
    {
        self.state = HistoryState::Loading;

        match store.query(&self.owner, HISTORY_LIMIT) {
            Ok(mut rows) => {
                rows.truncate(HISTORY_LIMIT);
                self.records = rows;
                self.settle();
                Ok(&self.records)
            }
            Err(e) => {
                self.settle();
                Err(load_failure(e))
            }
        }
    }

    /// Switch to another owner and reload. The previous owner's list is
    /// dropped even if the reload fails.
    pub fn set_owner<S>(&mut self, store: &S, owner: &str) -> AppResult<&[CalculationRecord]>
    where
        S: CalculationStore + ?Sized,
    {
        if self.owner != owner {
            self.owner = owner.to_string();
            self.records.clear();
        }
        self.load(store)
    }

    /// Delete one calculation, then reload from the store.
    ///
    /// The list is left untouched when the store refuses the delete.
    pub fn delete<S>(&mut self, store: &mut S, id: &RecordId) -> AppResult<()>
    where
        S: CalculationStore + ?Sized,
    {
        let removed = store
            .delete_by_id(&self.owner, id)
            .map_err(delete_failure)?;

        if !removed {
            return Err(AppError::Delete(format!(
                "no calculation {} for {}",
                id, self.owner
            )));
        }

        self.load(&*store)?;
        Ok(())
    }

    /// Id of the calculation shown at `position` (1-based) in the list.
    pub fn id_at(&self, position: usize) -> AppResult<RecordId> {
        position
            .checked_sub(1)
            .and_then(|i| self.records.get(i))
            .map(|r| r.id)
            .ok_or(AppError::InvalidPosition(position))
    }

    /// Delete the calculation shown at `position` (1-based) in the list.
    pub fn delete_at<S>(&mut self, store: &mut S, position: usize) -> AppResult<RecordId>
    where
        S: CalculationStore + ?Sized,
    {
        let id = self.id_at(position)?;
        self.delete(store, &id)?;
        Ok(id)
    }
}
