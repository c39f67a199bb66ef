//! In-memory calculation store, with switchable failures for each operation.

use crate::db::store::CalculationStore;
use crate::errors::{AppError, AppResult};
use crate::models::calculation::{CalculationRecord, NewCalculation, RecordId};
use chrono::{DateTime, Utc};
use std::cmp::Reverse;

#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<(u64, CalculationRecord)>,
    next_seq: u64,
    pub fail_insert: bool,
    pub fail_query: bool,
    pub fail_delete: bool,
    /// Start failing queries once a delete has gone through.
    pub fail_query_after_delete: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert with an explicit creation time.
    pub fn insert_at(
        &mut self,
        calc: NewCalculation,
        created_at: DateTime<Utc>,
    ) -> AppResult<CalculationRecord> {
        if self.fail_insert {
            return Err(AppError::Save("memory store: insert disabled".into()));
        }
        let record = calc.into_record(RecordId::new(), created_at);
        self.next_seq += 1;
        self.rows.push((self.next_seq, record.clone()));
        Ok(record)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl CalculationStore for MemoryStore {
    fn insert(&mut self, calc: NewCalculation) -> AppResult<CalculationRecord> {
        self.insert_at(calc, Utc::now())
    }

    fn query(&self, owner: &str, limit: usize) -> AppResult<Vec<CalculationRecord>> {
        if self.fail_query {
            return Err(AppError::HistoryLoad("memory store: query disabled".into()));
        }
        let mut rows: Vec<&(u64, CalculationRecord)> =
            self.rows.iter().filter(|(_, r)| r.owner == owner).collect();

        // newest first, later insertions win ties
        rows.sort_by_key(|(seq, r)| Reverse((r.created_at, *seq)));

        Ok(rows
            .into_iter()
            .take(limit)
            .map(|(_, r)| r.clone())
            .collect())
    }

    fn delete_by_id(&mut self, owner: &str, id: &RecordId) -> AppResult<bool> {
        if self.fail_delete {
            return Err(AppError::Delete("memory store: delete disabled".into()));
        }
        let before = self.rows.len();
        self.rows.retain(|(_, r)| !(r.id == *id && r.owner == owner));
        let removed = self.rows.len() < before;
        if removed && self.fail_query_after_delete {
            self.fail_query = true;
        }
        Ok(removed)
    }
}
