use crate::db::pool::DbPool;
use crate::db::store::CalculationStore;
use crate::errors::{AppError, AppResult};
use crate::models::calculation::{CalculationRecord, NewCalculation, RecordId};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::{Result, Row, params};

/// Fixed-width UTC timestamp, so that text order matches time order.
pub fn format_created_at(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<CalculationRecord> {
    let id_str: String = row.get("id")?;
    let id = id_str
        .parse::<RecordId>()
        .map_err(|e| conversion_error(0, e))?;

    let created_str: String = row.get("created_at")?;
    let created_at = DateTime::parse_from_rfc3339(&created_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            conversion_error(
                7,
                AppError::Other(format!("Invalid created_at: {}", created_str)),
            )
        })?;

    Ok(CalculationRecord {
        id,
        owner: row.get("user_id")?,
        electricity_kwh: row.get("electricity_kwh")?,
        fuel_liters: row.get("fuel_liters")?,
        travel_km: row.get("travel_km")?,
        waste_kg: row.get("waste_kg")?,
        total_carbon_kg: row.get("total_carbon_kg")?,
        created_at,
    })
}

pub fn insert_calculation(
    pool: &DbPool,
    calc: NewCalculation,
    created_at: DateTime<Utc>,
) -> AppResult<CalculationRecord> {
    // stored with microsecond precision; the returned record must match the row
    let record = calc.into_record(RecordId::new(), created_at.trunc_subsecs(6));

    pool.conn.execute(
        "INSERT INTO calculations
            (id, user_id, electricity_kwh, fuel_liters, travel_km, waste_kg, total_carbon_kg, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            record.id.to_string(),
            record.owner,
            record.electricity_kwh,
            record.fuel_liters,
            record.travel_km,
            record.waste_kg,
            record.total_carbon_kg,
            format_created_at(&record.created_at),
        ],
    )?;

    Ok(record)
}

/// Newest calculations of `owner`. Rows sharing a timestamp come back in
/// reverse insertion order.
pub fn load_recent(pool: &DbPool, owner: &str, limit: usize) -> AppResult<Vec<CalculationRecord>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT * FROM calculations
         WHERE user_id = ?1
         ORDER BY created_at DESC, rowid DESC
         LIMIT ?2",
    )?;

    let rows = stmt.query_map(params![owner, limit as i64], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_calculation(pool: &DbPool, owner: &str, id: &RecordId) -> AppResult<bool> {
    let n = pool.conn.execute(
        "DELETE FROM calculations WHERE id = ?1 AND user_id = ?2",
        params![id.to_string(), owner],
    )?;
    Ok(n > 0)
}

impl CalculationStore for DbPool {
    fn insert(&mut self, calc: NewCalculation) -> AppResult<CalculationRecord> {
        insert_calculation(self, calc, Utc::now())
    }

    fn query(&self, owner: &str, limit: usize) -> AppResult<Vec<CalculationRecord>> {
        load_recent(self, owner, limit)
    }

    fn delete_by_id(&mut self, owner: &str, id: &RecordId) -> AppResult<bool> {
        delete_calculation(self, owner, id)
    }
}
