// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::CalculationExport;
use crate::models::calculation::CalculationRecord;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of a calculation list.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `records` to `file` in the given format.
    ///
    /// Returns the number of exported rows; nothing is written when the
    /// list is empty.
    pub fn export(
        records: &[CalculationRecord],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if path.is_dir() {
            return Err(AppError::Export(format!(
                "output path is a directory: {file}"
            )));
        }

        if records.is_empty() {
            warning("No calculations to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        let rows: Vec<CalculationExport> = records.iter().map(CalculationExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::calculation::{NewCalculation, RecordId};
    use chrono::{TimeZone, Utc};
    use std::fs;

    fn record(total: f64) -> CalculationRecord {
        NewCalculation {
            owner: "alice".into(),
            electricity_kwh: Some(250.0),
            fuel_liters: None,
            travel_km: None,
            waste_kg: Some(20.0),
            total_carbon_kg: total,
        }
        .into_record(
            RecordId::new(),
            Utc.with_ymd_and_hms(2025, 4, 2, 9, 30, 0).unwrap(),
        )
    }

    fn temp_path(name: &str) -> String {
        let p = std::env::temp_dir().join(format!("carbonlog_unit_{name}"));
        fs::remove_file(&p).ok();
        p.to_string_lossy().to_string()
    }

    #[test]
    fn csv_has_header_and_empty_cells_for_absent_figures() {
        let path = temp_path("export.csv");
        let n = ExportLogic::export(&[record(135.0)], ExportFormat::Csv, &path, true).unwrap();
        assert_eq!(n, 1);

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,created_at,electricity_kwh,fuel_liters,travel_km,waste_kg,total_carbon_kg"
        );
        let row = lines.next().unwrap();
        assert!(row.contains(",2025-04-02T09:30:00.000000Z,250.0,,,20.0,135.0"));
    }

    #[test]
    fn json_keeps_nulls() {
        let path = temp_path("export.json");
        ExportLogic::export(&[record(135.0)], ExportFormat::Json, &path, true).unwrap();

        let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(v[0]["fuel_liters"], serde_json::Value::Null);
        assert_eq!(v[0]["total_carbon_kg"], 135.0);
    }

    #[test]
    fn empty_list_writes_nothing() {
        let path = temp_path("empty.csv");
        assert_eq!(ExportLogic::export(&[], ExportFormat::Csv, &path, true).unwrap(), 0);
        assert!(!Path::new(&path).exists());
    }
}
