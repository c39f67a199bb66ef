use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryManager;
use crate::core::session::Session;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::store::CalculationStore;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};

/// Export the owner's current history list. A failed fetch is an error:
/// nothing is written rather than an empty file.
fn export_history<S>(
    store: &S,
    owner: &str,
    format: ExportFormat,
    file: &str,
    force: bool,
) -> AppResult<usize>
where
    S: CalculationStore + ?Sized,
{
    let mut history = HistoryManager::new(owner);
    let records = history.load(store)?;
    ExportLogic::export(records, format, file, force)
}

pub fn handle(cmd: &Commands, cfg: &Config, session: Option<&Session>) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let session = session.ok_or(AppError::NoSession)?;
        let pool = DbPool::open(&cfg.database_path())?;

        let n = export_history(&pool, session.user_id(), *format, file, *force)?;

        if n > 0 {
            ttlog_quiet(
                &pool.conn,
                "export",
                session.user_id(),
                &format!("Exported {} calculations as {} to {}", n, format.as_str(), file),
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryStore;
    use crate::models::calculation::NewCalculation;
    use std::env;
    use std::fs;

    fn out_path(name: &str) -> String {
        let path = env::temp_dir().join(format!("{}_carbonlog_export.csv", name));
        fs::remove_file(&path).ok();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn failed_fetch_writes_nothing() {
        let mut store = MemoryStore::new();
        store
            .insert(NewCalculation {
                owner: "alice".into(),
                electricity_kwh: Some(10.0),
                fuel_liters: None,
                travel_km: None,
                waste_kg: None,
                total_carbon_kg: 5.0,
            })
            .unwrap();
        store.fail_query = true;

        let path = out_path("export_fetch_fails");
        let res = export_history(&store, "alice", ExportFormat::Csv, &path, true);

        assert!(matches!(res, Err(AppError::HistoryLoad(_))));
        assert!(!std::path::Path::new(&path).exists());
    }

    #[test]
    fn exports_only_the_owners_rows() {
        let mut store = MemoryStore::new();
        for owner in ["alice", "bob"] {
            store
                .insert(NewCalculation {
                    owner: owner.into(),
                    electricity_kwh: None,
                    fuel_liters: Some(1.0),
                    travel_km: None,
                    waste_kg: None,
                    total_carbon_kg: 2.3,
                })
                .unwrap();
        }

        let path = out_path("export_owner_rows");
        let n = export_history(&store, "alice", ExportFormat::Csv, &path, true).unwrap();
        assert_eq!(n, 1);
        fs::remove_file(&path).ok();
    }
}
