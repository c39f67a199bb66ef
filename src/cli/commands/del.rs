use crate::cli::commands::list::{load_history, print_history, report_load_failure};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryManager;
use crate::core::session::Session;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::store::CalculationStore;
use crate::errors::{AppError, AppResult};
use crate::models::calculation::RecordId;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Delete through the history manager (by position when one was given).
/// `Ok(Some(_))` means the record is gone but the refreshed list could not
/// be loaded.
fn apply_delete<S>(
    history: &mut HistoryManager,
    store: &mut S,
    target: &RecordId,
    pos: Option<usize>,
) -> AppResult<Option<AppError>>
where
    S: CalculationStore + ?Sized,
{
    let outcome = match pos {
        Some(p) => history.delete_at(store, p).map(|_| ()),
        None => history.delete(store, target),
    };

    match outcome {
        Ok(()) => Ok(None),
        Err(e @ AppError::HistoryLoad(_)) => Ok(Some(e)),
        Err(e) => Err(e),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, session: Option<&Session>) -> AppResult<()> {
    if let Commands::Del { id, pos, yes } = cmd {
        let session = session.ok_or(AppError::NoSession)?;
        let mut pool = DbPool::open(&cfg.database_path())?;

        //
        // Resolve the target (the list is needed for --pos)
        //
        let mut history = load_history(&pool, session);

        let target: RecordId = match (id, pos) {
            (Some(raw), _) => raw.parse()?,
            (None, Some(p)) => history.id_at(*p)?,
            (None, None) => return Err(AppError::Other("missing calculation id".into())),
        };

        //
        // Confirmation prompt
        //
        if !*yes
            && !ask_confirmation(&format!(
                "Delete calculation {}? This action is irreversible.",
                target
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion, then show the refreshed list
        //
        let refresh_failure = apply_delete(&mut history, &mut pool, &target, *pos)?;

        success("Calculation removed successfully.");
        ttlog_quiet(
            &pool.conn,
            "del",
            session.user_id(),
            &format!("Deleted calculation {}", target),
        );

        if let Some(e) = refresh_failure {
            report_load_failure(&e);
            return Ok(());
        }

        print_history(&history, cfg);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryStore;
    use crate::models::calculation::NewCalculation;

    fn calc(owner: &str, total: f64) -> NewCalculation {
        NewCalculation {
            owner: owner.to_string(),
            electricity_kwh: Some(total * 2.0),
            fuel_liters: None,
            travel_km: None,
            waste_kg: None,
            total_carbon_kg: total,
        }
    }

    #[test]
    fn delete_by_position_goes_through_the_list() {
        let mut store = MemoryStore::new();
        store.insert(calc("alice", 1.0)).unwrap();
        store.insert(calc("alice", 2.0)).unwrap();

        let mut history = HistoryManager::new("alice");
        history.load(&store).unwrap();
        let target = history.id_at(1).unwrap();

        let failure = apply_delete(&mut history, &mut store, &target, Some(1)).unwrap();
        assert!(failure.is_none());
        assert_eq!(store.len(), 1);
        assert!(history.records().iter().all(|r| r.id != target));
    }

    #[test]
    fn refresh_failure_still_counts_as_deleted() {
        let mut store = MemoryStore::new();
        let saved = store.insert(calc("alice", 1.0)).unwrap();
        store.fail_query_after_delete = true;

        let mut history = HistoryManager::new("alice");
        history.load(&store).unwrap();

        let failure = apply_delete(&mut history, &mut store, &saved.id, None).unwrap();
        assert!(matches!(failure, Some(AppError::HistoryLoad(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn failed_delete_is_an_error() {
        let mut store = MemoryStore::new();
        let saved = store.insert(calc("alice", 1.0)).unwrap();
        store.fail_delete = true;

        let mut history = HistoryManager::new("alice");
        history.load(&store).unwrap();

        assert!(matches!(
            apply_delete(&mut history, &mut store, &saved.id, None),
            Err(AppError::Delete(_))
        ));
        assert_eq!(store.len(), 1);
    }
}
