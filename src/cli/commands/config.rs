use crate::cli::parser::Commands;
use crate::config::{Config, check};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

fn read_config_file() -> AppResult<String> {
    let path = Config::config_file();
    if !path.exists() {
        return Err(AppError::Config(format!(
            "no configuration file at {} (run `carbonlog init`)",
            path.display()
        )));
    }
    fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)
}

fn edit(editor: &Option<String>) -> AppResult<()> {
    let path = Config::config_file();

    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(&path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
            return Ok(());
        }
        Ok(_) | Err(_) => warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            editor_to_use, default_editor
        )),
    }

    match Command::new(&default_editor).arg(&path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using fallback '{}'",
                default_editor
            ));
            Ok(())
        }
        Ok(_) | Err(_) => Err(AppError::Config(format!(
            "failed to edit configuration file using fallback '{}'",
            default_editor
        ))),
    }
}

/// Record a configuration change in the audit log of an existing database.
fn log_config_change(cfg: &Config, message: &str) {
    let db_path = cfg.database_path();
    if !Path::new(&db_path).exists() {
        return;
    }
    match DbPool::open(&db_path) {
        Ok(pool) => ttlog_quiet(&pool.conn, "config", "carbonlog.conf", message),
        Err(e) => warning(format!("Failed to write internal log: {}", e)),
    }
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check: check_config,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check_config {
            let missing = check::missing_fields(&read_config_file()?)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing fields: {}", missing.join(", ")));
                info("Run `carbonlog config --migrate` to add them with default values.");
            }
        }

        if *migrate {
            let (yaml, added) = check::complete(&read_config_file()?)?;
            if added.is_empty() {
                info("Configuration file already up to date.");
            } else {
                fs::write(Config::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
                success(format!("Added fields: {}", added.join(", ")));
                log_config_change(cfg, &format!("Added fields: {}", added.join(", ")));
            }
        }

        if *edit_config {
            edit(editor)?;
        }
    }

    Ok(())
}
