#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// carbonlog command isolated from the real configuration and session.
pub fn cbl(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("carbonlog");
    cmd.env("CARBONLOG_CONFIG_DIR", config_dir(name))
        .env_remove("CARBONLOG_USER");
    cmd
}

/// Per-test configuration directory inside the system temp dir.
pub fn config_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_carbonlog_conf", name));
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_carbonlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    fs::remove_dir_all(config_dir(name)).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB in test mode (no config file written)
pub fn init_db(name: &str, db_path: &str) {
    cbl(name)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Save one calculation for `user` with the given electricity figure only.
pub fn calc_electricity(name: &str, db_path: &str, user: &str, kwh: &str) {
    cbl(name)
        .args(["--db", db_path, "--user", user, "calc", "--electricity", kwh])
        .assert()
        .success();
}

/// Run `list` and return its stdout.
pub fn list_output(name: &str, db_path: &str, user: &str) -> String {
    let out = cbl(name)
        .args(["--db", db_path, "--user", user, "list"])
        .output()
        .expect("run list");
    assert!(out.status.success(), "list failed: {:?}", out);
    String::from_utf8_lossy(&out.stdout).to_string()
}

/// History rows of a `list` output (lines starting with the position).
pub fn history_rows(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| line.starts_with(|c: char| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}

/// Id column (last cell) of a history row.
pub fn row_id(row: &str) -> String {
    row.split_whitespace().last().expect("row has cells").to_string()
}
