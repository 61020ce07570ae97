#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wl() -> Command {
    cargo_bin_cmd!("wagelog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_wagelog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
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

/// Initialize DB and load the January-2025 dataset used by many tests:
/// one worked day, one half day with overtime, one missed day, and an
/// advance against the half day.
pub fn init_db_with_data(db_path: &str) {
    wl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--db",
        db_path,
        "add",
        "2025-01-05",
        "--status",
        "worked",
        "--rate",
        "200",
    ])
    .assert()
    .success();

    wl().args([
        "--db",
        db_path,
        "add",
        "2025-01-06",
        "--status",
        "half-day",
        "--rate",
        "200",
        "--overtime",
        "50",
    ])
    .assert()
    .success();

    wl().args([
        "--db",
        db_path,
        "add",
        "2025-01-07",
        "--status",
        "missed",
        "--rate",
        "200",
    ])
    .assert()
    .success();

    wl().args(["--db", db_path, "advance", "2025-01-06", "100"])
        .assert()
        .success();
}
