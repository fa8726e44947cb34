#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rideledger::core::ledger::Ledger;
use rideledger::db::kv::SqliteKv;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rl() -> Command {
    cargo_bin_cmd!("rideledger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rideledger.sqlite", name));
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

pub fn init_db(db_path: &str) {
    rl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add two back-filled records in different months
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    rl().args([
        "--db", db_path, "add", "--revenue", "250", "--fuel", "58,90", "--km", "120",
        "--costs", "15", "--date", "2025-09-01",
    ])
    .assert()
    .success();

    rl().args([
        "--db",
        db_path,
        "add",
        "--revenue",
        "310.5",
        "--fuel",
        "39.9",
        "--fuel-type",
        "ethanol",
        "--date",
        "2025-10-05",
    ])
    .assert()
    .success();
}

/// Ids as stored, newest first
pub fn stored_ids(db_path: &str) -> Vec<String> {
    let kv = SqliteKv::open(db_path).expect("open db");
    let ledger = Ledger::load(kv).expect("load ledger");
    ledger.list().iter().map(|r| r.id.clone()).collect()
}
