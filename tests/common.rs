#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sd() -> Command {
    cargo_bin_cmd!("studydesk")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_studydesk.sqlite", name));
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

/// Initialize a fresh DB in test mode (no config file written)
pub fn init_db(db_path: &str) {
    sd().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize a fresh DB and record an identity
pub fn init_signed_in(db_path: &str) {
    init_db(db_path);
    sd().args([
        "--db",
        db_path,
        "signin",
        "--name",
        "Ada",
        "--school",
        "Analytical College",
        "--email",
        "ada@example.com",
    ])
    .assert()
    .success();
}

/// Date `offset` days from today, as YYYY-MM-DD
pub fn day_offset(offset: i64) -> String {
    (chrono::Local::now().date_naive() + chrono::Duration::days(offset))
        .format("%Y-%m-%d")
        .to_string()
}

/// Read one raw value from the kv table of a test DB
pub fn stored(db_path: &str, key: &str) -> Option<String> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row("SELECT value FROM kv WHERE key = ?1", [key], |r| r.get(0))
        .ok()
}

/// Ids of a stored JSON collection, in stored order
pub fn stored_ids(db_path: &str, key: &str) -> Vec<String> {
    let raw = stored(db_path, key).unwrap_or_else(|| "[]".to_string());
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|i| i["id"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
