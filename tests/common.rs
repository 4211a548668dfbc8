#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use healthsurvey::db::SurveyStore;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hs() -> Command {
    cargo_bin_cmd!("healthsurvey")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_healthsurvey.data", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh store on a fresh file
pub fn fresh_store(name: &str) -> SurveyStore {
    let db_path = setup_test_db(name);
    SurveyStore::open(&db_path).expect("open store")
}

/// Initialize DB through the CLI and add two employees: Alice (1), Bob (2)
pub fn init_db_with_employees(db_path: &str) {
    hs().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for name in ["Alice", "Bob"] {
        hs().args(["--db", db_path, "employee", "add", name])
            .assert()
            .success();
    }
}
