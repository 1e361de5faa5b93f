#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Command for the binary, with its config directory moved under the
/// system temp dir so tests never touch the real home.
pub fn cfy() -> Command {
    let mut cmd = cargo_bin_cmd!("connectify");
    cmd.env("CONNECTIFY_HOME", test_home());
    cmd.env_remove("CONNECTIFY_DB");
    cmd
}

pub fn test_home() -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push("connectify_test_home");
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_connectify.sqlite", name));
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

/// Initialize the DB and add two connections: `ann` (Monthly, last seen
/// on 2024-01-10, so overdue) and `bob` (Quarterly, never checked in).
pub fn init_db_with_data(db_path: &str) {
    cfy()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    cfy()
        .args([
            "--db",
            db_path,
            "add",
            "Ann",
            "--id",
            "ann",
            "--freq",
            "Monthly",
            "--last",
            "2024-01-10",
            "--birthday",
            "1990-04-02",
        ])
        .assert()
        .success();

    cfy()
        .args([
            "--db", db_path, "add", "Bob", "--id", "bob", "--freq", "quarterly",
        ])
        .assert()
        .success();
}
