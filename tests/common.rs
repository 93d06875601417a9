#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary under test, with HOME pointed at a private temp dir so a
/// developer's real ~/.worklog configuration never leaks into a test.
pub fn wl() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("worklog_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("worklog");
    cmd.env("HOME", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklog.sqlite", name));
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

pub fn add(db_path: &str, date: &str, project: &str, minutes: &str) {
    wl()
        .args([
            "--db", db_path, "add", "--date", date, "--project", project, "--minutes", minutes,
        ])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    wl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    add(db_path, "2026-01-01", "Thesis", "30");
    add(db_path, "2026-01-01", "Thesis", "15");
    add(db_path, "2026-01-02", "Code", "45");
    add(db_path, "2026-01-05", "Reading", "20");
}
