#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn et() -> Command {
    cargo_bin_cmd!("efforttrack")
}

/// Create a unique configuration directory inside the system temp dir and
/// remove any leftover state from a previous run
pub fn setup_conf_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_efforttrack", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a workspace pinned to the week of 2025-09-08 .. 2025-09-14
pub fn init_week(dir: &str) {
    et().args(["--conf", dir, "init"]).assert().success();

    et().args([
        "--conf",
        dir,
        "mode",
        "--set",
        "weekly",
        "--date",
        "2025-09-10",
    ])
    .assert()
    .success();
}
