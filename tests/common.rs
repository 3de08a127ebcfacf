#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rt() -> Command {
    cargo_bin_cmd!("rtally")
}

/// Create a unique test store path inside the system temp dir and remove any
/// existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtally.json", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a store and create a couple of groups useful for many tests
pub fn init_store_with_groups(store_path: &str) {
    rt().args(["--store", store_path, "--test", "init"])
        .assert()
        .success();

    rt().args(["--store", store_path, "add", "Dishes"])
        .assert()
        .success();

    rt().args(["--store", store_path, "add", "Laundry"])
        .assert()
        .success();
}
