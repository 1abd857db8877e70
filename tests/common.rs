#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sq() -> Command {
    cargo_bin_cmd!("summitq")
}

/// Create a unique config file path inside the system temp dir and remove
/// any existing file
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_summitq.yaml", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write an entity snapshot JSON into the temp dir and return its path
pub fn write_snapshot(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_snapshot.json", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write snapshot");
    p
}
