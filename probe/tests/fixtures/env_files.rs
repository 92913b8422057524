//! Configuration file helpers

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub const TEST_KEY: &str = "abcd1234efgh5678";

/// Write `content` to `<tempdir>/.env`; keep the TempDir alive for the test
pub fn write_env_file(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, content).unwrap();
    (dir, path)
}

/// Env file holding the standard test credential
pub fn env_file_with_key() -> (TempDir, PathBuf) {
    write_env_file(&format!("# backend settings\nSERVER_PORT=8080\nGEMINI_API_KEY={TEST_KEY}\n"))
}
