#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write an executable `/bin/sh` script standing in for `gdbus`.
pub fn fake_gdbus(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("gdbus");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("failed to write fake gdbus");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("failed to chmod fake gdbus");
    path
}

pub fn temp_dir() -> TempDir {
    TempDir::new().expect("failed to create temp dir")
}
