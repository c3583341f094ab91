#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Temp home for one binary run: a config dir plus a bin dir for fakes.
pub struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let root = TempDir::new().expect("failed to create temp dir");
        fs::create_dir_all(root.path().join("config")).unwrap();
        fs::create_dir_all(root.path().join("bin")).unwrap();
        Self { root }
    }

    pub fn config_dir(&self) -> PathBuf {
        self.root.path().join("config")
    }

    /// Write an executable `/bin/sh` script standing in for `gdbus`.
    pub fn fake_gdbus(&self, name: &str, body: &str) -> PathBuf {
        write_executable(&self.root.path().join("bin").join(name), body)
    }

    pub fn write_config(&self, json: &str) {
        fs::write(self.config_dir().join("config.json"), json).expect("failed to write config");
    }

    /// Run the binary against this sandbox with `GDBUS_PATH` set to `gdbus`.
    pub fn run(&self, gdbus: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_gnome-theme-watcher"))
            .arg("--config-dir")
            .arg(self.config_dir())
            .args(args)
            .env("GDBUS_PATH", gdbus)
            .env_remove("RUST_LOG")
            .env_remove("GNOME_THEME_WATCHER_LOG_LEVEL")
            .output()
            .expect("failed to run gnome-theme-watcher")
    }
}

fn write_executable(path: &Path, body: &str) -> PathBuf {
    fs::write(path, format!("#!/bin/sh\n{body}\n")).expect("failed to write fake gdbus");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("failed to chmod fake gdbus");
    path.to_path_buf()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
