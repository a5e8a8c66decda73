//! Test support utilities for precompiler behaviour tests.
//!
//! This module provides common helper functions used across multiple test
//! files: invoking the compiled binary, writing the suffix list fixture,
//! and staging stub minimizer scripts.

use std::path::{Path, PathBuf};
use std::process::Command;

/// A small suffix list with one rule of each kind, in both sections.
pub const SAMPLE_LIST: &str = concat!(
    "// ===BEGIN ICANN DOMAINS===\n",
    "com\n",
    "*.ck\n",
    "!www.ck\n",
    "// ===END ICANN DOMAINS===\n",
    "// ===BEGIN PRIVATE DOMAINS===\n",
    "blogspot.com\n",
    "// ===END PRIVATE DOMAINS===\n",
);

/// The intermediate records the sample list stages for the minimizer.
pub const SAMPLE_RECORDS: &str = "www.ck, 5\nblogspot.com, 8\nck, 6\ncom, 4\n";

/// Creates a command for the compiled `psl2rs` binary.
pub fn psl2rs() -> Command {
    Command::new(env!("CARGO_BIN_EXE_psl2rs"))
}

/// Writes the sample list into `dir` and returns its path.
pub fn write_sample_list(dir: &Path) -> PathBuf {
    let path = dir.join("public_suffix_list.dat");
    std::fs::write(&path, SAMPLE_LIST).expect("failed to write sample list");
    path
}

/// Writes an executable shell script into `dir` and returns its path.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, body).expect("failed to write script");
    let mut permissions = std::fs::metadata(&path)
        .expect("failed to stat script")
        .permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(&path, permissions).expect("failed to make script executable");
    path
}
