//! Default repository root resolution.
//!
//! The validator is installed two levels below the repository root
//! (e.g. `<root>/bin/validate-docs`), so with no `--root` the root is the
//! executable's grandparent.

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

pub fn default_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Could not locate the running executable")?;
    root_from_executable(&exe)
}

pub fn root_from_executable(exe: &Path) -> Result<PathBuf> {
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("Executable path {} has no grandparent directory", exe.display()))
}

/// `--root` when given, otherwise the executable-relative default.
pub fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_root(),
    }
}
