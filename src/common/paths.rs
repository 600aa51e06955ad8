//! Utilities for directory creation with fixed permissions.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use crate::error::PackageResult;

/// Owner rwx, group and other r-x.
pub const DIR_MODE: u32 = 0o755;

/// Ensure a directory exists with the given mode.
///
/// Missing parents are created as well. An existing directory is not an
/// error; its mode is reset so repeated calls leave the same permissions.
pub fn ensure_dir_mode(path: &Path, mode: u32) -> PackageResult<()> {
    fs::create_dir_all(path)?;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
    Ok(())
}
