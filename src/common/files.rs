//! File and tree copies into the staging area.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::PackageResult;

/// Copy a file, creating the destination's parent directories as needed.
///
/// Content is copied byte for byte and permissions follow the source.
pub fn copy_file_with_dirs(src: &Path, dst: &Path) -> PackageResult<u64> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(fs::copy(src, dst)?)
}

/// Recursively copy the contents of `src` into `dst`.
///
/// Symlinks are recreated rather than followed. Returns the number of regular
/// files copied.
pub fn copy_tree(src: &Path, dst: &Path) -> PackageResult<usize> {
    let mut copied = 0;
    fs::create_dir_all(dst)?;

    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target)?;
        } else if file_type.is_symlink() {
            let link = fs::read_link(entry.path())?;
            if target.symlink_metadata().is_ok() {
                fs::remove_file(&target)?;
            }
            std::os::unix::fs::symlink(link, &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}
