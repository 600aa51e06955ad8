//! Shared filesystem utilities across stackpkg modules.

pub mod files;
pub mod paths;

pub use files::{copy_file_with_dirs, copy_tree};
pub use paths::{ensure_dir_mode, DIR_MODE};
