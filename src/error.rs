//! Error types for staging and packaging.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for packaging operations
pub type PackageResult<T> = std::result::Result<T, PackageError>;

/// Errors raised while resolving metadata, staging, or assembling a package
#[derive(Error, Debug)]
pub enum PackageError {
    /// Requested package format is not one of deb, rpm, pacman, osxpkg
    #[error("{0} is an invalid package type")]
    InvalidFormat(String),

    /// Metadata key absent from the catalog
    #[error("metadata key not found: {0}")]
    MissingKey(String),

    /// Metadata key present but holding the wrong kind of value
    #[error("metadata key '{key}' is not a {expected}")]
    InvalidValue { key: String, expected: &'static str },

    /// A component preparer failed to populate the staging tree
    #[error("preparer '{name}' failed: {source}")]
    Preparer {
        name: String,
        #[source]
        source: Box<PackageError>,
    },

    /// An input file or directory the workflow depends on does not exist
    #[error("{what} not found at {}", path.display())]
    MissingSource { what: &'static str, path: PathBuf },

    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Metadata file could not be parsed
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Directory walk failed while copying a tree
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}
