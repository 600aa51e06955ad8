//! Stackpkg library exports.
//!
//! Staging and packaging for the RedisInsight web bundle, exposed for the CLI
//! and for integration tests.

pub mod common;
pub mod component;
pub mod config;
pub mod error;
pub mod layout;
pub mod metadata;
pub mod package;
pub mod preflight;
pub mod process;
pub mod stage;
pub mod timing;

pub use error::{PackageError, PackageResult};

/// Package built by default.
pub const PACKAGE_NAME: &str = "redisinsight-web";
