//! Configuration management for stackpkg.
//!
//! Reads configuration from .env file and environment variables.
//! Environment variables take precedence over .env file.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default packaging tool.
pub const DEFAULT_FPM: &str = "fpm";

/// Stackpkg configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the staging trees (default: build)
    pub build_root: PathBuf,
    /// Directory holding `package/` hooks and `services/` units (default: etc/scripts)
    pub script_root: PathBuf,
    /// Package metadata catalog (default: etc/packages.toml)
    pub metadata: PathBuf,
    /// Packaging tool to invoke
    pub fpm: String,
}

impl Config {
    /// Load configuration from .env file and environment.
    pub fn load(base_dir: &Path) -> Self {
        let mut env_vars = HashMap::new();

        let env_path = base_dir.join(".env");
        if env_path.exists() {
            if let Ok(iter) = dotenvy::from_path_iter(&env_path) {
                for (key, value) in iter.flatten() {
                    env_vars.insert(key, value);
                }
            }
        }

        // Environment variables override .env file
        for (key, value) in std::env::vars() {
            env_vars.insert(key, value);
        }

        Self::from_vars(base_dir, &env_vars)
    }

    /// Build a config from an explicit variable map, filling in defaults.
    pub fn from_vars(base_dir: &Path, vars: &HashMap<String, String>) -> Self {
        let path_var = |key: &str, default: &str| {
            vars.get(key)
                .map(|s| {
                    let path = PathBuf::from(s);
                    if path.is_absolute() {
                        path
                    } else {
                        base_dir.join(path)
                    }
                })
                .unwrap_or_else(|| base_dir.join(default))
        };

        let build_root = path_var("STACKPKG_BUILD_ROOT", "build");
        let script_root = path_var("STACKPKG_SCRIPT_ROOT", "etc/scripts");
        let metadata = path_var("STACKPKG_METADATA", "etc/packages.toml");

        let fpm = vars
            .get("STACKPKG_FPM")
            .cloned()
            .unwrap_or_else(|| DEFAULT_FPM.to_string());

        Self {
            build_root,
            script_root,
            metadata,
            fpm,
        }
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  STACKPKG_BUILD_ROOT: {}", self.build_root.display());
        println!("  STACKPKG_SCRIPT_ROOT: {}", self.script_root.display());
        println!("  STACKPKG_METADATA: {}", self.metadata.display());
        println!("  STACKPKG_FPM: {}", self.fpm);
        if self.metadata.is_file() {
            println!("  Metadata: FOUND");
        } else {
            println!("  Metadata: NOT FOUND");
        }
    }
}
