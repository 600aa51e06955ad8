//! Staging tree layout.
//!
//! Every path the stager and packager touch is derived here from the package
//! name and the target platform, so two builds for the same target always agree
//! on where things live.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where the application is installed on the target system.
pub const INSTALL_DIR: &str = "/opt/redis-stack";

/// Target platform of a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Distribution nickname, e.g. `bionic`, `rhel8`, `monterey`
    pub osnick: String,
    /// Machine architecture, e.g. `x86_64`
    pub arch: String,
    /// OS family, e.g. `Linux`, `macos`
    pub osname: String,
}

impl Target {
    pub fn new(osnick: impl Into<String>, arch: impl Into<String>, osname: impl Into<String>) -> Self {
        Self {
            osnick: osnick.into(),
            arch: arch.into(),
            osname: osname.into(),
        }
    }
}

/// Fixed set of directories for one package build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathLayout {
    /// Pre-fetched third-party artifacts for this target
    pub external: PathBuf,
    /// Root handed to the packaging tool with `-C`
    pub workdir: PathBuf,
    /// `INSTALL_DIR` inside the workdir
    pub destdir: PathBuf,
    pub libdir: PathBuf,
    pub bindir: PathBuf,
    pub sharedir: PathBuf,
    /// systemd units inside the workdir
    pub svcdir: PathBuf,
    /// Lifecycle hooks (`package/`) and unit templates (`services/`)
    pub scriptdir: PathBuf,
}

impl PathLayout {
    pub fn new(build_root: &Path, script_root: &Path, package: &str, target: &Target) -> Self {
        let external = build_root.join("deps").join(format!(
            "{}-{}-{}-{}",
            package, target.osname, target.osnick, target.arch
        ));
        let workdir = build_root.join(format!("{}-{}-{}", package, target.osnick, target.arch));
        let destdir = workdir.join(INSTALL_DIR.trim_start_matches('/'));

        Self {
            libdir: destdir.join("lib"),
            bindir: destdir.join("bin"),
            sharedir: destdir.join("share"),
            svcdir: workdir.join("etc/systemd/system"),
            scriptdir: script_root.to_path_buf(),
            external,
            workdir,
            destdir,
        }
    }

    /// Directories created by the stager, in creation order.
    pub fn staging_dirs(&self) -> [&Path; 5] {
        [
            &self.external,
            &self.destdir,
            &self.libdir,
            &self.bindir,
            &self.sharedir,
        ]
    }

    /// Lifecycle hook script by file name.
    pub fn hook(&self, name: &str) -> PathBuf {
        self.scriptdir.join("package").join(name)
    }

    /// Service unit template by file name.
    pub fn service_template(&self, unit: &str) -> PathBuf {
        self.scriptdir.join("services").join(unit)
    }
}
