//! Package assembly and the `fpm` invocation.
//!
//! The packager turns a format name into a [`PackageFormat`], resolves a fresh
//! descriptor from the catalog, builds the argument vector
//! (base args, `--iteration`, format args) and runs the packaging tool. The
//! tool's exit code is the result; a failing tool is not an error here.

pub mod args;
pub mod formats;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

use crate::error::{PackageError, PackageResult};
use crate::layout::{PathLayout, Target};
use crate::metadata::Catalog;
use crate::process::{exit_code, Cmd};

pub use args::{base_args, flag_value};
pub use formats::{format_args, FormatInputs};

/// Installer formats the packager can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageFormat {
    Deb,
    Rpm,
    Pacman,
    Osxpkg,
}

impl PackageFormat {
    pub const ALL: [PackageFormat; 4] = [Self::Deb, Self::Rpm, Self::Pacman, Self::Osxpkg];

    /// Name passed to `fpm -t`, also used as the file extension.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deb => "deb",
            Self::Rpm => "rpm",
            Self::Pacman => "pacman",
            Self::Osxpkg => "osxpkg",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    /// Whether the package installs a systemd unit and lifecycle hooks.
    pub fn has_service(&self) -> bool {
        !matches!(self, Self::Osxpkg)
    }
}

impl fmt::Display for PackageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageFormat {
    type Err = PackageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| PackageError::InvalidFormat(s.to_string()))
    }
}

/// A fully assembled packaging tool command.
#[derive(Debug, Clone, Serialize)]
pub struct FpmInvocation {
    pub format: PackageFormat,
    /// File name passed with `-p`
    pub output: String,
    pub program: String,
    pub args: Vec<String>,
}

impl FpmInvocation {
    /// Value following the first occurrence of `flag`.
    pub fn value(&self, flag: &str) -> Option<&str> {
        flag_value(&self.args, flag)
    }

    /// How many times `flag` appears.
    pub fn count(&self, flag: &str) -> usize {
        self.args.iter().filter(|a| *a == flag).count()
    }

    /// Run the tool and return its exit code unchanged.
    ///
    /// Only a failure to spawn is an error.
    pub fn run(&self) -> anyhow::Result<i32> {
        let status = Cmd::new(&self.program)
            .args(&self.args)
            .allow_fail()
            .run_interactive()?;
        Ok(exit_code(status))
    }
}

/// Space-joined rendering for logs. Never executed.
impl fmt::Display for FpmInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Builds one package for one target.
pub struct Packager {
    package: String,
    target: Target,
    layout: PathLayout,
    catalog: Catalog,
    program: String,
    version_override: Option<String>,
}

impl Packager {
    pub fn new(
        package: impl Into<String>,
        target: Target,
        layout: PathLayout,
        catalog: Catalog,
        program: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            target,
            layout,
            catalog,
            program: program.into(),
            version_override: None,
        }
    }

    /// Build with this version instead of the catalog's.
    pub fn with_version_override(mut self, version: Option<String>) -> Self {
        self.version_override = version;
        self
    }

    /// Assemble the invocation for a format name without running it.
    ///
    /// Unknown names fail before anything touches the filesystem. For deb,
    /// rpm and pacman the service unit is copied into the staging tree.
    pub fn plan(
        &self,
        format_name: &str,
        build_number: u32,
        distribution: &str,
    ) -> PackageResult<FpmInvocation> {
        let format: PackageFormat = format_name.parse()?;
        self.plan_format(format, build_number, distribution)
    }

    pub fn plan_format(
        &self,
        format: PackageFormat,
        build_number: u32,
        distribution: &str,
    ) -> PackageResult<FpmInvocation> {
        let mut descriptor = self.catalog.descriptor(&self.package)?;
        if let Some(version) = &self.version_override {
            descriptor = descriptor.with_version(version.clone());
        }

        let mut args = base_args(&descriptor, &self.layout, &self.target.arch);
        args.push("--iteration".to_string());
        args.push(build_number.to_string());

        let inputs = FormatInputs {
            descriptor: &descriptor,
            layout: &self.layout,
            arch: &self.target.arch,
            build_number,
            distribution,
        };
        let output = inputs.output_name(format);
        let args = format_args(format, args, &inputs)?;

        Ok(FpmInvocation {
            format,
            output,
            program: self.program.clone(),
            args,
        })
    }

    /// Build the package and return the packaging tool's exit code.
    pub fn package(
        &self,
        format_name: &str,
        build_number: u32,
        distribution: &str,
    ) -> anyhow::Result<i32> {
        info!("Building {} package", format_name);
        let invocation = self.plan(format_name, build_number, distribution)?;
        debug!("Packaging: {}", invocation);
        invocation.run()
    }
}
