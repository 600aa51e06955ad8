//! Preflight checks for a package build.
//!
//! Validates the packaging tool and every input file before staging starts.
//! Run with `stackpkg preflight` to check everything is ready.

mod host_tools;
mod inputs;
mod types;

use anyhow::{bail, Result};
use tracing::info;

use crate::config::Config;
use crate::layout::PathLayout;
use crate::package::PackageFormat;

pub use types::{CheckResult, CheckStatus, PreflightReport};

/// Run all preflight checks.
///
/// With a format given, hook and unit checks are skipped for formats that do
/// not install a service.
pub fn run_preflight(
    config: &Config,
    package: &str,
    layout: &PathLayout,
    format: Option<PackageFormat>,
) -> PreflightReport {
    let mut checks = Vec::new();

    info!("Checking packaging tool");
    checks.push(host_tools::check_packaging_tool(&config.fpm));

    info!("Checking package inputs");
    checks.push(inputs::check_metadata(&config.metadata, package));
    if format.map_or(true, |f| f.has_service()) {
        checks.extend(inputs::check_hooks(layout));
        checks.extend(inputs::check_service_units(layout));
    }
    checks.extend(inputs::check_artifacts(layout));

    PreflightReport { checks }
}

/// Run preflight and bail if any checks fail.
pub fn run_preflight_or_fail(
    config: &Config,
    package: &str,
    layout: &PathLayout,
    format: Option<PackageFormat>,
) -> Result<()> {
    let report = run_preflight(config, package, layout, format);
    report.print();

    if !report.all_passed() {
        bail!(
            "Preflight failed: {} check(s) failed. Fix the issues above before packaging.",
            report.fail_count()
        );
    }

    println!("All preflight checks passed!\n");
    Ok(())
}
