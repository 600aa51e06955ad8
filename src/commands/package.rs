//! Package command - runs the packaging tool for one format.

use anyhow::{Context, Result};
use tracing::{info, warn};

use stackpkg::config::Config;
use stackpkg::layout::Target;
use stackpkg::metadata::Catalog;
use stackpkg::package::Packager;
use stackpkg::timing::Timer;
use stackpkg::PACKAGE_NAME;

use super::layout_for;

/// Options for one package build.
#[derive(Debug, Clone)]
pub struct PackageOptions {
    pub format: String,
    pub build_number: u32,
    pub distribution: String,
    pub version_override: Option<String>,
    /// Print the invocation as JSON instead of running it; the service unit
    /// is still installed
    pub dry_run: bool,
}

/// Execute the package command. Returns the packaging tool's exit code.
pub fn cmd_package(config: &Config, target: &Target, opts: &PackageOptions) -> Result<i32> {
    let catalog = Catalog::load(&config.metadata)
        .with_context(|| format!("Loading metadata from {}", config.metadata.display()))?;
    let packager = Packager::new(
        PACKAGE_NAME,
        target.clone(),
        layout_for(config, target),
        catalog,
        config.fpm.clone(),
    )
    .with_version_override(opts.version_override.clone());

    if opts.dry_run {
        let invocation = packager.plan(&opts.format, opts.build_number, &opts.distribution)?;
        println!("{}", serde_json::to_string_pretty(&invocation)?);
        return Ok(0);
    }

    let timer = Timer::start(&format!("Package {}", opts.format));
    let code = packager.package(&opts.format, opts.build_number, &opts.distribution)?;
    timer.finish();

    if code == 0 {
        info!("Package built");
    } else {
        warn!(code, "Packaging tool exited with failure");
    }
    Ok(code)
}
