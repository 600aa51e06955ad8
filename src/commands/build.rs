//! Build command - stages, then packages.

use anyhow::Result;
use tracing::info;

use stackpkg::config::Config;
use stackpkg::layout::Target;
use stackpkg::timing::Timer;

use super::package::PackageOptions;
use super::{cmd_package, cmd_stage};

/// Execute the build command. Returns the packaging tool's exit code.
pub fn cmd_build(config: &Config, target: &Target, opts: &PackageOptions) -> Result<i32> {
    info!(
        format = %opts.format,
        osnick = %target.osnick,
        arch = %target.arch,
        "=== Full package build ==="
    );
    let timer = Timer::start("Full build");

    cmd_stage(config, target)?;
    let code = cmd_package(config, target, opts)?;

    timer.finish();
    Ok(code)
}
