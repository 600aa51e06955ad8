//! Preflight command - runs preflight checks.

use anyhow::Result;

use stackpkg::config::Config;
use stackpkg::layout::Target;
use stackpkg::package::PackageFormat;
use stackpkg::{preflight, PACKAGE_NAME};

use super::layout_for;

/// Execute the preflight command.
pub fn cmd_preflight(
    config: &Config,
    target: &Target,
    format: Option<&str>,
    strict: bool,
) -> Result<()> {
    let format = format.map(str::parse::<PackageFormat>).transpose()?;
    let layout = layout_for(config, target);

    if strict {
        preflight::run_preflight_or_fail(config, PACKAGE_NAME, &layout, format)?;
    } else {
        let report = preflight::run_preflight(config, PACKAGE_NAME, &layout, format);
        report.print();
        if !report.all_passed() {
            println!("Some checks failed. Use --strict to fail the build.");
        }
    }
    Ok(())
}
