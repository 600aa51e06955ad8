//! Stage command - creates and populates the staging tree.

use anyhow::{Context, Result};
use tracing::info;

use stackpkg::config::Config;
use stackpkg::layout::Target;
use stackpkg::stage::Stager;
use stackpkg::timing::Timer;
use stackpkg::PACKAGE_NAME;

use super::layout_for;

/// Execute the stage command.
pub fn cmd_stage(config: &Config, target: &Target) -> Result<()> {
    let layout = layout_for(config, target);
    let timer = Timer::start("Stage");

    let stager = Stager::new(PACKAGE_NAME, target.clone(), layout);
    stager
        .stage()
        .with_context(|| format!("Staging {} for {} failed", PACKAGE_NAME, target.osnick))?;

    timer.finish();
    info!("Staged into {}", stager.layout().workdir.display());
    Ok(())
}
