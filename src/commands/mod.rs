//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `stage` - Create and populate the staging tree
//! - `package` - Run the packaging tool for one format
//! - `build` - Stage, then package
//! - `preflight` - Run preflight checks
//! - `show` - Display configuration and layout

pub mod build;
pub mod package;
mod preflight;
pub mod show;
mod stage;

pub use build::cmd_build;
pub use package::cmd_package;
pub use preflight::cmd_preflight;
pub use show::cmd_show;
pub use stage::cmd_stage;

use stackpkg::config::Config;
use stackpkg::layout::{PathLayout, Target};
use stackpkg::PACKAGE_NAME;

/// Layout of the default package for `target` under the configured roots.
fn layout_for(config: &Config, target: &Target) -> PathLayout {
    PathLayout::new(&config.build_root, &config.script_root, PACKAGE_NAME, target)
}
