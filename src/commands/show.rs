//! Show command - displays information.

use anyhow::Result;

use stackpkg::config::Config;
use stackpkg::layout::Target;

use super::layout_for;

/// Show target for the show command.
pub enum ShowTarget {
    /// Show configuration
    Config,
    /// Show the staging layout for a target
    Layout(Target),
}

/// Execute the show command.
pub fn cmd_show(config: &Config, what: ShowTarget) -> Result<()> {
    match what {
        ShowTarget::Config => config.print(),
        ShowTarget::Layout(target) => {
            let layout = layout_for(config, &target);
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
    }
    Ok(())
}
