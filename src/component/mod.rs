//! Component preparers that populate the staging tree.
//!
//! Each preparer owns one subtree of the layout. The stager creates the
//! directories and then hands every registered preparer the same context, in
//! registration order:
//!
//! ```text
//! Stager                          Preparers
//! ──────                          ─────────
//! mkdir external, destdir, ...    NodeRuntime   → bindir, libdir
//! for p in preparers {            InsightAssets → sharedir/redisinsight
//!     p.prepare(&ctx)?;
//! }
//! ```

pub mod insight;
pub mod nodejs;

pub use insight::InsightAssets;
pub use nodejs::NodeRuntime;

use crate::error::PackageResult;
use crate::layout::{PathLayout, Target};

/// Everything a preparer needs to know about the build.
#[derive(Debug, Clone)]
pub struct PrepareContext<'a> {
    pub package: &'a str,
    pub target: &'a Target,
    pub layout: &'a PathLayout,
}

/// Anything that can populate part of the staging tree.
pub trait Preparer {
    /// Name for logging.
    fn name(&self) -> &str;
    /// Populate the staging tree. Errors abort the stage.
    fn prepare(&self, ctx: &PrepareContext<'_>) -> PackageResult<()>;
}

/// Preparers for a web bundle package, in the order they run.
pub fn default_preparers() -> Vec<Box<dyn Preparer>> {
    vec![Box::new(NodeRuntime), Box::new(InsightAssets)]
}
