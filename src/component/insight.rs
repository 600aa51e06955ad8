//! RedisInsight web bundle preparer.

use tracing::{debug, info};

use super::{PrepareContext, Preparer};
use crate::common::copy_tree;
use crate::error::{PackageError, PackageResult};

/// Directory under the external root holding the built application.
pub const BUNDLE_SOURCE_DIR: &str = "redisinsight";

/// Stages the application assets into `<sharedir>/redisinsight`.
pub struct InsightAssets;

impl Preparer for InsightAssets {
    fn name(&self) -> &str {
        "redisinsight"
    }

    fn prepare(&self, ctx: &PrepareContext<'_>) -> PackageResult<()> {
        let source = ctx.layout.external.join(BUNDLE_SOURCE_DIR);
        if !source.is_dir() {
            return Err(PackageError::MissingSource {
                what: "RedisInsight bundle",
                path: source,
            });
        }

        info!(package = ctx.package, "Staging RedisInsight assets");
        let dest = ctx.layout.sharedir.join(BUNDLE_SOURCE_DIR);
        let copied = copy_tree(&source, &dest)?;
        debug!(files = copied, dest = %dest.display(), "copied application bundle");
        Ok(())
    }
}
