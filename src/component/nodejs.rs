//! Node.js runtime preparer.

use tracing::{debug, info};

use super::{PrepareContext, Preparer};
use crate::common::copy_tree;
use crate::error::{PackageError, PackageResult};

/// Directory under the external root holding an unpacked Node distribution.
pub const NODE_SOURCE_DIR: &str = "node";

/// Stages the Node runtime binaries and libraries.
///
/// Expects a pre-fetched distribution at `<external>/node` with `bin/` and
/// `lib/` subdirectories; `bin/` lands in the layout's bindir and `lib/` in
/// its libdir.
pub struct NodeRuntime;

impl Preparer for NodeRuntime {
    fn name(&self) -> &str {
        "nodejs"
    }

    fn prepare(&self, ctx: &PrepareContext<'_>) -> PackageResult<()> {
        let source = ctx.layout.external.join(NODE_SOURCE_DIR);
        info!(
            package = ctx.package,
            osnick = %ctx.target.osnick,
            arch = %ctx.target.arch,
            "Staging Node.js runtime"
        );

        let bin = source.join("bin");
        if !bin.is_dir() {
            return Err(PackageError::MissingSource {
                what: "Node.js runtime",
                path: bin,
            });
        }
        let copied = copy_tree(&bin, &ctx.layout.bindir)?;
        debug!(files = copied, "copied Node.js binaries");

        // Some distributions ship a bare binary without lib/
        let lib = source.join("lib");
        if lib.is_dir() {
            let copied = copy_tree(&lib, &ctx.layout.libdir)?;
            debug!(files = copied, "copied Node.js libraries");
        }

        Ok(())
    }
}
