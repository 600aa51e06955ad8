//! Staging tree preparation.

use tracing::info;

use crate::common::{ensure_dir_mode, DIR_MODE};
use crate::component::{default_preparers, PrepareContext, Preparer};
use crate::error::{PackageError, PackageResult};
use crate::layout::{PathLayout, Target};

/// Creates the staging directories and runs the component preparers.
pub struct Stager {
    package: String,
    target: Target,
    layout: PathLayout,
    preparers: Vec<Box<dyn Preparer>>,
}

impl Stager {
    /// Stager with the default Node runtime and application preparers.
    pub fn new(package: impl Into<String>, target: Target, layout: PathLayout) -> Self {
        Self::with_preparers(package, target, layout, default_preparers())
    }

    pub fn with_preparers(
        package: impl Into<String>,
        target: Target,
        layout: PathLayout,
        preparers: Vec<Box<dyn Preparer>>,
    ) -> Self {
        Self {
            package: package.into(),
            target,
            layout,
            preparers,
        }
    }

    pub fn layout(&self) -> &PathLayout {
        &self.layout
    }

    /// Create the staging directories, then run each preparer in order.
    ///
    /// Safe to call repeatedly. A failing preparer aborts the stage and the
    /// directories created so far are left in place.
    pub fn stage(&self) -> PackageResult<()> {
        for dir in self.layout.staging_dirs() {
            ensure_dir_mode(dir, DIR_MODE)?;
        }

        let ctx = PrepareContext {
            package: &self.package,
            target: &self.target,
            layout: &self.layout,
        };

        for preparer in &self.preparers {
            info!(preparer = preparer.name(), "Running preparer");
            preparer
                .prepare(&ctx)
                .map_err(|e| PackageError::Preparer {
                    name: preparer.name().to_string(),
                    source: Box::new(e),
                })?;
        }

        Ok(())
    }
}
