//! Checks on the files a build reads: metadata, hooks, unit templates and
//! pre-fetched artifacts.

use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use crate::component::{insight::BUNDLE_SOURCE_DIR, nodejs::NODE_SOURCE_DIR};
use crate::layout::PathLayout;
use crate::metadata::Catalog;
use crate::package::formats::{HOOKS, SERVICE_UNITS};

use super::types::CheckResult;

/// The catalog parses and resolves a descriptor for `package`.
pub fn check_metadata(path: &Path, package: &str) -> CheckResult {
    let name = "package metadata";
    match Catalog::load(path).and_then(|c| c.descriptor(package)) {
        Ok(d) => CheckResult::pass_with(name, &format!("{} {}", d.product, d.version)),
        Err(e) => CheckResult::fail(name, &e.to_string()),
    }
}

/// Lifecycle hooks exist and are executable.
pub fn check_hooks(layout: &PathLayout) -> Vec<CheckResult> {
    HOOKS
        .iter()
        .map(|(_, script)| {
            let path = layout.hook(script);
            let name = format!("hook {}", script);
            match path.metadata() {
                Ok(m) if m.permissions().mode() & 0o111 != 0 => CheckResult::pass(&name),
                Ok(_) => CheckResult::warn(&name, &format!("{} is not executable", path.display())),
                Err(_) => CheckResult::fail(&name, &format!("missing: {}", path.display())),
            }
        })
        .collect()
}

/// Service unit templates exist.
pub fn check_service_units(layout: &PathLayout) -> Vec<CheckResult> {
    SERVICE_UNITS
        .iter()
        .map(|unit| {
            let path = layout.service_template(unit);
            if path.is_file() {
                CheckResult::pass(unit)
            } else {
                CheckResult::fail(unit, &format!("missing: {}", path.display()))
            }
        })
        .collect()
}

/// Pre-fetched artifacts the preparers copy from. Missing ones only warn,
/// since they may be fetched after preflight.
pub fn check_artifacts(layout: &PathLayout) -> Vec<CheckResult> {
    [NODE_SOURCE_DIR, BUNDLE_SOURCE_DIR]
        .iter()
        .map(|dir| {
            let path = layout.external.join(dir);
            let name = format!("artifact {}", dir);
            if path.is_dir() {
                CheckResult::pass_with(&name, &path.display().to_string())
            } else {
                CheckResult::warn(&name, &format!("not found at {}", path.display()))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Target;
    use crate::preflight::types::CheckStatus;
    use std::fs;
    use tempfile::TempDir;

    fn layout(root: &Path) -> PathLayout {
        PathLayout::new(
            &root.join("build"),
            &root.join("scripts"),
            "redisinsight-web",
            &Target::new("jammy", "x86_64", "Linux"),
        )
    }

    #[test]
    fn test_hooks_statuses() {
        let tmp = TempDir::new().unwrap();
        let l = layout(tmp.path());
        fs::create_dir_all(l.scriptdir.join("package")).unwrap();
        fs::write(l.hook("postinstall"), "#!/bin/sh\n").unwrap();
        fs::set_permissions(l.hook("postinstall"), fs::Permissions::from_mode(0o755)).unwrap();
        fs::write(l.hook("postremove"), "#!/bin/sh\n").unwrap();
        fs::set_permissions(l.hook("postremove"), fs::Permissions::from_mode(0o644)).unwrap();

        let statuses: Vec<_> = check_hooks(&l).into_iter().map(|c| c.status).collect();
        assert_eq!(
            statuses,
            vec![CheckStatus::Pass, CheckStatus::Warn, CheckStatus::Fail]
        );
    }

    #[test]
    fn test_missing_metadata_fails() {
        let tmp = TempDir::new().unwrap();
        let result = check_metadata(&tmp.path().join("packages.toml"), "redisinsight-web");
        assert_eq!(result.status, CheckStatus::Fail);
    }

    #[test]
    fn test_missing_artifacts_warn() {
        let tmp = TempDir::new().unwrap();
        let results = check_artifacts(&layout(tmp.path()));
        assert!(results.iter().all(|c| c.status == CheckStatus::Warn));
    }
}
