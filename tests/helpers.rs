//! Shared test utilities for stackpkg tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use stackpkg::config::Config;
use stackpkg::layout::{PathLayout, Target};
use stackpkg::metadata::Catalog;
use stackpkg::package::Packager;
use stackpkg::stage::Stager;
use stackpkg::PACKAGE_NAME;

pub const SERVICE_UNIT: &str = "[Unit]\nDescription=RedisInsight\n\n[Service]\nExecStart=/opt/redis-stack/bin/node /opt/redis-stack/share/redisinsight/api/dist/src/main\nUser=nobody\n\n[Install]\nWantedBy=multi-user.target\n";

pub const CATALOG: &str = r#"
vendor = "Redis Inc."
url = "https://redis.com/redis-enterprise/redis-insight/"
license = "SSPL-1.0"
email = "Redis OSS <oss@redis.com>"
product_user = "nobody"
product_group = "nogroup"

[redisinsight-web]
product = "redisinsight-web"
version = "2.0.0"
description = "RedisInsight's web interface"
"#;

/// Project tree in a temporary directory: metadata, hook scripts, unit
/// template and pre-fetched artifacts for one target.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Project root simulation
    pub base_dir: PathBuf,
    pub target: Target,
    pub config: Config,
}

impl TestEnv {
    /// Create a ready-to-package environment for bionic/x86_64.
    pub fn new() -> Self {
        Self::with_target(Target::new("bionic", "x86_64", "Linux"))
    }

    pub fn with_target(target: Target) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let config = Config::from_vars(&base_dir, &HashMap::new());

        fs::create_dir_all(config.metadata.parent().unwrap()).unwrap();
        fs::write(&config.metadata, CATALOG).expect("Failed to write metadata");

        for hook in ["postinstall", "postremove", "preremove"] {
            create_script(&config.script_root.join("package").join(hook));
        }
        let unit = config.script_root.join("services/redisinsight.service");
        fs::create_dir_all(unit.parent().unwrap()).unwrap();
        fs::write(&unit, SERVICE_UNIT).expect("Failed to write unit template");

        Self {
            _temp_dir: temp_dir,
            base_dir,
            target,
            config,
        }
    }

    pub fn layout(&self) -> PathLayout {
        PathLayout::new(
            &self.config.build_root,
            &self.config.script_root,
            PACKAGE_NAME,
            &self.target,
        )
    }

    /// Populate the external root with a fake Node distribution and bundle.
    pub fn create_artifacts(&self) {
        let external = self.layout().external;
        create_script(&external.join("node/bin/node"));
        fs::create_dir_all(external.join("node/lib/node_modules/npm")).unwrap();
        fs::write(external.join("node/lib/node_modules/npm/package.json"), "{}").unwrap();
        fs::create_dir_all(external.join("redisinsight/ui/dist")).unwrap();
        fs::write(
            external.join("redisinsight/ui/dist/index.html"),
            "<html></html>",
        )
        .unwrap();
    }

    pub fn stager(&self) -> Stager {
        Stager::new(PACKAGE_NAME, self.target.clone(), self.layout())
    }

    /// Packager using `program` as the packaging tool.
    pub fn packager(&self, program: &str) -> Packager {
        let catalog = Catalog::load(&self.config.metadata).expect("metadata should load");
        Packager::new(
            PACKAGE_NAME,
            self.target.clone(),
            self.layout(),
            catalog,
            program,
        )
    }

    /// Write an executable stand-in for fpm with the given shell body.
    pub fn fake_fpm(&self, body: &str) -> String {
        let path = self.base_dir.join("bin/fpm");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().into_owned()
    }
}

/// Create an executable shell script.
pub fn create_script(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir for script");
    }
    fs::write(path, "#!/bin/sh\nexit 0\n").expect("Failed to create script");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// Permission bits of a path.
pub fn mode_of(path: &Path) -> u32 {
    fs::metadata(path)
        .unwrap_or_else(|e| panic!("stat {}: {}", path.display(), e))
        .permissions()
        .mode()
        & 0o7777
}

/// Assert that a directory exists.
pub fn assert_dir_exists(path: &Path) {
    assert!(path.is_dir(), "Expected directory at {}", path.display());
}
