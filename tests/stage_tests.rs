//! Staging tree tests.

mod helpers;

use helpers::{assert_dir_exists, mode_of, TestEnv};
use stackpkg::PackageError;
use std::fs;

#[test]
fn test_stage_creates_dirs_and_copies_artifacts() {
    let env = TestEnv::new();
    env.create_artifacts();

    env.stager().stage().expect("stage should succeed");

    let layout = env.layout();
    for dir in layout.staging_dirs() {
        assert_dir_exists(dir);
        assert_eq!(mode_of(dir), 0o755, "{}", dir.display());
    }
    assert!(layout.bindir.join("node").is_file());
    assert!(layout.libdir.join("node_modules/npm/package.json").is_file());
    assert_eq!(
        fs::read_to_string(layout.sharedir.join("redisinsight/ui/dist/index.html")).unwrap(),
        "<html></html>"
    );
}

#[test]
fn test_stage_twice_is_idempotent() {
    let env = TestEnv::new();
    env.create_artifacts();
    let stager = env.stager();

    stager.stage().expect("first stage");
    let layout = env.layout();
    let first: Vec<u32> = layout.staging_dirs().iter().map(|d| mode_of(d)).collect();

    stager.stage().expect("second stage");
    let second: Vec<u32> = layout.staging_dirs().iter().map(|d| mode_of(d)).collect();

    assert_eq!(first, second);
    assert!(second.iter().all(|m| *m == 0o755));
}

#[test]
fn test_missing_runtime_aborts_before_assets() {
    let env = TestEnv::new();
    // No artifacts: the Node preparer runs first and fails
    let err = env.stager().stage().unwrap_err();

    match err {
        PackageError::Preparer { name, source } => {
            assert_eq!(name, "nodejs");
            assert!(matches!(*source, PackageError::MissingSource { .. }));
        }
        other => panic!("expected preparer error, got {other:?}"),
    }

    let layout = env.layout();
    for dir in layout.staging_dirs() {
        assert_dir_exists(dir);
    }
    assert!(!layout.sharedir.join("redisinsight").exists());
}

#[test]
fn test_missing_bundle_names_insight_preparer() {
    let env = TestEnv::new();
    env.create_artifacts();
    fs::remove_dir_all(env.layout().external.join("redisinsight")).unwrap();

    let err = env.stager().stage().unwrap_err();
    assert!(matches!(err, PackageError::Preparer { ref name, .. } if name == "redisinsight"));
    // The runtime was already staged and stays for inspection
    assert!(env.layout().bindir.join("node").is_file());
}
