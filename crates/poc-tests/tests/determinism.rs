//! Determinism Tests
//!
//! The artifact is a regression input, so every run must produce the same
//! bytes, and those bytes must match the published digest.

use iccpoc_core::{PocConfig, ProfileBuilder, digest_hex, generate};
use poc_tests::DEFAULT_ARTIFACT_SHA256;

#[test]
fn two_runs_write_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let first = PocConfig {
        output: dir.path().join("first.icc"),
        ..Default::default()
    };
    let second = PocConfig {
        output: dir.path().join("second.icc"),
        ..Default::default()
    };

    let a = generate(&first).unwrap();
    let b = generate(&second).unwrap();

    assert_eq!(a.sha256, b.sha256);
    assert_eq!(
        std::fs::read(&first.output).unwrap(),
        std::fs::read(&second.output).unwrap()
    );
}

#[test]
fn default_artifact_digest() {
    let bytes = ProfileBuilder::new().assemble().unwrap();
    assert_eq!(digest_hex(&bytes), DEFAULT_ARTIFACT_SHA256);
}

#[test]
fn rewriting_replaces_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("poc.icc");
    std::fs::write(&path, vec![0xFFu8; 4096]).unwrap();

    let report = generate(&PocConfig {
        output: path.clone(),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(std::fs::read(&path).unwrap().len(), 194);
    assert_eq!(report.sha256, DEFAULT_ARTIFACT_SHA256);
}

#[test]
fn unwritable_output_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = PocConfig {
        output: dir.path().join("no-such-dir").join("poc.icc"),
        ..Default::default()
    };

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, iccpoc_core::Error::Io(_)), "got {err:?}");
}
