//! Reference CMS Tests
//!
//! Hands the artifact to lcms2 and moxcms. Both copy colorant names into
//! bounded buffers, so neither should crash; whether they accept a v5
//! named-color header with empty color spaces is reported, not asserted.

use iccpoc_core::ProfileBuilder;
use poc_tests::{Outcome, open_with_lcms2, open_with_moxcms};

#[test]
fn lcms2_reads_artifact() {
    let bytes = ProfileBuilder::new().assemble().unwrap();

    match open_with_lcms2(&bytes) {
        Outcome::Opened(info) => {
            eprintln!("lcms2 opened the profile: {info}");
            assert!(info.contains("clrt tag present: true"));
        }
        Outcome::Rejected(e) => eprintln!("SKIP: lcms2 rejected the profile: {e}"),
    }
}

#[test]
fn moxcms_reads_artifact() {
    let bytes = ProfileBuilder::new().assemble().unwrap();

    match open_with_moxcms(&bytes) {
        Outcome::Opened(info) => eprintln!("moxcms opened the profile: {info}"),
        Outcome::Rejected(e) => eprintln!("SKIP: moxcms rejected the profile: {e}"),
    }
}

#[test]
fn truncated_artifact_is_refused() {
    let bytes = ProfileBuilder::new().assemble().unwrap();
    let truncated = &bytes[..100];

    assert!(!open_with_lcms2(truncated).is_opened());
    assert!(!open_with_moxcms(truncated).is_opened());
}
