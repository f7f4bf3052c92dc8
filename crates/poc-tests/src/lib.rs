//! # poc-tests
//!
//! Test support for the crafted colorant-table profile.
//!
//! This crate provides:
//! - Raw field readers that check the file layout without going through
//!   the library's own parser
//! - Reference CMS loaders (lcms2, moxcms) that report how a real reader
//!   reacts to the artifact
//!
//! ## Test Categories
//!
//! 1. **Layout**: header fields, tag table, payload offsets
//! 2. **Determinism**: repeated runs, known digest
//! 3. **Property**: seeded random entry counts and fill bytes
//! 4. **Reference CMS**: the artifact handed to other parsers

pub mod layout;
pub mod reference;

pub use layout::RawProfile;
pub use reference::{Outcome, open_with_lcms2, open_with_moxcms};

/// SHA-256 of the default artifact
pub const DEFAULT_ARTIFACT_SHA256: &str =
    "f1b9883a60d1066be9a5feb6a838211dbf2a3c2110c2355509cdd6bb290ef6ee";
