//! # iccpoc - crafted colorant-table ICC profile
//!
//! Builds a small ICC v5 named-color profile whose colorant table carries a
//! 32-byte name with no NUL terminator. Readers that copy the name as a C
//! string run past the field, which makes the file a reproducible crash
//! input for regression testing of ICC parsers.
//!
//! The container itself is consistent: the declared size matches the data,
//! and the one tag sits exactly where the tag table points. The unterminated
//! name is the only defect.
//!
//! ## Quick Start
//!
//! ```no_run
//! use iccpoc_core::{PocConfig, ProfileBuilder, generate};
//!
//! // Bytes only
//! let bytes = ProfileBuilder::new().assemble().unwrap();
//! assert_eq!(bytes.len(), 194);
//!
//! // Write to poc-heap-overflow-colorant.icc
//! let report = generate(&PocConfig::default()).unwrap();
//! println!("{} {}", report.size, report.sha256);
//! ```

pub mod config;
pub mod error;
pub mod icc;
pub mod inspect;
pub mod output;
pub mod profile;

pub use config::{DEFAULT_OUTPUT, DEFAULT_PCS, MAX_ENTRY_COUNT, PocConfig};
pub use error::{Error, Result};
pub use inspect::{Inspection, inspect};
pub use output::{PocReport, digest_hex, generate, write_to_file};
pub use profile::ProfileBuilder;
