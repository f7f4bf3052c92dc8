//! ICC Profile Encoding
//!
//! Byte-level building blocks for ICC.1:2022 profiles, plus a small reader
//! used to check what was built.
//!
//! # Structure
//!
//! An ICC profile consists of:
//! 1. A 128-byte header
//! 2. A tag table listing all tags
//! 3. Tag data

pub mod directory;
pub mod header;
pub mod tags;

mod error;
mod parser;
mod types;

pub use directory::{TAG_ENTRY_SIZE, TagDirectory, TagPlacement};
pub use error::IccError;
pub use header::{
    ColorSpace, HEADER_SIZE, IccHeader, PROFILE_SIGNATURE, ProfileClass, ProfileVersion,
    RenderingIntent,
};
pub use parser::IccProfile;
pub use tags::{
    COLORANT_ENTRY_SIZE, COLORANT_NAME_LEN, COLORANT_TABLE_HEADER_SIZE, ColorantEntry,
    ColorantTable, TagData,
};
pub use types::{DateTimeNumber, S15Fixed16, TagSignature, TypeSignature, XyzNumber};
