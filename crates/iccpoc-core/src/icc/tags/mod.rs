//! ICC Profile Tag Parsing
//!
//! Each tag payload starts with a 4-byte type signature and 4 reserved
//! bytes. Only the colorant table is decoded; everything else is kept raw.

mod colorant;

pub use colorant::{
    COLORANT_ENTRY_SIZE, COLORANT_NAME_LEN, COLORANT_TABLE_HEADER_SIZE, ColorantEntry,
    ColorantTable,
};

use super::error::IccError;
use super::types::TypeSignature;

/// Parsed tag data
#[derive(Debug, Clone)]
pub enum TagData {
    /// Colorant table (clrt)
    ColorantTable(ColorantTable),
    /// Unknown/unsupported tag type
    Unknown { type_sig: u32, data: Vec<u8> },
}

impl TagData {
    /// Parse tag data from bytes
    ///
    /// # Arguments
    /// * `data` - The tag data bytes (starting at offset in profile)
    pub fn parse(data: &[u8]) -> Result<Self, IccError> {
        if data.len() < 8 {
            return Err(IccError::TooSmall {
                region: "tag payload",
                expected: 8,
                actual: data.len(),
            });
        }

        let type_sig = TypeSignature(u32::from_be_bytes([data[0], data[1], data[2], data[3]]));

        match type_sig {
            TypeSignature::COLORANT_TABLE => {
                Ok(TagData::ColorantTable(ColorantTable::parse(data)?))
            }
            _ => Ok(TagData::Unknown {
                type_sig: type_sig.0,
                data: data.to_vec(),
            }),
        }
    }

    pub fn type_signature(&self) -> u32 {
        match self {
            TagData::ColorantTable(_) => TypeSignature::COLORANT_TABLE.0,
            TagData::Unknown { type_sig, .. } => *type_sig,
        }
    }

    pub fn as_colorant_table(&self) -> Option<&ColorantTable> {
        match self {
            TagData::ColorantTable(table) => Some(table),
            _ => None,
        }
    }
}
