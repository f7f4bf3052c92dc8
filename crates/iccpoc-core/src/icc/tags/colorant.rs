//! Colorant Table Tag Type
//!
//! `clrt` lists named colorants with their PCS coordinates. See ICC.1:2022
//! Section 10.4.
//!
//! Layout:
//!
//! ```text
//! 0   4   type signature ('clrt')
//! 4   4   reserved, zero
//! 8   4   colorant count
//! 12  38n colorant entries: 32-byte name, 3 x u16 PCS
//! ```
//!
//! The name field is nominally a NUL-terminated ASCII string. The encoder
//! writes it exactly as given and the decoder never assumes a terminator.

use crate::icc::error::IccError;
use crate::icc::types::TypeSignature;

/// Length of the name field in a colorant entry
pub const COLORANT_NAME_LEN: usize = 32;

/// Length of one colorant entry (name + 3 PCS values)
pub const COLORANT_ENTRY_SIZE: usize = COLORANT_NAME_LEN + 6;

/// Signature, reserved bytes and count
pub const COLORANT_TABLE_HEADER_SIZE: usize = 12;

/// One colorant: a raw 32-byte name and its PCS coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorantEntry {
    pub name: [u8; COLORANT_NAME_LEN],
    pub pcs: [u16; 3],
}

impl ColorantEntry {
    /// An entry whose name field is `fill` repeated across all 32 bytes
    pub fn filled(fill: u8, pcs: [u16; 3]) -> Self {
        Self {
            name: [fill; COLORANT_NAME_LEN],
            pcs,
        }
    }

    /// Whether the name field contains a NUL byte
    pub fn is_terminated(&self) -> bool {
        self.name.contains(&0)
    }

    /// Name up to the first NUL, or all 32 bytes when unterminated
    pub fn name_lossy(&self) -> String {
        let end = self
            .name
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(COLORANT_NAME_LEN);
        String::from_utf8_lossy(&self.name[..end]).into_owned()
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.name);
        for value in self.pcs {
            out.extend_from_slice(&value.to_be_bytes());
        }
    }

    fn parse(bytes: &[u8]) -> Self {
        let mut name = [0u8; COLORANT_NAME_LEN];
        name.copy_from_slice(&bytes[..COLORANT_NAME_LEN]);
        let pcs_at = |i: usize| {
            let at = COLORANT_NAME_LEN + i * 2;
            u16::from_be_bytes([bytes[at], bytes[at + 1]])
        };
        Self {
            name,
            pcs: [pcs_at(0), pcs_at(1), pcs_at(2)],
        }
    }
}

/// Decoded or to-be-encoded colorant table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorantTable {
    /// Count field as stored; may disagree with `entries.len()` when decoded
    pub declared_count: u32,
    pub entries: Vec<ColorantEntry>,
}

impl ColorantTable {
    pub fn new(entries: Vec<ColorantEntry>) -> Self {
        Self {
            declared_count: entries.len() as u32,
            entries,
        }
    }

    /// Encoded size for `count` entries
    pub fn encoded_len(count: usize) -> usize {
        COLORANT_TABLE_HEADER_SIZE + count * COLORANT_ENTRY_SIZE
    }

    /// Encode including the type signature and reserved bytes.
    ///
    /// The count field is written from `declared_count`, not checked against
    /// the entries or against any channel limit.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::encoded_len(self.entries.len()));
        out.extend_from_slice(&TypeSignature::COLORANT_TABLE.0.to_be_bytes());
        out.extend_from_slice(&[0u8; 4]);
        out.extend_from_slice(&self.declared_count.to_be_bytes());
        for entry in &self.entries {
            entry.write_to(&mut out);
        }
        out
    }

    /// Parse tag data starting at the type signature.
    ///
    /// Entries beyond the end of `data` are dropped rather than treated as an
    /// error, so a table with an inflated count still decodes.
    pub fn parse(data: &[u8]) -> Result<Self, IccError> {
        if data.len() < COLORANT_TABLE_HEADER_SIZE {
            return Err(IccError::TooSmall {
                region: "colorant table",
                expected: COLORANT_TABLE_HEADER_SIZE,
                actual: data.len(),
            });
        }

        let type_sig = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
        if type_sig != TypeSignature::COLORANT_TABLE.0 {
            return Err(IccError::UnexpectedType {
                expected: TypeSignature::COLORANT_TABLE.0,
                found: type_sig,
            });
        }

        let declared_count = u32::from_be_bytes([data[8], data[9], data[10], data[11]]);
        let entries = data[COLORANT_TABLE_HEADER_SIZE..]
            .chunks_exact(COLORANT_ENTRY_SIZE)
            .take(declared_count as usize)
            .map(ColorantEntry::parse)
            .collect();

        Ok(Self {
            declared_count,
            entries,
        })
    }

    /// Whether every declared entry was present in the data
    pub fn is_complete(&self) -> bool {
        self.entries.len() as u64 == self.declared_count as u64
    }

    pub fn unterminated_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_terminated()).count()
    }
}
