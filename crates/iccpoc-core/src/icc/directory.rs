//! Tag Table
//!
//! The tag table follows the header: a u32 count, then one 12-byte entry per
//! tag (signature, offset from file start, size). Offsets are computed once
//! here and carried with each tag, so payloads are placed by their recorded
//! offset instead of by write order.

use tracing::debug;

use super::error::IccError;
use super::header::HEADER_SIZE;
use super::types::TagSignature;

/// Size of one tag table entry
pub const TAG_ENTRY_SIZE: usize = 12;

/// Where a tag's payload lives in the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagPlacement {
    pub signature: TagSignature,
    /// Offset from start of profile
    pub offset: u32,
    /// Size of tag data
    pub size: u32,
}

impl TagPlacement {
    /// One past the last byte, widened so corrupt entries cannot overflow
    pub fn end(&self) -> u64 {
        self.offset as u64 + self.size as u64
    }

    pub fn overlaps(&self, other: &TagPlacement) -> bool {
        (self.offset as u64) < other.end() && (other.offset as u64) < self.end()
    }
}

/// Tag table with explicit placements
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagDirectory {
    pub placements: Vec<TagPlacement>,
}

impl TagDirectory {
    /// Lay tags out back to back right after the tag table, in input order
    pub fn layout(tags: &[(TagSignature, &[u8])]) -> Result<Self, IccError> {
        Self::from_sizes(tags.iter().map(|(sig, payload)| (*sig, payload.len() as u64)))
    }

    /// Same as [`layout`](Self::layout) but from payload lengths alone.
    ///
    /// Offsets and sizes are 32-bit in the tag table, so a layout whose last
    /// byte lies past `u32::MAX` is refused.
    pub fn from_sizes(
        tags: impl ExactSizeIterator<Item = (TagSignature, u64)>,
    ) -> Result<Self, IccError> {
        let table_end = HEADER_SIZE as u64 + Self::encoded_len_for(tags.len()) as u64;
        let mut offset = u32::try_from(table_end).map_err(|_| IccError::TooLarge {
            size: table_end,
        })?;

        let mut placements = Vec::with_capacity(tags.len());
        for (signature, len) in tags {
            let end = offset as u64 + len;
            let too_large = || IccError::TooLarge { size: end };
            let size = u32::try_from(len).map_err(|_| too_large())?;
            let next = offset.checked_add(size).ok_or_else(too_large)?;

            let placement = TagPlacement {
                signature,
                offset,
                size,
            };
            debug!(
                tag = %signature,
                offset = placement.offset,
                size = placement.size,
                "placed tag"
            );
            placements.push(placement);
            offset = next;
        }
        Ok(Self { placements })
    }

    /// Size of the count field plus `count` entries
    pub fn encoded_len_for(count: usize) -> usize {
        4 + count * TAG_ENTRY_SIZE
    }

    pub fn encoded_len(&self) -> usize {
        Self::encoded_len_for(self.placements.len())
    }

    /// Sum of all payload sizes
    pub fn payload_len(&self) -> u64 {
        self.placements.iter().map(|p| p.size as u64).sum()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.extend_from_slice(&(self.placements.len() as u32).to_be_bytes());
        for placement in &self.placements {
            out.extend_from_slice(&placement.signature.to_be_bytes());
            out.extend_from_slice(&placement.offset.to_be_bytes());
            out.extend_from_slice(&placement.size.to_be_bytes());
        }
        out
    }

    /// Read the tag table that follows the header
    pub fn parse(data: &[u8]) -> Result<Self, IccError> {
        let table_start = HEADER_SIZE + 4;
        if data.len() < table_start {
            return Err(IccError::TooSmall {
                region: "tag table",
                expected: table_start,
                actual: data.len(),
            });
        }

        let count = u32::from_be_bytes([data[128], data[129], data[130], data[131]]) as usize;
        let required_size = table_start as u64 + count as u64 * TAG_ENTRY_SIZE as u64;
        if (data.len() as u64) < required_size {
            return Err(IccError::TooSmall {
                region: "tag table",
                expected: required_size as usize,
                actual: data.len(),
            });
        }

        let placements = data[table_start..]
            .chunks_exact(TAG_ENTRY_SIZE)
            .take(count)
            .map(|entry| {
                let field = |at: usize| {
                    u32::from_be_bytes([entry[at], entry[at + 1], entry[at + 2], entry[at + 3]])
                };
                TagPlacement {
                    signature: TagSignature(field(0)),
                    offset: field(4),
                    size: field(8),
                }
            })
            .collect();

        Ok(Self { placements })
    }
}
