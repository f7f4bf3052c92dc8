//! Raw field access
//!
//! Reads profile fields straight from byte offsets, so the tests do not
//! depend on the parser in `iccpoc_core::icc` being correct.

use anyhow::{Result, bail};

/// Offset of the tag count, right after the header
pub const TAG_COUNT_OFFSET: usize = 128;

/// Offset of the first tag table entry
pub const TAG_TABLE_OFFSET: usize = 132;

/// A profile viewed as plain bytes
#[derive(Debug, Clone, Copy)]
pub struct RawProfile<'a> {
    data: &'a [u8],
}

/// One tag table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTagEntry {
    pub signature: [u8; 4],
    pub offset: u32,
    pub size: u32,
}

impl<'a> RawProfile<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn bytes(&self, at: usize, len: usize) -> Result<&'a [u8]> {
        match at.checked_add(len) {
            Some(end) if end <= self.data.len() => Ok(&self.data[at..end]),
            _ => bail!("read of {len} bytes at {at} past end ({})", self.data.len()),
        }
    }

    pub fn be_u16(&self, at: usize) -> Result<u16> {
        let b = self.bytes(at, 2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn be_u32(&self, at: usize) -> Result<u32> {
        let b = self.bytes(at, 4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Size field of the header
    pub fn declared_size(&self) -> Result<u32> {
        self.be_u32(0)
    }

    pub fn tag_count(&self) -> Result<u32> {
        self.be_u32(TAG_COUNT_OFFSET)
    }

    pub fn tag_entry(&self, index: usize) -> Result<RawTagEntry> {
        let at = TAG_TABLE_OFFSET + index * 12;
        let mut signature = [0u8; 4];
        signature.copy_from_slice(self.bytes(at, 4)?);
        Ok(RawTagEntry {
            signature,
            offset: self.be_u32(at + 4)?,
            size: self.be_u32(at + 8)?,
        })
    }

    pub fn tag_payload(&self, index: usize) -> Result<&'a [u8]> {
        let entry = self.tag_entry(index)?;
        self.bytes(entry.offset as usize, entry.size as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_past_end_fail() {
        let data = [0u8; 8];
        let raw = RawProfile::new(&data);
        assert!(raw.be_u32(4).is_ok());
        assert!(raw.be_u32(5).is_err());
        assert!(raw.bytes(usize::MAX, 2).is_err());
        assert!(raw.tag_count().is_err());
    }
}
