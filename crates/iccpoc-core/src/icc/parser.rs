//! ICC Profile Parser
//!
//! Strict reader used to check generated profiles: the header must carry the
//! `acsp` signature and a size no larger than the data, and every tag must
//! lie inside the data.
//!
//! # Usage
//!
//! ```ignore
//! let profile = IccProfile::parse(&bytes)?;
//! let table = profile.colorant_table().unwrap();
//! ```

use super::directory::{TagDirectory, TagPlacement};
use super::error::IccError;
use super::header::IccHeader;
use super::tags::{ColorantTable, TagData};
use super::types::TagSignature;

/// An ICC profile parsed from bytes
#[derive(Debug, Clone)]
pub struct IccProfile {
    /// Profile header (128 bytes)
    pub header: IccHeader,
    /// Tags in tag-table order
    pub tags: Vec<(TagPlacement, TagData)>,
}

impl IccProfile {
    /// Parse an ICC profile from bytes
    pub fn parse(data: &[u8]) -> Result<Self, IccError> {
        let header = IccHeader::parse(data)?;
        header.validate(data.len())?;

        let directory = TagDirectory::parse(data)?;
        let mut tags = Vec::with_capacity(directory.placements.len());

        for placement in directory.placements {
            if placement.end() > data.len() as u64 {
                return Err(IccError::TagOutOfBounds {
                    tag: placement.signature.0,
                    offset: placement.offset,
                    size: placement.size,
                    profile_size: data.len(),
                });
            }

            let start = placement.offset as usize;
            let tag_data = &data[start..start + placement.size as usize];
            tags.push((placement, TagData::parse(tag_data)?));
        }

        Ok(Self { header, tags })
    }

    /// Get a tag by signature
    pub fn get_tag(&self, sig: TagSignature) -> Option<&TagData> {
        self.tags
            .iter()
            .find(|(placement, _)| placement.signature == sig)
            .map(|(_, data)| data)
    }

    /// Get the colorant table tag (clrt)
    pub fn colorant_table(&self) -> Option<&ColorantTable> {
        self.get_tag(TagSignature::COLORANT_TABLE)
            .and_then(|t| t.as_colorant_table())
    }

    /// Get number of tags
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icc::header::PROFILE_SIGNATURE;

    /// Create a minimal valid ICC profile for testing
    fn create_minimal_profile() -> Vec<u8> {
        let mut data = vec![0u8; 128 + 4]; // Header + tag count

        let size = data.len() as u32;
        data[0..4].copy_from_slice(&size.to_be_bytes());

        // Version 4.3
        data[8] = 4;
        data[9] = 0x30;

        data[12..16].copy_from_slice(b"mntr");
        data[16..20].copy_from_slice(b"RGB ");
        data[20..24].copy_from_slice(b"XYZ ");
        data[36..40].copy_from_slice(&PROFILE_SIGNATURE.to_be_bytes());

        data
    }

    #[test]
    fn test_parse_minimal_profile() {
        let data = create_minimal_profile();
        let profile = IccProfile::parse(&data).unwrap();

        assert_eq!(profile.header.version.major, 4);
        assert_eq!(profile.tag_count(), 0);
    }

    #[test]
    fn test_profile_too_small() {
        let data = vec![0u8; 100];
        assert!(matches!(
            IccProfile::parse(&data),
            Err(IccError::TooSmall { .. })
        ));
    }

    #[test]
    fn test_profile_with_unknown_tag() {
        let mut data = create_minimal_profile();

        let new_size = (data.len() + 12 + 20) as u32;
        data[0..4].copy_from_slice(&new_size.to_be_bytes());
        data[128..132].copy_from_slice(&1u32.to_be_bytes());

        data.extend_from_slice(b"cprt");
        data.extend_from_slice(&144u32.to_be_bytes());
        data.extend_from_slice(&20u32.to_be_bytes());

        data.extend_from_slice(b"text");
        data.extend_from_slice(&[0u8; 4]);
        data.extend_from_slice(b"Test\0");
        data.extend_from_slice(&[0u8; 7]);

        let profile = IccProfile::parse(&data).unwrap();
        assert_eq!(profile.tag_count(), 1);
        assert!(profile.colorant_table().is_none());
        assert_eq!(
            profile.get_tag(TagSignature::COPYRIGHT).map(|t| t.type_signature()),
            Some(u32::from_be_bytes(*b"text"))
        );
    }

    #[test]
    fn test_tag_past_end_rejected() {
        let mut data = create_minimal_profile();
        data[128..132].copy_from_slice(&1u32.to_be_bytes());
        data.extend_from_slice(b"clrt");
        data.extend_from_slice(&144u32.to_be_bytes());
        data.extend_from_slice(&50u32.to_be_bytes());

        assert!(matches!(
            IccProfile::parse(&data),
            Err(IccError::TagOutOfBounds { .. })
        ));
    }
}
