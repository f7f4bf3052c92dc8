//! ICC Profile Header
//!
//! The ICC profile header is exactly 128 bytes and contains basic profile
//! information. See ICC.1:2022 Section 7.2. [`IccHeader::to_bytes`] writes
//! every field verbatim, so a header can carry values a conforming profile
//! never would.

use super::error::IccError;
use super::types::{DateTimeNumber, XyzNumber};

/// Profile file signature - must be 'acsp' (0x61637370)
pub const PROFILE_SIGNATURE: u32 = 0x61637370;

/// Header length in bytes
pub const HEADER_SIZE: usize = 128;

/// ICC Profile Header (128 bytes)
#[derive(Debug, Clone, PartialEq)]
pub struct IccHeader {
    /// Profile size in bytes
    pub size: u32,
    /// Preferred CMM type signature
    pub cmm_type: u32,
    /// Profile version (major.minor.patch)
    pub version: ProfileVersion,
    /// Device class (display, input, output, etc.)
    pub device_class: ProfileClass,
    /// Color space of data
    pub color_space: ColorSpace,
    /// Profile connection space
    pub pcs: ColorSpace,
    /// Date and time profile was created
    pub creation_date: DateTimeNumber,
    /// Profile file signature (must be 'acsp')
    pub signature: u32,
    /// Primary platform signature
    pub platform: u32,
    /// Profile flags
    pub flags: u32,
    /// Device manufacturer signature
    pub manufacturer: u32,
    /// Device model signature
    pub model: u32,
    /// Device attributes
    pub attributes: u64,
    /// Rendering intent
    pub rendering_intent: RenderingIntent,
    /// PCS illuminant
    pub illuminant: XyzNumber,
    /// Profile creator signature
    pub creator: u32,
    /// Profile ID (MD5 hash, or zero)
    pub profile_id: [u8; 16],
}

impl IccHeader {
    /// Parse header from bytes
    pub fn parse(data: &[u8]) -> Result<Self, IccError> {
        if data.len() < HEADER_SIZE {
            return Err(IccError::TooSmall {
                region: "header",
                expected: HEADER_SIZE,
                actual: data.len(),
            });
        }

        let be32 =
            |at: usize| u32::from_be_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]]);

        let signature = be32(36);
        if signature != PROFILE_SIGNATURE {
            return Err(IccError::InvalidSignature(signature));
        }

        let version = ProfileVersion {
            major: data[8],
            minor: data[9] >> 4,
            patch: data[9] & 0x0F,
        };

        let mut attributes = [0u8; 8];
        attributes.copy_from_slice(&data[56..64]);

        let mut profile_id = [0u8; 16];
        profile_id.copy_from_slice(&data[84..100]);

        Ok(Self {
            size: be32(0),
            cmm_type: be32(4),
            version,
            device_class: ProfileClass::from_u32(be32(12))?,
            color_space: ColorSpace::from_u32(be32(16)),
            pcs: ColorSpace::from_u32(be32(20)),
            creation_date: DateTimeNumber::from_bytes(&data[24..36]).unwrap_or_default(),
            signature,
            platform: be32(40),
            flags: be32(44),
            manufacturer: be32(48),
            model: be32(52),
            attributes: u64::from_be_bytes(attributes),
            rendering_intent: RenderingIntent::from_u32(be32(64))?,
            illuminant: XyzNumber::from_bytes(&data[68..80]).unwrap_or_default(),
            creator: be32(80),
            profile_id,
        })
    }

    /// Serialize to the 128-byte on-disk layout
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        let mut put32 =
            |at: usize, value: u32| out[at..at + 4].copy_from_slice(&value.to_be_bytes());

        put32(0, self.size);
        put32(4, self.cmm_type);
        put32(12, self.device_class.to_u32());
        put32(16, self.color_space.to_u32());
        put32(20, self.pcs.to_u32());
        put32(36, self.signature);
        put32(40, self.platform);
        put32(44, self.flags);
        put32(48, self.manufacturer);
        put32(52, self.model);
        put32(64, self.rendering_intent.to_u32());
        put32(80, self.creator);

        out[8..12].copy_from_slice(&self.version.to_bytes());
        out[24..36].copy_from_slice(&self.creation_date.to_bytes());
        out[56..64].copy_from_slice(&self.attributes.to_be_bytes());
        out[68..80].copy_from_slice(&self.illuminant.to_bytes());
        out[84..100].copy_from_slice(&self.profile_id);
        out
    }

    /// Check the header against the data it was read from
    pub fn validate(&self, data_len: usize) -> Result<(), IccError> {
        if self.signature != PROFILE_SIGNATURE {
            return Err(IccError::InvalidSignature(self.signature));
        }

        if self.size as usize > data_len {
            return Err(IccError::SizeMismatch {
                header_size: self.size,
                actual_size: data_len,
            });
        }

        Ok(())
    }
}

/// ICC Profile Version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl ProfileVersion {
    pub const V5_0: Self = Self {
        major: 5,
        minor: 0,
        patch: 0,
    };

    /// Major byte, then minor and bug-fix nibbles, then a reserved zero byte
    pub fn to_bytes(&self) -> [u8; 4] {
        [self.major, (self.minor << 4) | (self.patch & 0x0F), 0, 0]
    }
}

/// ICC Profile Class (Device Class)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileClass {
    /// Input device (scanner, camera)
    Input,
    /// Display device (monitor)
    Display,
    /// Output device (printer)
    Output,
    /// Device link
    DeviceLink,
    /// Color space conversion
    ColorSpace,
    /// Abstract profile
    Abstract,
    /// Named color profile
    NamedColor,
}

impl ProfileClass {
    pub fn from_u32(val: u32) -> Result<Self, IccError> {
        match &val.to_be_bytes() {
            b"scnr" => Ok(Self::Input),
            b"mntr" => Ok(Self::Display),
            b"prtr" => Ok(Self::Output),
            b"link" => Ok(Self::DeviceLink),
            b"spac" => Ok(Self::ColorSpace),
            b"abst" => Ok(Self::Abstract),
            b"nmcl" => Ok(Self::NamedColor),
            _ => Err(IccError::InvalidProfileClass(val)),
        }
    }

    pub fn to_u32(&self) -> u32 {
        let sig = match self {
            Self::Input => b"scnr",
            Self::Display => b"mntr",
            Self::Output => b"prtr",
            Self::DeviceLink => b"link",
            Self::ColorSpace => b"spac",
            Self::Abstract => b"abst",
            Self::NamedColor => b"nmcl",
        };
        u32::from_be_bytes(*sig)
    }
}

/// ICC Color Space
///
/// Named-color profiles may leave the data and connection spaces empty, so
/// the all-zero signature has its own variant and unknown codes are kept
/// rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    /// No color data (0x00000000)
    NoData,
    Xyz,
    Lab,
    Rgb,
    Gray,
    Cmyk,
    /// Any other signature, kept verbatim
    Other(u32),
}

impl ColorSpace {
    pub fn from_u32(val: u32) -> Self {
        if val == 0 {
            return Self::NoData;
        }
        match &val.to_be_bytes() {
            b"XYZ " => Self::Xyz,
            b"Lab " => Self::Lab,
            b"RGB " => Self::Rgb,
            b"GRAY" => Self::Gray,
            b"CMYK" => Self::Cmyk,
            _ => Self::Other(val),
        }
    }

    pub fn to_u32(&self) -> u32 {
        match self {
            Self::NoData => 0,
            Self::Xyz => u32::from_be_bytes(*b"XYZ "),
            Self::Lab => u32::from_be_bytes(*b"Lab "),
            Self::Rgb => u32::from_be_bytes(*b"RGB "),
            Self::Gray => u32::from_be_bytes(*b"GRAY"),
            Self::Cmyk => u32::from_be_bytes(*b"CMYK"),
            Self::Other(val) => *val,
        }
    }
}

/// ICC Rendering Intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderingIntent {
    /// Perceptual - best for photographs
    #[default]
    Perceptual,
    /// Relative colorimetric - preserves in-gamut colors
    RelativeColorimetric,
    /// Saturation - maintains saturation
    Saturation,
    /// Absolute colorimetric - preserves white point
    AbsoluteColorimetric,
}

impl RenderingIntent {
    pub fn from_u32(val: u32) -> Result<Self, IccError> {
        match val {
            0 => Ok(Self::Perceptual),
            1 => Ok(Self::RelativeColorimetric),
            2 => Ok(Self::Saturation),
            3 => Ok(Self::AbsoluteColorimetric),
            _ => Err(IccError::InvalidRenderingIntent(val)),
        }
    }

    pub fn to_u32(&self) -> u32 {
        match self {
            Self::Perceptual => 0,
            Self::RelativeColorimetric => 1,
            Self::Saturation => 2,
            Self::AbsoluteColorimetric => 3,
        }
    }
}
