//! Read-back and layout errors

use std::fmt;

use super::types::TagSignature;

/// Failures while laying out a profile or reading one back
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IccError {
    /// A region ends before its fixed-size part does
    TooSmall {
        region: &'static str,
        expected: usize,
        actual: usize,
    },
    /// No `acsp` at offset 36
    InvalidSignature(u32),
    /// Header declares more bytes than were read
    SizeMismatch {
        header_size: u32,
        actual_size: usize,
    },
    /// Tag table entry points past the data
    TagOutOfBounds {
        tag: u32,
        offset: u32,
        size: u32,
        profile_size: usize,
    },
    /// Payload does not start with the expected type signature
    UnexpectedType { expected: u32, found: u32 },
    /// Device class at offset 12 is not one ICC defines
    InvalidProfileClass(u32),
    /// Rendering intent at offset 64 is above 3
    InvalidRenderingIntent(u32),
    /// Layout ends past what 32-bit offsets and sizes can address
    TooLarge { size: u64 },
}

impl fmt::Display for IccError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall {
                region,
                expected,
                actual,
            } => {
                write!(f, "{region} needs {expected} bytes, only {actual} present")
            }
            Self::InvalidSignature(sig) => {
                write!(f, "not an ICC profile: found {} where 'acsp' belongs", TagSignature(*sig))
            }
            Self::SizeMismatch {
                header_size,
                actual_size,
            } => {
                write!(
                    f,
                    "header declares {header_size} bytes but only {actual_size} were read"
                )
            }
            Self::TagOutOfBounds {
                tag,
                offset,
                size,
                profile_size,
            } => {
                write!(
                    f,
                    "tag '{}' at offset {offset} with size {size} runs past the {profile_size} bytes read",
                    TagSignature(*tag)
                )
            }
            Self::UnexpectedType { expected, found } => {
                write!(
                    f,
                    "expected a '{}' payload, found type '{}'",
                    TagSignature(*expected),
                    TagSignature(*found)
                )
            }
            Self::InvalidProfileClass(class) => {
                write!(f, "unknown device class '{}'", TagSignature(*class))
            }
            Self::InvalidRenderingIntent(intent) => {
                write!(f, "unknown rendering intent {intent}")
            }
            Self::TooLarge { size } => {
                write!(
                    f,
                    "layout needs {size} bytes, more than a 32-bit size field can hold"
                )
            }
        }
    }
}

impl std::error::Error for IccError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_region() {
        let err = IccError::TooSmall {
            region: "tag table",
            expected: 168,
            actual: 144,
        };
        assert_eq!(err.to_string(), "tag table needs 168 bytes, only 144 present");
    }

    #[test]
    fn test_signatures_shown_as_text() {
        let err = IccError::UnexpectedType {
            expected: u32::from_be_bytes(*b"clrt"),
            found: u32::from_be_bytes(*b"text"),
        };
        assert_eq!(err.to_string(), "expected a 'clrt' payload, found type 'text'");

        let err = IccError::InvalidProfileClass(0xDEAD_BEEF);
        assert_eq!(err.to_string(), "unknown device class '0xDEADBEEF'");
    }
}
