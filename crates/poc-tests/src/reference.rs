//! Reference CMS loaders
//!
//! Hands profile bytes to other ICC readers and records what happened. The
//! crafted profile uses a v5 header with empty color spaces, so a reader may
//! legitimately refuse it; callers report the outcome rather than assert on
//! it.

/// How a reference reader reacted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Loaded; carries a short description of what was read
    Opened(String),
    /// Refused with an error
    Rejected(String),
}

impl Outcome {
    pub fn is_opened(&self) -> bool {
        matches!(self, Outcome::Opened(_))
    }
}

/// Open with Little CMS
pub fn open_with_lcms2(data: &[u8]) -> Outcome {
    match lcms2::Profile::new_icc(data) {
        Ok(profile) => Outcome::Opened(format!(
            "class {:?}, clrt tag present: {}",
            profile.device_class(),
            profile.has_tag(lcms2::TagSignature::ColorantTableTag)
        )),
        Err(e) => Outcome::Rejected(format!("{e:?}")),
    }
}

/// Open with moxcms
pub fn open_with_moxcms(data: &[u8]) -> Outcome {
    match moxcms::ColorProfile::new_from_slice(data) {
        Ok(profile) => Outcome::Opened(format!(
            "class {:?}, color space {:?}",
            profile.profile_class, profile.color_space
        )),
        Err(e) => Outcome::Rejected(format!("{e:?}")),
    }
}
