//! Structural inspection of a profile
//!
//! Reads the header and tag table, then checks the things a dump tool checks
//! before describing tags: declared vs actual size, tag bounds, overlapping
//! tags and bytes no tag accounts for. Colorant tables are decoded without
//! assuming terminated names, and an unterminated name is reported as the
//! overflow trigger.
//!
//! Only a missing header, a missing `acsp` signature or a truncated tag table
//! stop inspection. Anything past that is recorded as a finding.

use serde::Serialize;
use tracing::warn;

use crate::icc::{
    ColorantTable, HEADER_SIZE, IccError, PROFILE_SIGNATURE, ProfileClass, RenderingIntent,
    TagDirectory, TagSignature, TypeSignature,
};

/// One tag table entry as found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagSummary {
    pub signature: String,
    pub offset: u32,
    pub size: u32,
    pub in_bounds: bool,
}

/// Decoded colorant table details
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorantSummary {
    pub declared_count: u32,
    pub decoded_count: usize,
    pub unterminated: usize,
    pub names: Vec<String>,
}

/// Findings for one profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    pub declared_size: u32,
    pub actual_size: usize,
    /// Device class as stored, shown as text when printable
    pub device_class: String,
    pub rendering_intent: u32,
    /// Header fields outside the values ICC defines
    pub header_issues: Vec<String>,
    pub tags: Vec<TagSummary>,
    /// Pairs of tag signatures whose payloads share bytes
    pub overlaps: Vec<(String, String)>,
    /// Bytes after the tag table that belong to no tag
    pub unused_bytes: usize,
    pub colorants: Option<ColorantSummary>,
    /// Why a `clrt` payload could not be decoded
    pub malformed_colorant: Option<String>,
}

impl Inspection {
    pub fn size_matches(&self) -> bool {
        self.declared_size as usize == self.actual_size
    }

    /// Container is consistent: sizes agree, tags are in bounds, disjoint and
    /// cover everything after the tag table
    pub fn is_well_formed(&self) -> bool {
        self.size_matches()
            && self.header_issues.is_empty()
            && self.malformed_colorant.is_none()
            && self.tags.iter().all(|t| t.in_bounds)
            && self.overlaps.is_empty()
            && self.unused_bytes == 0
            && self
                .colorants
                .as_ref()
                .is_none_or(|c| c.decoded_count as u64 == c.declared_count as u64)
    }

    /// A colorant name fills its field with no NUL
    pub fn triggers_overflow(&self) -> bool {
        self.colorants.as_ref().is_some_and(|c| c.unterminated > 0)
    }
}

pub fn inspect(data: &[u8]) -> Result<Inspection, IccError> {
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
    let declared_size = be32(0);
    let device_class = be32(12);
    let rendering_intent = be32(64);

    let directory = TagDirectory::parse(data)?;
    let table_end = HEADER_SIZE + directory.encoded_len();

    if declared_size as usize != data.len() {
        warn!(
            declared = declared_size,
            actual = data.len(),
            "declared size differs from data"
        );
    }

    let mut header_issues = Vec::new();
    if let Err(e) = ProfileClass::from_u32(device_class) {
        header_issues.push(e.to_string());
    }
    if let Err(e) = RenderingIntent::from_u32(rendering_intent) {
        header_issues.push(e.to_string());
    }
    for issue in &header_issues {
        warn!(issue = %issue, "header field out of range");
    }

    let mut tags = Vec::with_capacity(directory.placements.len());
    let mut colorants: Option<ColorantSummary> = None;
    let mut malformed_colorant = None;

    for placement in &directory.placements {
        let in_bounds = placement.end() <= data.len() as u64;
        if !in_bounds {
            warn!(tag = %placement.signature, "tag runs past end of data");
        }
        tags.push(TagSummary {
            signature: placement.signature.to_string(),
            offset: placement.offset,
            size: placement.size,
            in_bounds,
        });

        if !in_bounds || colorants.is_some() || malformed_colorant.is_some() {
            continue;
        }
        let start = placement.offset as usize;
        let payload = &data[start..start + placement.size as usize];
        if payload.len() < 4 || payload[0..4] != TypeSignature::COLORANT_TABLE.0.to_be_bytes() {
            continue;
        }
        match ColorantTable::parse(payload) {
            Ok(table) => {
                colorants = Some(ColorantSummary {
                    declared_count: table.declared_count,
                    decoded_count: table.entries.len(),
                    unterminated: table.unterminated_count(),
                    names: table.entries.iter().map(|e| e.name_lossy()).collect(),
                });
            }
            Err(e) => {
                warn!(tag = %placement.signature, error = %e, "colorant table not decodable");
                malformed_colorant = Some(e.to_string());
            }
        }
    }

    let mut overlaps = Vec::new();
    for (i, a) in directory.placements.iter().enumerate() {
        for b in &directory.placements[i + 1..] {
            if a.overlaps(b) {
                warn!(first = %a.signature, second = %b.signature, "tags overlap");
                overlaps.push((a.signature.to_string(), b.signature.to_string()));
            }
        }
    }

    let unused_bytes = unused_after(table_end, data.len(), &directory);
    if unused_bytes > 0 {
        warn!(unused_bytes, "bytes not covered by any tag");
    }

    Ok(Inspection {
        declared_size,
        actual_size: data.len(),
        device_class: TagSignature(device_class).to_string(),
        rendering_intent,
        header_issues,
        tags,
        overlaps,
        unused_bytes,
        colorants,
        malformed_colorant,
    })
}

/// Length of `[start, end)` not covered by any tag
fn unused_after(start: usize, end: usize, directory: &TagDirectory) -> usize {
    let (start, end) = (start as u64, end as u64);
    let mut spans: Vec<(u64, u64)> = directory
        .placements
        .iter()
        .map(|p| (p.offset as u64, p.end()))
        .map(|(lo, hi)| (lo.max(start), hi.min(end)))
        .filter(|(lo, hi)| lo < hi)
        .collect();
    spans.sort_unstable();

    let mut covered = 0;
    let mut cursor = start;
    for (lo, hi) in spans {
        let lo = lo.max(cursor);
        if hi > lo {
            covered += hi - lo;
            cursor = hi;
        }
    }
    (end.saturating_sub(start) - covered) as usize
}
