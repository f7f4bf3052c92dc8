//! Writing the artifact and summarising it

use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::Result;
use crate::config::PocConfig;
use crate::profile::ProfileBuilder;

/// What a generator run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PocReport {
    pub path: PathBuf,
    pub size: usize,
    pub sha256: String,
}

/// Write `bytes` to `path` verbatim, in a single attempt
pub fn write_to_file(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), len = bytes.len(), "writing profile");
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Lowercase hex SHA-256 of `bytes`
pub fn digest_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Build the profile described by `config`, write it, and report on it
pub fn generate(config: &PocConfig) -> Result<PocReport> {
    let bytes = ProfileBuilder::from_config(config)?.assemble()?;
    write_to_file(&bytes, &config.output)?;

    let report = PocReport {
        path: config.output.clone(),
        size: bytes.len(),
        sha256: digest_hex(&bytes),
    };
    info!(
        path = %report.path.display(),
        size = report.size,
        sha256 = %report.sha256,
        "wrote crafted profile"
    );
    Ok(report)
}
