use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[non_exhaustive]
pub struct InspectArgs {
    /// Input file.
    pub input: PathBuf,
    /// Print findings as JSON.
    #[arg(long)]
    pub json: bool,
}
