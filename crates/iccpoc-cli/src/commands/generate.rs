use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[non_exhaustive]
pub struct GenerateArgs {
    /// Output file.
    #[arg(short, long, default_value = iccpoc_core::DEFAULT_OUTPUT)]
    pub output: PathBuf,
    /// Number of colorant entries.
    #[arg(long, default_value_t = 1)]
    pub entries: u32,
    /// Byte filling each 32-byte colorant name, as a single ASCII character
    /// or a `0x` prefixed hex value. Must not be zero.
    #[arg(long, default_value = "A", value_parser = parse_fill)]
    pub fill: u8,
    /// Print the report as JSON instead of the usage notes.
    #[arg(long)]
    pub json: bool,
}

fn parse_fill(s: &str) -> Result<u8, String> {
    let value = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16).map_err(|e| format!("invalid hex byte `{s}`: {e}"))?
    } else {
        match s.as_bytes() {
            [b] if b.is_ascii() => *b,
            _ => return Err(format!("expected a single ASCII character, got `{s}`")),
        }
    };

    if value == 0 {
        return Err("fill byte must be non-zero".into());
    }
    Ok(value)
}
