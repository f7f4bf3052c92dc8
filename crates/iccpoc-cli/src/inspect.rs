use anyhow::Context;
use iccpoc_core::{Inspection, inspect};

use crate::commands::inspect::*;

pub fn handle_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let _guard = tracing::trace_span!("Handle inspect subcommand").entered();

    let data = std::fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let found = inspect(&data)
        .with_context(|| format!("failed to inspect {}", args.input.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else {
        print!("{}", render_inspection(&found));
    }
    Ok(())
}

pub fn render_inspection(found: &Inspection) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Profile size: {} bytes (header declares {})\n",
        found.actual_size, found.declared_size
    ));
    out.push_str(&format!(
        "Device class: {}  rendering intent: {}\n",
        found.device_class, found.rendering_intent
    ));
    for issue in &found.header_issues {
        out.push_str(&format!("  header: {issue}\n"));
    }

    out.push_str(&format!("Tags: {}\n", found.tags.len()));
    for tag in &found.tags {
        out.push_str(&format!(
            "  {}  offset {}  size {}{}\n",
            tag.signature,
            tag.offset,
            tag.size,
            if tag.in_bounds { "" } else { "  (out of bounds)" }
        ));
    }
    for (a, b) in &found.overlaps {
        out.push_str(&format!("  overlap: {a} / {b}\n"));
    }
    if found.unused_bytes > 0 {
        out.push_str(&format!("  {} bytes not covered by any tag\n", found.unused_bytes));
    }

    if let Some(colorants) = &found.colorants {
        out.push_str(&format!(
            "Colorant table: {} declared, {} decoded, {} unterminated\n",
            colorants.declared_count, colorants.decoded_count, colorants.unterminated
        ));
        for name in &colorants.names {
            out.push_str(&format!("  {name:?}\n"));
        }
    }
    if let Some(reason) = &found.malformed_colorant {
        out.push_str(&format!("Colorant table malformed: {reason}\n"));
    }

    out.push_str(&format!(
        "Container well-formed: {}\n",
        if found.is_well_formed() { "yes" } else { "no" }
    ));
    out.push_str(&format!(
        "Unterminated colorant name: {}\n",
        if found.triggers_overflow() { "yes" } else { "no" }
    ));
    out
}

#[cfg(test)]
mod tests {
    use iccpoc_core::ProfileBuilder;

    use super::*;

    #[test]
    fn default_profile_rendering() {
        let found = inspect(&ProfileBuilder::new().assemble().unwrap()).unwrap();
        let text = render_inspection(&found);

        assert!(text.contains("Profile size: 194 bytes (header declares 194)"));
        assert!(text.contains("Device class: nmcl  rendering intent: 3"));
        assert!(text.contains("clrt  offset 144  size 50"));
        assert!(text.contains("1 declared, 1 decoded, 1 unterminated"));
        assert!(text.contains("Container well-formed: yes"));
        assert!(text.contains("Unterminated colorant name: yes"));
    }

    #[test]
    fn findings_rendered_instead_of_failing() {
        let mut bytes = ProfileBuilder::new().assemble().unwrap();
        bytes[64..68].copy_from_slice(&7u32.to_be_bytes());
        bytes[140..144].copy_from_slice(&8u32.to_be_bytes());

        let text = render_inspection(&inspect(&bytes).unwrap());
        assert!(text.contains("header: unknown rendering intent 7"));
        assert!(text.contains("Colorant table malformed: colorant table needs 12 bytes"));
        assert!(text.contains("Container well-formed: no"));
        assert!(text.contains("Unterminated colorant name: no"));
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = InspectArgs {
            input: dir.path().join("nope.icc"),
            json: false,
        };
        assert!(handle_inspect(args).is_err());
    }
}
