//! Human-readable rendering of an evidence bundle.

use std::fmt::Write;

use lexgraph_core::EvidenceBundle;

const TEXT_PREVIEW_CHARS: usize = 100;

/// Render the primary hit, the supporting nodes and the traversed edges.
pub fn format_norm_path(bundle: &EvidenceBundle) -> String {
    let mut out = String::new();

    match &bundle.primary {
        Some(primary) => {
            let _ = writeln!(out, "PRIMARY: {}", primary.node_id);
            let _ = writeln!(
                out,
                "  Section: {} - {}",
                display_opt(primary.section_num),
                primary.section_title.as_deref().unwrap_or("")
            );
        }
        None => {
            let _ = writeln!(out, "PRIMARY: (none)");
        }
    }

    if !bundle.supporting_nodes.is_empty() {
        let _ = writeln!(out, "\nSUPPORTING NODES:");
        for node in &bundle.supporting_nodes {
            let _ = writeln!(
                out,
                "  [{}] (hop {}) {}",
                node.relation, node.hop_distance, node.node_id
            );
            let _ = writeln!(
                out,
                "    Section: {} - {}",
                display_opt(node.section_num),
                node.section_title
            );
            let _ = writeln!(out, "    Text: {}", preview(&node.text));
        }
    }

    if !bundle.norm_path.is_empty() {
        let _ = writeln!(out, "\nNORM PATH (edges):");
        for step in &bundle.norm_path {
            let marker = if step.external { " [external]" } else { "" };
            let _ = writeln!(
                out,
                "  {} --{}--> {}{}",
                step.from, step.edge_type, step.to, marker
            );
        }
    }

    out.truncate(out.trim_end().len());
    out
}

fn display_opt(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn preview(text: &str) -> String {
    match text.char_indices().nth(TEXT_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_cuts_on_char_boundary() {
        let long = "ä".repeat(150);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), TEXT_PREVIEW_CHARS + 3);
        assert!(shown.ends_with("..."));
        assert_eq!(preview("lyhyt"), "lyhyt");
    }

    #[test]
    fn empty_bundle() {
        assert_eq!(format_norm_path(&EvidenceBundle::empty()), "PRIMARY: (none)");
    }
}
