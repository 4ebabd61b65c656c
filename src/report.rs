//! Plain-text report rendering.
//!
//! Every renderer builds a `String` so the command layer stays a thin
//! print-and-exit shell and the exact output can be asserted in tests.

use std::fmt::Write as FmtWrite;

use crate::types::{Component, FileResponse, Node, PublishedStyle};
use crate::walk::{find_page_for_node, StyleUsage, UNKNOWN_PAGE};

const RULE_WIDTH: usize = 80;

fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn light_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

fn file_display_name(file: &FileResponse) -> &str {
    file.name.as_deref().unwrap_or("Unknown")
}

/// Header + recursive tree of pages, frames and layers.
pub fn render_file_report(file: &FileResponse, file_key: &str) -> String {
    let mut buf = String::new();
    writeln!(buf, "{}", heavy_rule()).ok();
    writeln!(buf, "FILE: {}", file_display_name(file)).ok();
    writeln!(buf, "Key: {file_key}").ok();
    writeln!(
        buf,
        "Last Modified: {}",
        file.last_modified.as_deref().unwrap_or("N/A")
    )
    .ok();
    writeln!(buf, "Version: {}", file.version.as_deref().unwrap_or("N/A")).ok();
    writeln!(buf, "{}", heavy_rule()).ok();
    writeln!(buf).ok();

    match &file.document {
        Some(document) => {
            writeln!(buf, "DOCUMENT STRUCTURE:").ok();
            writeln!(buf).ok();
            render_node_tree(document, 0, &mut buf);
        }
        None => {
            writeln!(buf, "No document data found").ok();
        }
    }
    buf
}

/// One line per node, two-space indent per level, children in document order.
pub fn render_node_tree(node: &Node, indent: usize, buf: &mut String) {
    let prefix = "  ".repeat(indent);
    writeln!(
        buf,
        "{prefix}├─ [{}] {} (id: {})",
        node.node_type,
        node.display_name(),
        node.id
    )
    .ok();
    for child in &node.children {
        render_node_tree(child, indent + 1, buf);
    }
}

/// Colors, text styles, effects and published style metadata.
pub fn render_styles_report(
    file: &FileResponse,
    file_key: &str,
    usage: &StyleUsage,
    published: &[&PublishedStyle],
) -> String {
    let mut buf = String::new();
    writeln!(buf, "{}", heavy_rule()).ok();
    writeln!(buf, "STYLES FROM: {}", file_display_name(file)).ok();
    writeln!(buf, "Key: {file_key}").ok();
    writeln!(buf, "{}", heavy_rule()).ok();
    writeln!(buf).ok();

    writeln!(buf, "COLORS:").ok();
    writeln!(buf, "{}", light_rule()).ok();
    if usage.colors.is_empty() {
        writeln!(buf, "  No colors found").ok();
    } else {
        for (i, color) in usage.colors.iter().enumerate() {
            writeln!(buf, "  {}. {color}", i + 1).ok();
        }
    }
    writeln!(buf).ok();

    writeln!(buf, "TEXT STYLES:").ok();
    writeln!(buf, "{}", light_rule()).ok();
    if usage.text_styles.is_empty() {
        writeln!(buf, "  No text styles found").ok();
    } else {
        for (i, style) in usage.text_styles.iter().enumerate() {
            writeln!(buf, "  {}. {}", i + 1, style.node_name).ok();
            if let Some(font) = &style.font {
                writeln!(buf, "     font: {font}").ok();
            }
            if let Some(size) = &style.size {
                writeln!(buf, "     size: {size}").ok();
            }
            if let Some(weight) = style.weight {
                writeln!(buf, "     weight: {weight}").ok();
            }
            if let Some(line_height) = &style.line_height {
                writeln!(buf, "     line_height: {line_height}").ok();
            }
            if let Some(letter_spacing) = style.letter_spacing {
                writeln!(buf, "     letter_spacing: {letter_spacing}").ok();
            }
            if let Some(align) = &style.align {
                writeln!(buf, "     align: {align}").ok();
            }
            writeln!(buf).ok();
        }
    }
    writeln!(buf).ok();

    writeln!(buf, "EFFECTS:").ok();
    writeln!(buf, "{}", light_rule()).ok();
    if usage.effects.is_empty() {
        writeln!(buf, "  No effects found").ok();
    } else {
        for (i, effect) in usage.effects.iter().enumerate() {
            writeln!(buf, "  {}. Type: {}", i + 1, effect.kind).ok();
            if let Some(color) = &effect.color {
                writeln!(buf, "     color: {color}").ok();
            }
            if let Some(radius) = effect.radius {
                writeln!(buf, "     radius: {radius}").ok();
            }
            if let Some(offset) = &effect.offset {
                writeln!(buf, "     offset: {offset}").ok();
            }
            writeln!(buf).ok();
        }
    }
    writeln!(buf).ok();

    writeln!(buf, "PUBLISHED STYLES:").ok();
    writeln!(buf, "{}", light_rule()).ok();
    if published.is_empty() {
        writeln!(buf, "  No published styles found").ok();
    } else {
        for style in published {
            writeln!(buf, "  • {}", style.name.as_deref().unwrap_or("Unnamed")).ok();
            writeln!(buf, "    Type: {}", style.style_type.as_deref().unwrap_or("N/A")).ok();
            writeln!(
                buf,
                "    Description: {}",
                style.description.as_deref().unwrap_or("N/A")
            )
            .ok();
            writeln!(buf).ok();
        }
    }
    buf
}

/// Numbered component listing with the containing page resolved per entry.
///
/// The page comes from the walk over the document; when the API already names
/// the page in `containing_frame`, that wins.
pub fn render_components_report<'a>(
    file: &FileResponse,
    file_key: &str,
    components: impl Iterator<Item = &'a Component>,
    total: usize,
) -> String {
    let mut buf = String::new();
    writeln!(buf, "{}", heavy_rule()).ok();
    writeln!(buf, "COMPONENTS FROM: {}", file_display_name(file)).ok();
    writeln!(buf, "Key: {file_key}").ok();
    writeln!(buf, "Total Components: {total}").ok();
    writeln!(buf, "{}", heavy_rule()).ok();
    writeln!(buf).ok();

    if total == 0 {
        writeln!(buf, "No components found in this file").ok();
        return buf;
    }

    for (i, component) in components.enumerate() {
        let node_id = component.node_id.as_deref().unwrap_or("");
        let mut page_name = UNKNOWN_PAGE.to_string();
        if let Some(document) = &file.document {
            page_name = find_page_for_node(document, node_id);
        }
        if let Some(from_api) = component
            .containing_frame
            .as_ref()
            .and_then(|frame| frame.page_name.as_deref())
        {
            page_name = from_api.to_string();
        }

        writeln!(buf, "{}. {}", i + 1, component.name.as_deref().unwrap_or("Unnamed")).ok();
        writeln!(buf, "   Node ID: {node_id}").ok();
        writeln!(buf, "   Page: {page_name}").ok();
        if let Some(description) = component.description.as_deref() {
            if !description.is_empty() {
                writeln!(buf, "   Description: {description}").ok();
            }
        }
        if let Some(frame_name) = component
            .containing_frame
            .as_ref()
            .and_then(|frame| frame.name.as_deref())
        {
            if !frame_name.is_empty() {
                writeln!(buf, "   Containing Frame: {frame_name}").ok();
            }
        }
        writeln!(buf).ok();
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContainingFrame;
    use crate::walk::collect_style_usage;

    fn node(id: &str, node_type: &str, name: &str, children: Vec<Node>) -> Node {
        Node {
            id: id.to_string(),
            node_type: node_type.to_string(),
            name: Some(name.to_string()),
            children,
            fills: Vec::new(),
            effects: Vec::new(),
            style: None,
        }
    }

    fn file_with_document(document: Option<Node>) -> FileResponse {
        FileResponse {
            name: Some("Design System".to_string()),
            last_modified: Some("2024-03-01T10:00:00Z".to_string()),
            version: Some("42".to_string()),
            document,
        }
    }

    #[test]
    fn file_report_renders_header_and_indented_tree() {
        let document = node(
            "0:0",
            "DOCUMENT",
            "Document",
            vec![node(
                "0:1",
                "CANVAS",
                "Page 1",
                vec![node("1:2", "FRAME", "Hero", Vec::new())],
            )],
        );
        let report = render_file_report(&file_with_document(Some(document)), "KEY123");

        assert!(report.contains("FILE: Design System"));
        assert!(report.contains("Key: KEY123"));
        assert!(report.contains("Last Modified: 2024-03-01T10:00:00Z"));
        assert!(report.contains("DOCUMENT STRUCTURE:"));
        assert!(report.contains("├─ [DOCUMENT] Document (id: 0:0)"));
        assert!(report.contains("  ├─ [CANVAS] Page 1 (id: 0:1)"));
        assert!(report.contains("    ├─ [FRAME] Hero (id: 1:2)"));
    }

    #[test]
    fn file_report_without_document_says_so() {
        let report = render_file_report(&file_with_document(None), "KEY123");
        assert!(report.contains("No document data found"));
        assert!(!report.contains("DOCUMENT STRUCTURE:"));
    }

    #[test]
    fn file_report_defaults_missing_metadata() {
        let file = FileResponse {
            name: None,
            last_modified: None,
            version: None,
            document: None,
        };
        let report = render_file_report(&file, "KEY123");
        assert!(report.contains("FILE: Unknown"));
        assert!(report.contains("Last Modified: N/A"));
        assert!(report.contains("Version: N/A"));
    }

    #[test]
    fn styles_report_lists_sections_and_placeholders() {
        let usage = collect_style_usage(&node("0:0", "DOCUMENT", "Document", Vec::new()));
        let published = PublishedStyle {
            name: Some("Primary/500".to_string()),
            style_type: Some("FILL".to_string()),
            description: None,
        };
        let report = render_styles_report(
            &file_with_document(None),
            "KEY123",
            &usage,
            &[&published],
        );

        assert!(report.contains("STYLES FROM: Design System"));
        assert!(report.contains("COLORS:"));
        assert!(report.contains("  No colors found"));
        assert!(report.contains("  No text styles found"));
        assert!(report.contains("  No effects found"));
        assert!(report.contains("• Primary/500"));
        assert!(report.contains("Type: FILL"));
        assert!(report.contains("Description: N/A"));
    }

    #[test]
    fn components_report_prefers_api_page_name_over_walk() {
        let document = node(
            "0:0",
            "DOCUMENT",
            "Document",
            vec![node(
                "0:1",
                "CANVAS",
                "Walked Page",
                vec![node("1:2", "COMPONENT", "Button", Vec::new())],
            )],
        );
        let components = vec![
            Component {
                name: Some("Button".to_string()),
                description: Some("Primary action".to_string()),
                node_id: Some("1:2".to_string()),
                containing_frame: Some(ContainingFrame {
                    name: Some("Buttons".to_string()),
                    page_name: Some("Library".to_string()),
                }),
            },
            Component {
                name: Some("Card".to_string()),
                description: None,
                node_id: Some("9:9".to_string()),
                containing_frame: None,
            },
        ];
        let report = render_components_report(
            &file_with_document(Some(document)),
            "KEY123",
            components.iter(),
            components.len(),
        );

        assert!(report.contains("Total Components: 2"));
        assert!(report.contains("1. Button"));
        assert!(report.contains("   Page: Library"));
        assert!(report.contains("   Description: Primary action"));
        assert!(report.contains("   Containing Frame: Buttons"));
        assert!(report.contains("2. Card"));
        assert!(report.contains("   Page: Unknown Page"));
    }

    #[test]
    fn components_report_uses_walk_when_api_page_missing() {
        let document = node(
            "0:0",
            "DOCUMENT",
            "Document",
            vec![node(
                "0:1",
                "CANVAS",
                "Walked Page",
                vec![node("1:2", "COMPONENT", "Button", Vec::new())],
            )],
        );
        let component = Component {
            name: Some("Button".to_string()),
            description: None,
            node_id: Some("1:2".to_string()),
            containing_frame: None,
        };
        let report = render_components_report(
            &file_with_document(Some(document)),
            "KEY123",
            std::iter::once(&component),
            1,
        );
        assert!(report.contains("   Page: Walked Page"));
    }

    #[test]
    fn empty_components_short_circuit() {
        let report = render_components_report(
            &file_with_document(None),
            "KEY123",
            std::iter::empty(),
            0,
        );
        assert!(report.contains("No components found in this file"));
    }
}
