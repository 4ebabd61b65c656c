//! Depth-first traversals over the document tree.
//!
//! All walks are pre-order and visit children in document order. Lookups
//! return `None` for absent IDs; absence is not an error.

use crate::color::rgba_to_hex;
use crate::types::{Effect, Node, Paint};

/// Sentinel page name when no page contains the node.
pub const UNKNOWN_PAGE: &str = "Unknown Page";

/// First node (pre-order) whose ID equals `target_id`.
pub fn find_node_by_id<'a>(node: &'a Node, target_id: &str) -> Option<&'a Node> {
    if node.id == target_id {
        return Some(node);
    }
    node.children
        .iter()
        .find_map(|child| find_node_by_id(child, target_id))
}

/// Name of the first top-level page (CANVAS child of the document) whose
/// subtree contains `node_id`, falling back to [`UNKNOWN_PAGE`].
pub fn find_page_for_node(document: &Node, node_id: &str) -> String {
    document
        .children
        .iter()
        .filter(|page| page.node_type == "CANVAS")
        .find(|page| find_node_by_id(page, node_id).is_some())
        .map(|page| page.display_name().to_string())
        .unwrap_or_else(|| UNKNOWN_PAGE.to_string())
}

/// Derived record of a text node's typography block. Only fields present in
/// the source are carried; dedup is full-field equality, node name included.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyleSummary {
    pub node_name: String,
    pub font: Option<String>,
    pub size: Option<String>,
    pub weight: Option<f64>,
    pub line_height: Option<String>,
    pub letter_spacing: Option<f64>,
    pub align: Option<String>,
}

impl TextStyleSummary {
    /// Extract the summary for a TEXT node. Returns `None` for non-text
    /// nodes, nodes without a style block, and style blocks carrying none of
    /// the summarized fields.
    pub fn from_node(node: &Node) -> Option<TextStyleSummary> {
        if node.node_type != "TEXT" {
            return None;
        }
        let style = node.style.as_ref()?;
        let summary = TextStyleSummary {
            node_name: node.display_name().to_string(),
            font: style.font_family.clone(),
            size: style.font_size.map(px),
            weight: style.font_weight,
            line_height: style.line_height_px.map(px),
            letter_spacing: style.letter_spacing,
            align: style.text_align_horizontal.clone(),
        };
        if summary.is_blank() {
            None
        } else {
            Some(summary)
        }
    }

    fn is_blank(&self) -> bool {
        self.font.is_none()
            && self.size.is_none()
            && self.weight.is_none()
            && self.line_height.is_none()
            && self.letter_spacing.is_none()
            && self.align.is_none()
    }
}

/// Derived record of a visible effect.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectSummary {
    pub kind: String,
    pub color: Option<String>,
    pub radius: Option<f64>,
    pub offset: Option<String>,
}

/// Colors of the solid, visible fills, formatted to hex, in source order.
pub fn extract_fill_colors(fills: &[Paint]) -> Vec<String> {
    fills
        .iter()
        .filter(|fill| fill.paint_type == "SOLID" && fill.visible)
        .filter_map(|fill| fill.color.as_ref())
        .map(rgba_to_hex)
        .collect()
}

/// Summaries of the visible effects, in source order.
pub fn extract_effects(effects: &[Effect]) -> Vec<EffectSummary> {
    effects
        .iter()
        .filter(|effect| effect.visible)
        .map(|effect| EffectSummary {
            kind: effect
                .effect_type
                .clone()
                .unwrap_or_else(|| "UNKNOWN".to_string()),
            color: effect.color.as_ref().map(rgba_to_hex),
            radius: effect.radius,
            offset: effect
                .offset
                .as_ref()
                .map(|offset| format!("x:{}, y:{}", offset.x, offset.y)),
        })
        .collect()
}

fn px(value: f64) -> String {
    format!("{value}px")
}

/// Everything the style walk accumulates over one tree.
///
/// Lists keep first-appearance order; entries are unique by exact value
/// equality of the derived record, never by a semantic key.
#[derive(Debug, Default)]
pub struct StyleUsage {
    pub colors: Vec<String>,
    pub text_styles: Vec<TextStyleSummary>,
    pub effects: Vec<EffectSummary>,
}

/// Visit every node exactly once and accumulate fill colors, text styles and
/// effects.
pub fn collect_style_usage(root: &Node) -> StyleUsage {
    let mut usage = StyleUsage::default();
    visit(root, &mut usage);
    usage
}

fn visit(node: &Node, usage: &mut StyleUsage) {
    for color in extract_fill_colors(&node.fills) {
        if !usage.colors.contains(&color) {
            usage.colors.push(color);
        }
    }

    if let Some(summary) = TextStyleSummary::from_node(node) {
        if !usage.text_styles.contains(&summary) {
            usage.text_styles.push(summary);
        }
    }

    for effect in extract_effects(&node.effects) {
        if !usage.effects.contains(&effect) {
            usage.effects.push(effect);
        }
    }

    for child in &node.children {
        visit(child, usage);
    }
}
