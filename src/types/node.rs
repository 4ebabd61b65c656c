//! Document tree types.
//!
//! A file response carries one `document` node; every node owns its children,
//! so the tree has no cycles and no shared ownership. Fields that Figma omits
//! fall back to the documented defaults: alpha 1.0, visibility true.

use serde::Deserialize;

/// One element of the document tree (document, canvas/page, frame, text, ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique node ID, e.g. `1:2`
    pub id: String,
    /// Node type (DOCUMENT, CANVAS, FRAME, TEXT, RECTANGLE, ...)
    #[serde(rename = "type")]
    pub node_type: String,
    /// Node name as shown in the layers panel
    pub name: Option<String>,
    /// Child nodes in document order
    #[serde(default)]
    pub children: Vec<Node>,
    /// Paints applied to the node interior
    #[serde(default)]
    pub fills: Vec<Paint>,
    /// Post-processing effects (shadows, blurs)
    #[serde(default)]
    pub effects: Vec<Effect>,
    /// Typography block, present on TEXT nodes
    pub style: Option<TypeStyle>,
}

impl Node {
    /// Display name with the fallback used across all reports.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed")
    }
}

/// Normalized RGBA color; channels are fractions in 0.0..=1.0.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Rgba {
    #[serde(default)]
    pub r: f64,
    #[serde(default)]
    pub g: f64,
    #[serde(default)]
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

/// A paint applied to a node. Only solid paints are summarized.
#[derive(Debug, Clone, Deserialize)]
pub struct Paint {
    #[serde(rename = "type")]
    pub paint_type: String,
    #[serde(default = "visible")]
    pub visible: bool,
    pub color: Option<Rgba>,
}

fn visible() -> bool {
    true
}

/// A visual effect (DROP_SHADOW, INNER_SHADOW, LAYER_BLUR, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct Effect {
    #[serde(rename = "type")]
    pub effect_type: Option<String>,
    #[serde(default = "visible")]
    pub visible: bool,
    pub color: Option<Rgba>,
    pub radius: Option<f64>,
    pub offset: Option<EffectOffset>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EffectOffset {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// Typography block on a TEXT node. Every field is opportunistic.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
    pub line_height_px: Option<f64>,
    pub letter_spacing: Option<f64>,
    pub text_align_horizontal: Option<String>,
}
