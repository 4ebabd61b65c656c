use crate::types::Rgba;

/// Format a normalized RGBA color as a lowercase hex string.
///
/// Channels are scaled to 0..=255 and truncated. Alpha below 1.0 is appended
/// as a two-decimal opacity suffix; the formatted string is what dedup
/// compares, so the suffix is part of the value.
pub fn rgba_to_hex(color: &Rgba) -> String {
    let r = (color.r * 255.0) as u8;
    let g = (color.g * 255.0) as u8;
    let b = (color.b * 255.0) as u8;

    if color.a < 1.0 {
        format!("#{r:02x}{g:02x}{b:02x} (opacity: {:.2})", color.a)
    } else {
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}
