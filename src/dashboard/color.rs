//! Chart color handling: master-table hex strings to css color values.

/// Fallback triple (violet) for a missing or malformed master color.
pub const FALLBACK_RGB: (u8, u8, u8) = (139, 92, 246);

/// Parse a six-digit hex color, with or without a leading '#'.
/// Anything else — wrong length, non-hex digits, non-ASCII — yields the
/// fallback triple.
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() == 6 && hex.is_ascii() {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&hex[0..2], 16),
            u8::from_str_radix(&hex[2..4], 16),
            u8::from_str_radix(&hex[4..6], 16),
        ) {
            return (r, g, b);
        }
    }
    FALLBACK_RGB
}

/// Resolve an optional master color column to a triple.
pub fn resolve(color: Option<&str>) -> (u8, u8, u8) {
    match color {
        Some(hex) => hex_to_rgb(hex),
        None => FALLBACK_RGB,
    }
}

pub fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("rgb({r}, {g}, {b})")
}

pub fn rgba((r, g, b): (u8, u8, u8), alpha: f32) -> String {
    format!("rgba({r}, {g}, {b}, {alpha})")
}
