//! Color handling utilities for SCSS values
//!
//! The value classifier only labels colors; this type is what it uses to
//! decide whether a `#` token really is a hex color.

/// Represents a color with RGBA components
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0.0-1.0)
    pub a: f32,
}

impl Color {
    pub fn new_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn new_rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string and return a Color
    /// Supports #rgb, #rgba, #rrggbb and #rrggbbaa
    pub fn from_hex(hex_value: &str) -> Option<Self> {
        let hex_part = hex_value.strip_prefix('#').unwrap_or(hex_value);
        if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let short = |i: usize| u8::from_str_radix(&hex_part[i..i + 1].repeat(2), 16).ok();
        let long = |i: usize| u8::from_str_radix(&hex_part[i..i + 2], 16).ok();

        match hex_part.len() {
            3 => Some(Self::new_rgb(short(0)?, short(1)?, short(2)?)),
            4 => Some(Self::new_rgba(
                short(0)?,
                short(1)?,
                short(2)?,
                short(3)? as f32 / 255.0,
            )),
            6 => Some(Self::new_rgb(long(0)?, long(2)?, long(4)?)),
            8 => Some(Self::new_rgba(
                long(0)?,
                long(2)?,
                long(4)?,
                long(6)? as f32 / 255.0,
            )),
            _ => None,
        }
    }

    /// Find the first well-formed hex color token inside a larger value,
    /// e.g. `#ccc` in `1px solid #ccc`. Interpolation (`#{...}`) is skipped.
    pub fn find_hex_token(value: &str) -> Option<&str> {
        let bytes = value.as_bytes();
        let mut start = 0;
        while let Some(offset) = value[start..].find('#') {
            let hash = start + offset;
            let end = bytes[hash + 1..]
                .iter()
                .position(|b| !b.is_ascii_alphanumeric())
                .map(|p| hash + 1 + p)
                .unwrap_or(bytes.len());
            let token = &value[hash..end];
            if Self::from_hex(token).is_some() {
                return Some(token);
            }
            start = hash + 1;
        }
        None
    }
}
