//! sRGB color type and hex parsing.

use crate::error::{RenderError, Result};

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use bezelshot::draw::Color;
/// let blue = Color::from_hex("#0099FF").unwrap();
/// assert_eq!(blue.to_rgba8(), [0x00, 0x99, 0xFF, 0xFF]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses a 6-digit hex color, with or without the leading `#`.
    ///
    /// Shorthand (`#FFF`) and alpha (`#RRGGBBAA`) forms are rejected.
    pub fn from_hex(value: &str) -> Option<Self> {
        let digits = value.trim().strip_prefix('#').unwrap_or(value.trim());
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Parses a hex color for a named configuration field.
    ///
    /// # Errors
    /// Returns [`RenderError::MalformedColor`] naming `field` when `value`
    /// is not a 6-digit hex string.
    pub fn parse_field(field: &'static str, value: &str) -> Result<Self> {
        Self::from_hex(value).ok_or_else(|| RenderError::MalformedColor {
            field,
            value: value.to_string(),
        })
    }

    /// Returns the color as 8-bit RGBA channels.
    pub fn to_rgba8(self) -> [u8; 4] {
        let quantize = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }

    /// Sets this color as the source of a Cairo context.
    pub fn apply(self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        let with = Color::from_hex("#F5F5F7").unwrap();
        let without = Color::from_hex("f5f5f7").unwrap();
        assert_eq!(with, without);
        assert_eq!(with.to_rgba8(), [0xF5, 0xF5, 0xF7, 0xFF]);
    }

    #[test]
    fn rejects_malformed_values() {
        for bad in ["", "#", "#FFF", "#FFFFFFFF", "#GG0000", "red", "# 00000"] {
            assert!(Color::from_hex(bad).is_none(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn parse_field_reports_field_name() {
        match Color::parse_field("background_color", "#12345") {
            Err(RenderError::MalformedColor { field, value }) => {
                assert_eq!(field, "background_color");
                assert_eq!(value, "#12345");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
