//! Front-end agnostic colour values.

use std::fmt;

/// An sRGB colour with 8-bit channels.
///
/// The model crate stays independent of any GUI toolkit; front ends convert
/// this into their own colour type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#10b981"), Some(Rgb::new(0x10, 0xb9, 0x81)));
        assert_eq!(Rgb::from_hex("ef4444"), Some(Rgb::new(0xef, 0x44, 0x44)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("#gggggg"), None);
        assert_eq!(Rgb::from_hex(""), None);
    }

    #[test]
    fn displays_as_lowercase_hex() {
        assert_eq!(Rgb::new(0xF5, 0x9E, 0x0B).to_string(), "#f59e0b");
    }
}
