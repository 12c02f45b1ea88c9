// src/color.rs

//! Defines `Color` and parsing of theme hex values.

use log::warn;
use serde::{Deserialize, Serialize};

/// Represents a color value used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    /// Resolved by the driver to the console's own default.
    #[default]
    Default,
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parses `#rrggbb`. Malformed input falls back to `Color::Default`.
    pub fn from_hex(hex: &str) -> Color {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            warn!("Color: invalid hex color '{}', using default", hex);
            return Color::Default;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16);
        match (channel(0..2), channel(2..4), channel(4..6)) {
            (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
            _ => {
                warn!("Color: invalid hex color '{}', using default", hex);
                Color::Default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_theme_hex_values() {
        assert_eq!(Color::from_hex("#0c0c0c"), Color::Rgb(12, 12, 12));
        assert_eq!(Color::from_hex("#00ff00"), Color::Rgb(0, 255, 0));
    }

    #[test]
    fn malformed_hex_falls_back_to_default() {
        assert_eq!(Color::from_hex("#12"), Color::Default);
        assert_eq!(Color::from_hex("#zzzzzz"), Color::Default);
    }
}
