//! Color value types.

use std::fmt;
use std::str::FromStr;

use crate::config::DEFAULT_BACKGROUND;
use crate::core::color::is_valid_hex;
use crate::core::error::ColorError;

/// A committed hex color (`#RGB` or `#RRGGBB`).
///
/// Can only be constructed from text that passes [`is_valid_hex`], so any
/// `HexColor` in the application is safe to hand to CSS or to the embed
/// snippet. The original spelling (including case) is preserved.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Parse a hex color, rejecting anything but `#` + 3 or 6 hex digits.
    pub fn parse(text: &str) -> Result<Self, ColorError> {
        if is_valid_hex(text) {
            Ok(Self(text.to_string()))
        } else {
            Err(ColorError::InvalidHex(text.to_string()))
        }
    }

    /// Build a lowercase `#rrggbb` color from channel values.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    /// The color exactly as committed.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Expand to lowercase `#rrggbb`.
    ///
    /// `<input type="color">` only understands the six-digit form.
    pub fn to_rrggbb(&self) -> String {
        let digits = &self.0[1..];
        let full: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        };
        format!("#{}", full.to_ascii_lowercase())
    }

    /// Whether two spellings name the same color (`#FFF` == `#ffffff`).
    pub fn same_color(&self, other: &HexColor) -> bool {
        self.to_rrggbb() == other.to_rrggbb()
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self(DEFAULT_BACKGROUND.to_string())
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// HSL color with hue in degrees and saturation/lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// Hue in `[0, 360)`.
    pub hue: f64,
    /// Saturation in `[0, 100]`.
    pub saturation: f64,
    /// Lightness in `[0, 100]`.
    pub lightness: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_spelling() {
        let color = HexColor::parse("#AbC").unwrap();
        assert_eq!(color.as_str(), "#AbC");
        assert_eq!(color.to_string(), "#AbC");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert_eq!(
            HexColor::parse("ABCDEF"),
            Err(ColorError::InvalidHex("ABCDEF".to_string()))
        );
        assert!("#12345".parse::<HexColor>().is_err());
    }

    #[test]
    fn test_to_rrggbb() {
        assert_eq!(HexColor::parse("#ABC").unwrap().to_rrggbb(), "#aabbcc");
        assert_eq!(HexColor::parse("#C7BCFF").unwrap().to_rrggbb(), "#c7bcff");
    }

    #[test]
    fn test_same_color() {
        let short = HexColor::parse("#fff").unwrap();
        assert!(short.same_color(&HexColor::default()));
        assert!(!short.same_color(&HexColor::parse("#F7F7F7").unwrap()));
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(HexColor::default().as_str(), "#FFFFFF");
    }
}
