//! Hex colors and linear gradients.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ColorParseError;
use crate::util::rgb_to_ansi256;

/// An sRGB color.
///
/// Displays (and serializes) as an uppercase `#RRGGBB` literal.
///
/// # Example
///
/// ```rust
/// use moodswitch::Color;
///
/// let dark: Color = "#333".parse().unwrap();
/// assert_eq!(dark, Color::from_hex(0x333333));
/// assert_eq!(dark.to_string(), "#333333");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Creates a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a packed `0xRRGGBB` value.
    pub const fn from_hex(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Returns the `(r, g, b)` triplet.
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Nearest entry in the ANSI 256-color palette.
    pub fn to_ansi256(self) -> u8 {
        rgb_to_ansi256(self.to_rgb())
    }

    /// Interpolates linearly towards `other`; `t` is clamped to `[0, 1]`.
    pub fn mix(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 {
            (a as f32 + (b as f32 - a as f32) * t).round() as u8
        };
        Color::rgb(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parses `#RGB` or `#RRGGBB`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(s.to_string()));
        }

        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => digits.to_string(),
            _ => return Err(ColorParseError::BadLength(s.to_string())),
        };
        let packed = u32::from_str_radix(&expanded, 16)
            .map_err(|_| ColorParseError::BadDigit(s.to_string()))?;
        Ok(Color::from_hex(packed))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A two-stop linear gradient.
///
/// Displays as the CSS form, e.g. `linear-gradient(135deg, #FFD700, #FFA500)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientSpec {
    pub angle_deg: u16,
    pub from: Color,
    pub to: Color,
}

impl GradientSpec {
    pub const fn new(angle_deg: u16, from: Color, to: Color) -> Self {
        Self { angle_deg, from, to }
    }

    /// Color at position `t` along the gradient axis (clamped to `[0, 1]`).
    pub fn sample(&self, t: f32) -> Color {
        self.from.mix(self.to, t)
    }
}

impl fmt::Display for GradientSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "linear-gradient({}deg, {}, {})",
            self.angle_deg, self.from, self.to
        )
    }
}

impl Serialize for GradientSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parse_long_form() {
        assert_eq!("#FF6B6B".parse::<Color>(), Ok(Color::rgb(0xFF, 0x6B, 0x6B)));
        assert_eq!("#ff6b6b".parse::<Color>(), Ok(Color::rgb(0xFF, 0x6B, 0x6B)));
    }

    #[test]
    fn test_color_parse_short_form() {
        assert_eq!("#333".parse::<Color>(), Ok(Color::from_hex(0x333333)));
        assert_eq!("#fa0".parse::<Color>(), Ok(Color::from_hex(0xFFAA00)));
    }

    #[test]
    fn test_color_parse_errors() {
        assert!(matches!(
            "FFD700".parse::<Color>(),
            Err(ColorParseError::MissingHash(_))
        ));
        assert!(matches!(
            "#FFD7".parse::<Color>(),
            Err(ColorParseError::BadLength(_))
        ));
        assert!(matches!(
            "#GGGGGG".parse::<Color>(),
            Err(ColorParseError::BadDigit(_))
        ));
        assert!(matches!(
            "#+FFFFF".parse::<Color>(),
            Err(ColorParseError::BadDigit(_))
        ));
    }

    #[test]
    fn test_color_display_uppercase() {
        assert_eq!(Color::from_hex(0x4ecdc4).to_string(), "#4ECDC4");
    }

    #[test]
    fn test_color_mix_endpoints_and_midpoint() {
        let black = Color::rgb(0, 0, 0);
        let white = Color::rgb(255, 255, 255);
        assert_eq!(black.mix(white, 0.0), black);
        assert_eq!(black.mix(white, 1.0), white);
        assert_eq!(black.mix(white, 0.5), Color::rgb(128, 128, 128));
        assert_eq!(black.mix(white, 7.0), white);
    }

    #[test]
    fn test_gradient_display_css() {
        let gradient = GradientSpec::new(
            135,
            Color::from_hex(0xFFD700),
            Color::from_hex(0xFFA500),
        );
        assert_eq!(
            gradient.to_string(),
            "linear-gradient(135deg, #FFD700, #FFA500)"
        );
        assert_eq!(gradient.sample(0.0), gradient.from);
        assert_eq!(gradient.sample(1.0), gradient.to);
    }

    #[test]
    fn test_color_serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::from_hex(0x2C3E50)).unwrap();
        assert_eq!(json, "\"#2C3E50\"");
    }
}
