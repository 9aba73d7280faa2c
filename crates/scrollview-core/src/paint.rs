use crate::error::ConfigError;
use serde::Deserialize;
use std::fmt;

/// Straight-alpha sRGB color as consumed by the 2D canvas API.
///
/// Invariant: `a` is always in [0, 1]; constructors clamp.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parses `#RRGGBB` (case-insensitive, leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, ConfigError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConfigError::Color(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ConfigError::Color(hex.to_string()))
        };
        Ok(Self::opaque(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Same color with alpha replaced; non-finite alpha becomes fully transparent.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a: unit(a), ..self }
    }

    #[inline]
    pub fn is_visible(self) -> bool {
        self.a > 0.0
    }

    /// CSS color string, e.g. `rgba(0, 80, 255, 0.25)`.
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {:.4})", self.r, self.g, self.b, self.a)
    }
}

impl TryFrom<String> for Rgba {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgba::from_hex(&value)
    }
}

/// Clamp into [0, 1], mapping NaN to 0.
#[inline]
pub fn unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}
