use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const RED: Color = Color::from_rgb(255, 0, 0);
    pub const GREEN: Color = Color::from_rgb(0, 128, 0);
    pub const YELLOW: Color = Color::from_rgb(255, 255, 0);
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color::from_rgba(r, g, b, 255)
    }
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(r, g, b, a)
    }
    /// Lenient parse: malformed input yields opaque black. Use `str::parse`
    /// when the caller needs to know.
    pub fn from_hex(hex: &str) -> Self {
        hex.parse().unwrap_or(Color::BLACK)
    }
    pub fn with_alpha(self, a: u8) -> Self {
        Color::from_rgba(self.0, self.1, self.2, a)
    }
    /// `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.3 == 255 {
            format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.0, self.1, self.2, self.3)
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(hex: &str) -> Result<Self, Self::Err> {
        let s = hex.trim_start_matches('#');
        if s.len() != 6 && s.len() != 8 {
            return Err(ColorParseError::Length(s.len()));
        }
        let byte = |i: usize| {
            s.get(i..i + 2)
                .filter(|d| d.bytes().all(|b| b.is_ascii_hexdigit()))
                .and_then(|d| u8::from_str_radix(d, 16).ok())
                .ok_or_else(|| ColorParseError::Digit(hex.to_string()))
        };
        let a = if s.len() == 8 { byte(6)? } else { 255 };
        Ok(Color::from_rgba(byte(0)?, byte(2)?, byte(4)?, a))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
