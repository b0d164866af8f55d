//! KML colors.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ScalarError;

/// A color in KML's `aabbggrr` channel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub alpha: u8,
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl Color {
    /// Opaque white, `ffffffff`.
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff, 0xff);
    /// Opaque black, `ff000000`.
    pub const BLACK: Self = Self::new(0xff, 0x00, 0x00, 0x00);

    /// Build a color from channels in `aabbggrr` order.
    pub const fn new(alpha: u8, blue: u8, green: u8, red: u8) -> Self {
        Self {
            alpha,
            blue,
            green,
            red,
        }
    }

    /// Parse eight hex digits, optionally prefixed with `#`.
    pub fn parse(text: &str) -> Result<Self, ScalarError> {
        let hex = text.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 8 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ScalarError::new("color", text));
        }
        let channel = |at: usize| {
            u8::from_str_radix(&hex[at..at + 2], 16).map_err(|_| ScalarError::new("color", text))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}",
            self.alpha, self.blue, self.green, self.red
        )
    }
}

impl FromStr for Color {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
