//! Drawing capabilities the renderer needs from a pixel target.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 24-bit color. Serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("expected a color like #00cdff, got '{s}'"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| format!("invalid color '{s}': {e}"))
        };
        Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// A pixel target that can draw the primitives a tape is made of.
///
/// Coordinates may fall partly or fully outside the surface; implementations
/// clip.
pub trait DrawingSurface {
    /// Width and height in pixels.
    fn size(&self) -> (i64, i64);

    fn fill_rect(&mut self, x: i64, y: i64, width: i64, height: i64, color: Rgb);

    fn fill_circle(&mut self, cx: i64, cy: i64, radius: i64, color: Rgb);

    /// Draws a one pixel circle outline.
    fn stroke_circle(&mut self, cx: i64, cy: i64, radius: i64, color: Rgb);
}
