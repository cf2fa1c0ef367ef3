//! Tape format constants and the pixel sizes derived from them.
//!
//! ```text
//!  ____________________
//!
//!     O O O O O O O       <- 0x80
//!     O O O O O O O       <- 0x40
//!     O O O O O O O       <- 0x20
//!     O O O O O O O       <- 0x10
//!     O O O O O O O       <- 0x08
//!     . . . . . . .       <- sprockets
//!     O O O O O O O       <- 0x04
//!     O O O O O O O       <- 0x02
//!     O O O O O O O       <- 0x01
//!  ____________________
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, TapeError};

/// Number of data channels on the tape.
pub const CHANNELS: usize = 8;

/// Rows drawn per column: the data channels plus the sprocket row.
pub const ROWS_PER_COLUMN: usize = CHANNELS + 1;

/// Pixel dimensions of the tape format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TapeGeometry {
    /// Diameter of a data hole.
    pub hole_diameter: i64,
    /// Gap between neighbouring holes.
    pub hole_spacing: i64,
    /// Diameter of a sprocket hole.
    pub sprocket_diameter: i64,
    /// Leader at each end of the tape, also the top inset of the first row.
    pub margin: i64,
}

impl Default for TapeGeometry {
    fn default() -> Self {
        Self {
            hole_diameter: Self::DEFAULT_HOLE_DIAMETER,
            hole_spacing: Self::DEFAULT_HOLE_SPACING,
            sprocket_diameter: Self::DEFAULT_SPROCKET_DIAMETER,
            margin: Self::DEFAULT_MARGIN,
        }
    }
}

impl TapeGeometry {
    pub const DEFAULT_HOLE_DIAMETER: i64 = 12;
    pub const DEFAULT_HOLE_SPACING: i64 = 3;
    pub const DEFAULT_SPROCKET_DIAMETER: i64 = 5;
    pub const DEFAULT_MARGIN: i64 = 50;

    /// Center-to-center distance between adjacent holes.
    pub fn hole_pitch(&self) -> i64 {
        self.hole_diameter + self.hole_spacing
    }

    pub fn hole_radius(&self) -> i64 {
        self.hole_diameter / 2
    }

    pub fn sprocket_radius(&self) -> i64 {
        self.sprocket_diameter / 2
    }

    /// Full tape length in pixels, leaders included.
    pub fn tape_width(&self, byte_count: usize) -> i64 {
        (byte_count as i64)
            .saturating_mul(self.hole_pitch())
            .saturating_add(2 * self.margin)
    }

    /// Tape height in pixels. Independent of the byte count.
    pub fn tape_height(&self) -> i64 {
        CHANNELS as i64 * self.hole_diameter + CHANNELS as i64 * self.hole_spacing + self.margin
    }

    /// Rejects geometries that would make the pitch or a radius degenerate,
    /// or large enough to overflow the derived sizes.
    ///
    /// # Errors
    /// Returns `InvalidInput` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        check_range("hole_diameter", self.hole_diameter, 1)?;
        check_range("sprocket_diameter", self.sprocket_diameter, 1)?;
        check_range("hole_spacing", self.hole_spacing, 0)?;
        check_range("margin", self.margin, 0)?;
        Ok(())
    }
}

/// Upper bound for every geometry field, in pixels.
pub const MAX_DIMENSION: i64 = 10_000;

fn check_range(field: &str, value: i64, min: i64) -> Result<()> {
    if (min..=MAX_DIMENSION).contains(&value) {
        return Ok(());
    }
    Err(TapeError::InvalidInput(format!(
        "{field} must be within {min}..={MAX_DIMENSION}, got {value}"
    )))
}
