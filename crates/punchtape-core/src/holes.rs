//! Hole layout: turns tape bytes into positioned draw commands.
//!
//! Columns are culled whole. A column is drawn when its center x lies in
//! `[0, visible_width]`; the holes inside it are never tested individually.

use std::ops::Range;

use crate::geometry::ROWS_PER_COLUMN;
use crate::model::TapeModel;

/// Channel masks from the top row to the bottom row.
pub const CHANNEL_MASKS: [u8; 8] = [0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01];

/// The sprocket row sits directly below this channel.
pub const SPROCKET_AFTER: u8 = 0x08;

/// Pixel size of the drawing area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleRect {
    pub width: i64,
    pub height: i64,
}

impl VisibleRect {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoleKind {
    /// A data channel; `mask` is the bit it encodes.
    Data { mask: u8 },
    Sprocket,
}

/// One circle to draw, in visible-area pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCommand {
    pub x: i64,
    pub y: i64,
    pub radius: i64,
    pub filled: bool,
    pub kind: HoleKind,
}

/// Whether column `index` passes the culling test.
pub fn column_visible(model: &TapeModel, scroll_offset: i64, visible_width: i64, index: usize) -> bool {
    let geometry = model.geometry();
    let px = geometry
        .margin
        .saturating_sub(scroll_offset)
        .saturating_add((index as i64).saturating_mul(geometry.hole_pitch()));
    (0..=visible_width).contains(&px)
}

/// Range of byte indices whose columns pass the culling test.
///
/// Solves `0 <= margin - offset + i * pitch <= width` for `i` instead of
/// testing every column, so long tapes cost only what is on screen.
pub fn visible_columns(model: &TapeModel, scroll_offset: i64, visible_width: i64) -> Range<usize> {
    let geometry = model.geometry();
    let pitch = geometry.hole_pitch();
    let start_x = geometry.margin.saturating_sub(scroll_offset);

    // ceil(-start_x / pitch) and floor((width - start_x) / pitch)
    let first = -(start_x.div_euclid(pitch));
    let last = visible_width.saturating_sub(start_x).div_euclid(pitch);
    if visible_width < 0 || last < 0 || first > last {
        return 0..0;
    }

    let count = model.byte_count() as i64;
    let lo = first.clamp(0, count) as usize;
    let hi = (last + 1).clamp(0, count) as usize;
    lo..hi.max(lo)
}

/// Produces the draw commands for every visible column, column by column.
///
/// Each visible column yields nine commands: the eight channels from 0x80
/// down to 0x01, with the sprocket inserted after 0x08.
pub fn generate_holes(model: &TapeModel, scroll_offset: i64, visible: VisibleRect) -> Vec<HoleCommand> {
    let geometry = model.geometry();
    let pitch = geometry.hole_pitch();
    let start_x = geometry.margin.saturating_sub(scroll_offset);
    let start_y = geometry.margin;
    let hole_radius = geometry.hole_radius();
    let sprocket_radius = geometry.sprocket_radius();

    let columns = visible_columns(model, scroll_offset, visible.width);
    let mut commands = Vec::with_capacity(columns.len() * ROWS_PER_COLUMN);

    for index in columns {
        let byte = model.bytes()[index];
        let px = start_x + index as i64 * pitch;
        let mut row = 0i64;

        for mask in CHANNEL_MASKS {
            commands.push(HoleCommand {
                x: px,
                y: start_y + row * pitch,
                radius: hole_radius,
                filled: byte & mask != 0,
                kind: HoleKind::Data { mask },
            });
            row += 1;

            if mask == SPROCKET_AFTER {
                commands.push(HoleCommand {
                    x: px,
                    y: start_y + row * pitch,
                    radius: sprocket_radius,
                    filled: true,
                    kind: HoleKind::Sprocket,
                });
                row += 1;
            }
        }
    }

    commands
}
