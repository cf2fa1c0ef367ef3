//! Horizontal scrollbar with a fixed-fraction thumb.
//!
//! The thumb length is a constant share of the track (not proportional to
//! the visible share of the tape), and it reaches exactly the right edge at
//! the maximum offset. The same math maps a pointer column back to an offset,
//! which is how clicks and drags on the bar scroll the tape.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use punchtape_core::ScrollBounds;

/// Symbol for the thumb (scrollable indicator).
const THUMB_SYMBOL: &str = "█";
/// Symbol for the track (background).
const TRACK_SYMBOL: &str = "─";

/// Implements the `Widget` trait for use with `frame.render_widget()`.
#[derive(Debug, Clone, Copy)]
pub struct Scrollbar {
    bounds: ScrollBounds,
    /// Current scroll offset in tape pixels.
    offset: i64,
}

impl Scrollbar {
    pub fn new(bounds: ScrollBounds, offset: i64) -> Self {
        Self { bounds, offset }
    }

    /// Only shows when there's something to scroll.
    fn should_display(&self) -> bool {
        !self.bounds.is_collapsed()
    }

    fn range(&self) -> i64 {
        self.bounds.max - self.bounds.min
    }

    /// Thumb length in cells: `round(track * fraction)`, at least one cell.
    pub fn thumb_len(&self, track_len: u16) -> u16 {
        if track_len == 0 {
            return 0;
        }
        let len = (f64::from(track_len) * self.bounds.thumb_fraction).round() as u16;
        len.clamp(1, track_len)
    }

    /// First thumb cell, counted from the left edge of the track.
    pub fn thumb_start(&self, track_len: u16) -> u16 {
        let range = self.range();
        if range <= 0 {
            return 0;
        }
        let available = i64::from(track_len - self.thumb_len(track_len));
        let offset = (self.offset - self.bounds.min).clamp(0, range);
        (offset * available / range) as u16
    }

    /// Offset that puts the thumb center under `column` (relative to the track).
    pub fn offset_at(&self, track_len: u16, column: u16) -> i64 {
        let range = self.range();
        let thumb = self.thumb_len(track_len);
        let available = i64::from(track_len.saturating_sub(thumb));
        if range <= 0 || available == 0 {
            return self.bounds.min;
        }
        let start = (i64::from(column) - i64::from(thumb / 2)).clamp(0, available);
        // Round to nearest so the right edge lands exactly on max.
        self.bounds.min + (start * range + available / 2) / available
    }
}

impl Widget for Scrollbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.should_display() || area.width == 0 || area.height == 0 {
            return;
        }

        let track_len = area.width;
        let thumb_start = self.thumb_start(track_len);
        let thumb_end = thumb_start + self.thumb_len(track_len);

        for (idx, x) in (area.x..area.x + area.width).enumerate() {
            let idx = idx as u16;
            let (symbol, style) = if idx >= thumb_start && idx < thumb_end {
                (THUMB_SYMBOL, Style::default().fg(Color::Cyan))
            } else {
                (TRACK_SYMBOL, Style::default().fg(Color::DarkGray))
            };
            buf.set_string(x, area.y, symbol, style);
        }
    }
}
