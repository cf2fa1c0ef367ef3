//! Pixel canvas to terminal cells.
//!
//! Each cell shows two vertically stacked dots using the upper half block:
//! the foreground paints the top dot, the background the bottom one.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use punchtape_core::{PixelCanvas, Rgb};

const UPPER_HALF: &str = "▀";

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Blits a canvas whose dots map 1:1 to cell columns and half rows.
pub struct HalfBlockImage<'a> {
    canvas: &'a PixelCanvas,
}

impl<'a> HalfBlockImage<'a> {
    pub fn new(canvas: &'a PixelCanvas) -> Self {
        Self { canvas }
    }
}

impl Widget for HalfBlockImage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                let x = usize::from(col);
                let y = usize::from(row) * 2;
                let Some(top) = self.canvas.get(x, y) else {
                    continue;
                };
                let bottom = self.canvas.get(x, y + 1).unwrap_or(top);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(UPPER_HALF)
                        .set_fg(color(top))
                        .set_bg(color(bottom));
                }
            }
        }
    }
}
