//! Drawing a tape onto a surface.
//!
//! `TapeView` owns the model and the viewport and is the only thing a host
//! needs to hold: it draws on demand and reacts to resizes.

use std::ops::Range;

use crate::config::Palette;
use crate::holes::{self, HoleCommand, HoleKind, VisibleRect};
use crate::model::TapeModel;
use crate::surface::DrawingSurface;
use crate::viewport::{ScrollBounds, Viewport};

/// Something a host can draw and resize.
pub trait Drawable {
    fn render(&self, surface: &mut dyn DrawingSurface);

    /// Applies a new drawing-area size and returns the scrollbar bounds.
    fn on_resize(&mut self, width: i64, height: i64) -> ScrollBounds;
}

#[derive(Debug, Clone)]
pub struct TapeView {
    model: TapeModel,
    viewport: Viewport,
    palette: Palette,
}

impl TapeView {
    /// Creates a view of `model` at offset 0 with an empty drawing area.
    /// Hosts call `on_resize` once they know their size.
    pub fn new(model: TapeModel, palette: Palette, thumb_fraction: f64) -> Self {
        let viewport = Viewport::new(model.tape_width(), 0, 0).with_thumb_fraction(thumb_fraction);
        Self {
            model,
            viewport,
            palette,
        }
    }

    pub fn model(&self) -> &TapeModel {
        &self.model
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Hole commands for the current offset and drawing area.
    pub fn holes(&self) -> Vec<HoleCommand> {
        let visible = VisibleRect::new(
            self.viewport.visible_width(),
            self.viewport.visible_height(),
        );
        holes::generate_holes(&self.model, self.viewport.scroll_offset(), visible)
    }

    /// Byte indices currently on screen.
    pub fn visible_columns(&self) -> Range<usize> {
        holes::visible_columns(
            &self.model,
            self.viewport.scroll_offset(),
            self.viewport.visible_width(),
        )
    }
}

impl Drawable for TapeView {
    fn render(&self, surface: &mut dyn DrawingSurface) {
        let (width, height) = surface.size();
        surface.fill_rect(0, 0, width, height, self.palette.tape);

        for hole in self.holes() {
            match hole.kind {
                HoleKind::Sprocket => {
                    surface.fill_circle(hole.x, hole.y, hole.radius, self.palette.sprocket);
                }
                HoleKind::Data { .. } if hole.filled => {
                    surface.fill_circle(hole.x, hole.y, hole.radius, self.palette.punched);
                }
                HoleKind::Data { .. } => {
                    surface.stroke_circle(hole.x, hole.y, hole.radius, self.palette.unpunched);
                }
            }
        }
    }

    fn on_resize(&mut self, width: i64, height: i64) -> ScrollBounds {
        self.viewport.on_resize(width, height)
    }
}
