//! Horizontal scroll state for a tape wider than the drawing area.
//!
//! The offset is kept inside `[0, max(0, tape_width - visible_width)]` after
//! every scroll and resize. A view that sits at the very end of a scrollable
//! tape stays at the end when the area is resized.

/// Bounds the scrollbar should represent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBounds {
    pub min: i64,
    pub max: i64,
    /// Thumb length as a fraction of the track.
    pub thumb_fraction: f64,
}

impl ScrollBounds {
    /// True when the tape fits and there is nothing to scroll.
    pub fn is_collapsed(&self) -> bool {
        self.max <= self.min
    }
}

#[derive(Debug, Clone)]
pub struct Viewport {
    tape_width: i64,
    scroll_offset: i64,
    visible_width: i64,
    visible_height: i64,
    thumb_fraction: f64,
}

impl Viewport {
    pub const DEFAULT_THUMB_FRACTION: f64 = 0.10;

    /// Creates a viewport scrolled to the start of the tape.
    pub fn new(tape_width: i64, visible_width: i64, visible_height: i64) -> Self {
        Self {
            tape_width,
            scroll_offset: 0,
            visible_width,
            visible_height,
            thumb_fraction: Self::DEFAULT_THUMB_FRACTION,
        }
    }

    #[must_use]
    pub fn with_thumb_fraction(mut self, fraction: f64) -> Self {
        self.thumb_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    pub fn scroll_offset(&self) -> i64 {
        self.scroll_offset
    }

    pub fn visible_width(&self) -> i64 {
        self.visible_width
    }

    pub fn visible_height(&self) -> i64 {
        self.visible_height
    }

    pub fn tape_width(&self) -> i64 {
        self.tape_width
    }

    /// Largest valid offset; zero when the whole tape fits.
    pub fn max_offset(&self) -> i64 {
        (self.tape_width - self.visible_width).max(0)
    }

    pub fn bounds(&self) -> ScrollBounds {
        ScrollBounds {
            min: 0,
            max: self.max_offset(),
            thumb_fraction: self.thumb_fraction,
        }
    }

    /// Applies a scroll request. Returns true when the offset changed and
    /// the drawing area needs a redraw.
    pub fn on_scroll(&mut self, new_offset: i64) -> bool {
        let clamped = new_offset.clamp(0, self.max_offset());
        if clamped != new_offset {
            tracing::debug!(requested = new_offset, clamped, "scroll offset clamped");
        }
        let changed = clamped != self.scroll_offset;
        self.scroll_offset = clamped;
        changed
    }

    /// Scrolls relative to the current offset.
    pub fn scroll_by(&mut self, delta: i64) -> bool {
        self.on_scroll(self.scroll_offset.saturating_add(delta))
    }

    pub fn scroll_to_start(&mut self) -> bool {
        self.on_scroll(0)
    }

    pub fn scroll_to_end(&mut self) -> bool {
        self.on_scroll(self.max_offset())
    }

    /// Applies a new drawing-area size and returns the scrollbar bounds for it.
    pub fn on_resize(&mut self, visible_width: i64, visible_height: i64) -> ScrollBounds {
        let old_max = self.max_offset();
        let pinned_to_end = old_max > 0 && self.scroll_offset == old_max;

        self.visible_width = visible_width;
        self.visible_height = visible_height;

        let new_max = self.max_offset();
        let offset = if pinned_to_end {
            new_max
        } else {
            self.scroll_offset.min(new_max)
        };
        if offset != self.scroll_offset {
            tracing::debug!(
                from = self.scroll_offset,
                to = offset,
                visible_width,
                "scroll offset re-clamped on resize"
            );
        }
        self.scroll_offset = offset;

        self.bounds()
    }
}
