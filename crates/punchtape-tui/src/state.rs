//! Application state.
//!
//! ```text
//! AppState
//! ├── view: TapeView        (tape model + viewport + palette)
//! ├── viewer: ViewerConfig  (dot scale, scroll step, thumb size)
//! ├── bounds: ScrollBounds  (what the scrollbar shows)
//! ├── layout: AppLayout     (areas from the last Frame)
//! └── dragging_scrollbar    (left button held on the bar)
//! ```

use punchtape_core::{ScrollBounds, TapeView, ViewerConfig};

use crate::render::AppLayout;

pub struct AppState {
    pub view: TapeView,
    pub viewer: ViewerConfig,
    /// Shown in the status line, usually the input file name.
    pub title: String,
    pub bounds: ScrollBounds,
    pub layout: AppLayout,
    pub dragging_scrollbar: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(view: TapeView, viewer: ViewerConfig, title: impl Into<String>) -> Self {
        let bounds = view.viewport().bounds();
        Self {
            view,
            viewer,
            title: title.into(),
            bounds,
            layout: AppLayout::default(),
            dragging_scrollbar: false,
            should_quit: false,
        }
    }

    /// One scroll step in tape pixels.
    pub fn scroll_step(&self) -> i64 {
        i64::from(self.viewer.scroll_step_columns.max(1)) * self.view.model().geometry().hole_pitch()
    }

    pub fn pixels_per_dot(&self) -> u16 {
        self.viewer.pixels_per_dot.max(1)
    }
}
