//! Viewer reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use punchtape_core::Drawable;

use crate::common::Scrollbar;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::render;
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Frame { width, height } => handle_frame(app, width, height),
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
    }
}

/// Recomputes the layout and resizes the viewport when the pane changed.
fn handle_frame(app: &mut AppState, width: u16, height: u16) -> Vec<UiEffect> {
    let scale = app.pixels_per_dot();
    app.layout = render::layout(
        Rect::new(0, 0, width, height),
        app.view.model().tape_height(),
        scale,
    );

    let (visible_width, visible_height) = render::visible_size(app.layout.tape, scale);
    let viewport = app.view.viewport();
    if visible_width == viewport.visible_width() && visible_height == viewport.visible_height() {
        return vec![];
    }

    app.bounds = app.view.on_resize(visible_width, visible_height);
    tracing::debug!(
        visible_width,
        visible_height,
        max = app.bounds.max,
        offset = app.view.viewport().scroll_offset(),
        "viewport resized"
    );
    vec![UiEffect::Redraw]
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        // The Frame event that follows carries the new size.
        Event::Resize(_, _) => vec![UiEffect::Redraw],
        _ => vec![],
    }
}

fn redraw_if(changed: bool) -> Vec<UiEffect> {
    if changed {
        vec![UiEffect::Redraw]
    } else {
        vec![]
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let step = app.scroll_step();
    let page = app.view.viewport().visible_width().max(step);
    let viewport = app.view.viewport_mut();

    let changed = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return vec![UiEffect::Quit];
        }
        KeyCode::Char('q') | KeyCode::Esc => return vec![UiEffect::Quit],
        KeyCode::Left | KeyCode::Char('h') => viewport.scroll_by(-step),
        KeyCode::Right | KeyCode::Char('l') => viewport.scroll_by(step),
        KeyCode::PageUp => viewport.scroll_by(-page),
        KeyCode::PageDown | KeyCode::Char(' ') => viewport.scroll_by(page),
        KeyCode::Home | KeyCode::Char('g') => viewport.scroll_to_start(),
        KeyCode::End | KeyCode::Char('G') => viewport.scroll_to_end(),
        _ => false,
    };
    redraw_if(changed)
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    let step = app.scroll_step();
    let bar = app.layout.scrollbar;
    let on_bar = bar.contains(Position::new(mouse.column, mouse.row));

    let changed = match mouse.kind {
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            app.view.viewport_mut().scroll_by(step)
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
            app.view.viewport_mut().scroll_by(-step)
        }
        MouseEventKind::Down(MouseButton::Left) if on_bar => {
            app.dragging_scrollbar = true;
            scroll_to_pointer(app, mouse.column)
        }
        MouseEventKind::Drag(MouseButton::Left) if app.dragging_scrollbar => {
            scroll_to_pointer(app, mouse.column)
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.dragging_scrollbar = false;
            false
        }
        _ => false,
    };
    redraw_if(changed)
}

/// Scrollbar as an input source: pointer column to tape offset.
fn scroll_to_pointer(app: &mut AppState, column: u16) -> bool {
    let bar = app.layout.scrollbar;
    let scrollbar = Scrollbar::new(app.bounds, app.view.viewport().scroll_offset());
    let offset = scrollbar.offset_at(bar.width, column.saturating_sub(bar.x));
    app.view.viewport_mut().on_scroll(offset)
}
