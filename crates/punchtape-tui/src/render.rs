//! Pure view/render functions for the viewer.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use punchtape_core::{Drawable, PixelCanvas};

use crate::common::{HalfBlockImage, Scrollbar};
use crate::state::AppState;

/// Height of the scrollbar row below the tape.
const SCROLLBAR_HEIGHT: u16 = 1;

/// Height of the status line.
const STATUS_HEIGHT: u16 = 1;

const KEY_HELP: &str = "←/→ scroll  PgUp/PgDn page  Home/End  q quit ";

/// Screen areas, recomputed from the terminal size on every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppLayout {
    pub tape: Rect,
    pub scrollbar: Rect,
    pub status: Rect,
}

/// Splits the screen into tape pane, scrollbar row and status line.
///
/// The tape pane gets as many rows as the tape is tall, and no more.
pub fn layout(area: Rect, tape_height: i64, pixels_per_dot: u16) -> AppLayout {
    let pixels_per_row = i64::from(pixels_per_dot.max(1)) * 2;
    let tape_rows = ((tape_height + pixels_per_row - 1) / pixels_per_row).clamp(0, i64::from(u16::MAX));

    let [tape, scrollbar, status, _] = Layout::vertical([
        Constraint::Length(tape_rows as u16),
        Constraint::Length(SCROLLBAR_HEIGHT),
        Constraint::Length(STATUS_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(area);

    AppLayout {
        tape,
        scrollbar,
        status,
    }
}

/// Size of the tape pane in tape pixels.
pub fn visible_size(tape: Rect, pixels_per_dot: u16) -> (i64, i64) {
    let scale = i64::from(pixels_per_dot.max(1));
    (
        i64::from(tape.width) * scale,
        i64::from(tape.height) * 2 * scale,
    )
}

/// Renders the whole viewer to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let areas = layout(
        frame.area(),
        app.view.model().tape_height(),
        app.pixels_per_dot(),
    );

    render_tape(app, frame, areas.tape);
    frame.render_widget(
        Scrollbar::new(app.bounds, app.view.viewport().scroll_offset()),
        areas.scrollbar,
    );
    render_status_line(app, frame, areas.status);
}

fn render_tape(app: &AppState, frame: &mut Frame, area: Rect) {
    if area.is_empty() {
        return;
    }
    let scale = app.pixels_per_dot();
    let (width, height) = visible_size(area, scale);
    let mut canvas = PixelCanvas::new(width as usize, height as usize);
    app.view.render(&mut canvas);
    let dots = canvas.downsample(usize::from(scale));
    frame.render_widget(HalfBlockImage::new(&dots), area);
}

/// Status line text: file, size, offset and the columns on screen.
pub fn status_text(app: &AppState) -> String {
    let viewport = app.view.viewport();
    let columns = app.view.visible_columns();
    let shown = if columns.is_empty() {
        "none".to_string()
    } else {
        format!("{}-{}", columns.start, columns.end - 1)
    };
    format!(
        " {} │ {} bytes │ offset {}/{} px │ columns {}",
        app.title,
        app.view.model().byte_count(),
        viewport.scroll_offset(),
        viewport.max_offset(),
        shown,
    )
}

fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    if area.is_empty() {
        return;
    }
    let [left, right] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(KEY_HELP.chars().count() as u16),
    ])
    .areas(area);

    let status = Paragraph::new(Line::from(Span::styled(
        status_text(app),
        Style::default().fg(Color::Gray),
    )));
    frame.render_widget(status, left);

    let help = Paragraph::new(Line::from(Span::styled(
        KEY_HELP,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, right);
}
