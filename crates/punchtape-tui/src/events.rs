//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`.

use crossterm::event::Event;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Current terminal size, sent first on every loop iteration so a resize
    /// is applied before any event or render reads the scroll offset.
    Frame { width: u16, height: u16 },
    /// Raw terminal input (keys, mouse, resize).
    Terminal(Event),
}
