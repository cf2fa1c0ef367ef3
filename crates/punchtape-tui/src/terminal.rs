//! Raw mode, alternate screen and mouse capture for the viewer.
//!
//! The screen is handed back on drop of the runtime and from the panic hook,
//! so a crash never leaves the shell in raw mode.

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type TapeTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Switches stdout to raw mode on the alternate screen.
///
/// Install the panic hook first.
///
/// # Errors
/// Fails if stdout rejects any of the mode changes.
pub fn setup_terminal() -> Result<TapeTerminal> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("create terminal")
}

/// Turns on mouse reporting for the wheel and scrollbar drags.
///
/// # Errors
/// Fails if the escape sequence cannot be written.
pub fn enable_mouse() -> Result<()> {
    execute!(io::stdout(), EnableMouseCapture).context("enable mouse capture")
}

/// # Errors
/// Fails if the escape sequence cannot be written.
pub fn disable_mouse() -> Result<()> {
    execute!(io::stdout(), DisableMouseCapture).context("disable mouse capture")
}

/// Leaves the alternate screen and raw mode. Safe to call twice.
///
/// # Errors
/// Fails if stdout rejects the mode changes.
pub fn restore_terminal() -> Result<()> {
    // Mouse reporting has to stop while still in raw mode.
    let _ = disable_mouse();
    execute!(io::stdout(), LeaveAlternateScreen).context("leave alternate screen")?;
    disable_raw_mode().context("disable raw mode")
}

/// Restores the screen before the default hook prints the panic.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}
