//! Full-screen terminal viewer for punched tape.

pub mod common;
pub mod effects;
pub mod events;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use punchtape_core::{TapeView, ViewerConfig};
pub use runtime::TuiRuntime;
pub use state::AppState;

/// Runs the interactive viewer until the user quits.
pub fn run_viewer(view: TapeView, viewer: ViewerConfig, title: &str) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The viewer requires a terminal.\n\
             Use `punchtape --info <FILE>` or `punchtape --export <PNG> <FILE>` instead."
        );
    }

    tracing::info!(
        title,
        bytes = view.model().byte_count(),
        tape_width = view.model().tape_width(),
        "starting viewer"
    );

    let mut runtime = TuiRuntime::new(AppState::new(view, viewer, title))?;
    runtime.run()
}
