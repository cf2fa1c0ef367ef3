//! Viewer runtime: owns the terminal, runs the event loop, executes effects.
//!
//! This is the only place with side effects. The reducer stays pure and
//! returns effects; this module executes them and renders when something
//! changed.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// How long to block waiting for input. Nothing animates, so the loop only
/// wakes to notice a resize that produced no event.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(250);

/// Full-screen viewer runtime.
///
/// Terminal state is restored on drop or panic.
pub struct TuiRuntime {
    terminal: terminal::TapeTerminal,
    pub state: AppState,
    /// Set by `UiEffect::Redraw`, cleared after each draw.
    dirty: bool,
}

impl TuiRuntime {
    /// Enters the alternate screen and takes ownership of the state.
    pub fn new(state: AppState) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        let terminal = terminal::setup_terminal().context("set up terminal")?;

        Ok(Self {
            terminal,
            state,
            dirty: true,
        })
    }

    /// Runs the main event loop until a quit effect.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_mouse()?;

        let result = self.event_loop();

        let _ = terminal::disable_mouse();

        result
    }

    fn event_loop(&mut self) -> Result<()> {
        while !self.state.should_quit {
            let mut events = self.collect_events()?;

            // Size goes first so layout and clamping happen before input and render.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if self.dirty && !self.state.should_quit {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                self.dirty = false;
            }
        }

        tracing::info!("viewer closed");
        Ok(())
    }

    /// Blocks for the first terminal event, then drains whatever is buffered.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();
        if event::poll(IDLE_POLL_DURATION)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }
        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            match effect {
                UiEffect::Quit => {
                    self.state.should_quit = true;
                }
                UiEffect::Redraw => {
                    self.dirty = true;
                }
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
