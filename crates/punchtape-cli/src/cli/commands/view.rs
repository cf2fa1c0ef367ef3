//! Interactive viewer.

use anyhow::Result;
use punchtape_core::{Config, TapeModel};

#[cfg(feature = "tui")]
pub fn run(model: TapeModel, config: &Config, title: &str) -> Result<()> {
    let view = punchtape_core::TapeView::new(model, config.palette, config.viewer.thumb_fraction);
    punchtape_tui::run_viewer(view, config.viewer, title)
}

#[cfg(not(feature = "tui"))]
pub fn run(_model: TapeModel, _config: &Config, _title: &str) -> Result<()> {
    anyhow::bail!("Viewer support is disabled in this build (feature \"tui\"). Use --export or --info.");
}
