//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use punchtape_core::{Config, TapeModel};

use crate::logging::{self, LogTarget};

mod commands;

#[derive(Parser)]
#[command(name = "punchtape")]
#[command(version)]
#[command(about = "Facit N4000 punch tape viewer for raw 8-channel tape data")]
struct Cli {
    /// Raw tape data, one byte per column
    #[arg(value_name = "FILE", required_unless_present = "print_config")]
    file: Option<PathBuf>,

    /// TOML file overriding geometry, palette and viewer settings
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Render the whole tape to a PNG file instead of opening the viewer
    #[arg(long, value_name = "PNG", conflicts_with = "info")]
    export: Option<PathBuf>,

    /// Print tape dimensions and exit
    #[arg(long)]
    info: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. "warn", "debug" or "punchtape_core=trace"
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn is_headless(&self) -> bool {
        self.info || self.print_config || self.export.is_some()
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let target = match cli.log_file.as_deref() {
        Some(path) => LogTarget::File(path),
        None if cli.is_headless() => LogTarget::Stderr,
        None => LogTarget::Off,
    };
    logging::init(target, &cli.log_level)?;

    dispatch(cli)
}

fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).context("load config")?;

    if cli.print_config {
        return commands::config::print(&config);
    }

    let Some(file) = cli.file else {
        anyhow::bail!("no tape file given");
    };
    let model = TapeModel::open(&file, config.geometry)?;
    tracing::info!(path = %file.display(), bytes = model.byte_count(), "tape loaded");

    if cli.info {
        commands::info::print(&file, &model);
        return Ok(());
    }

    if let Some(png) = cli.export {
        return commands::export::run(model, &config, &png);
    }

    let title = file
        .file_name()
        .map_or_else(|| file.display().to_string(), |n| n.to_string_lossy().into_owned());
    commands::view::run(model, &config, &title)
}
