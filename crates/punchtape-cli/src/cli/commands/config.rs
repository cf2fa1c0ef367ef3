//! Config command handlers.

use anyhow::Result;
use punchtape_core::Config;

pub fn print(config: &Config) -> Result<()> {
    let toml = config.generate()?;
    print!("{toml}");
    Ok(())
}
