//! Viewer configuration.
//!
//! Everything has a built-in default; an optional TOML file given on the
//! command line overrides individual keys:
//!
//! ```toml
//! [geometry]
//! hole_diameter = 12
//!
//! [palette]
//! tape = "#00cdff"
//!
//! [viewer]
//! pixels_per_dot = 3
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TapeError};
use crate::geometry::TapeGeometry;
use crate::surface::Rgb;
use crate::viewport::Viewport;

/// Colors used when drawing a tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Tape background (light blue paper).
    pub tape: Rgb,
    /// Punched data holes.
    pub punched: Rgb,
    /// Outline of unpunched positions, slightly darker than the tape.
    pub unpunched: Rgb,
    pub sprocket: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            tape: Rgb(0x00, 0xcd, 0xff),
            punched: Rgb::BLACK,
            unpunched: Rgb(0x00, 0xad, 0xdf),
            sprocket: Rgb::BLACK,
        }
    }
}

/// Terminal viewer settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Tape pixels per terminal dot, horizontally and vertically.
    /// A cell holds one dot across and two dots down.
    pub pixels_per_dot: u16,
    /// Scrollbar thumb size as a fraction of the track.
    pub thumb_fraction: f64,
    /// Columns moved by one arrow key press or wheel notch.
    pub scroll_step_columns: u16,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            pixels_per_dot: 3,
            thumb_fraction: Viewport::DEFAULT_THUMB_FRACTION,
            scroll_step_columns: 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub geometry: TapeGeometry,
    pub palette: Palette,
    pub viewer: ViewerConfig,
}

impl Config {
    /// Loads the config file at `path`, or the defaults when no path is given.
    ///
    /// # Errors
    /// Returns `TapeError::Config` when the file cannot be read or parsed, or
    /// when the values are out of range.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = fs::read_to_string(path).map_err(|e| TapeError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::parse(&contents).map_err(|message| TapeError::Config {
            path: path.to_path_buf(),
            message,
        })?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parses and validates TOML config text.
    fn parse(contents: &str) -> std::result::Result<Self, String> {
        let config: Config = toml::from_str(contents).map_err(|e| e.to_string())?;
        config.geometry.validate().map_err(|e| e.to_string())?;
        if config.viewer.pixels_per_dot == 0 {
            return Err("viewer.pixels_per_dot must be at least 1".to_string());
        }
        if !(0.0..=1.0).contains(&config.viewer.thumb_fraction) {
            return Err(format!(
                "viewer.thumb_fraction must be within 0.0..=1.0, got {}",
                config.viewer.thumb_fraction
            ));
        }
        Ok(config)
    }

    /// Renders this config as TOML.
    ///
    /// # Errors
    /// Returns `InvalidInput` if serialization fails.
    pub fn generate(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| TapeError::InvalidInput(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_no_path_gives_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.geometry.hole_pitch(), 15);
        assert_eq!(config.palette.tape, Rgb(0x00, 0xcd, 0xff));
    }

    #[test]
    fn test_partial_file_overrides_only_given_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[geometry]\nmargin = 10\n\n[palette]\ntape = \"#ffffff\"\n\n[viewer]\npixels_per_dot = 2"
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.geometry.margin, 10);
        assert_eq!(config.geometry.hole_diameter, 12);
        assert_eq!(config.palette.tape, Rgb(255, 255, 255));
        assert_eq!(config.palette.punched, Rgb::BLACK);
        assert_eq!(config.viewer.pixels_per_dot, 2);
        assert_eq!(config.viewer.scroll_step_columns, 1);
    }

    #[test]
    fn test_bad_color_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[palette]\ntape = \"blue\"").unwrap();
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, TapeError::Config { .. }));
    }

    #[test]
    fn test_invalid_geometry_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[geometry]\nhole_diameter = 0").unwrap();
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("hole_diameter"));
    }

    #[test]
    fn test_oversized_geometry_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[geometry]\nhole_diameter = 9223372036854775807").unwrap();
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, TapeError::Config { .. }));
        assert!(err.to_string().contains("hole_diameter"));
    }

    #[test]
    fn test_zero_pixels_per_dot_rejected() {
        assert!(Config::parse("[viewer]\npixels_per_dot = 0").is_err());
        assert!(Config::parse("[viewer]\nthumb_fraction = 1.5").is_err());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(err, TapeError::Config { .. }));
    }

    #[test]
    fn test_generate_parses_back_to_defaults() {
        let text = Config::default().generate().unwrap();
        assert!(text.contains("[geometry]"));
        assert!(text.contains("tape = \"#00cdff\""));
        assert_eq!(Config::parse(&text).unwrap(), Config::default());
    }
}
