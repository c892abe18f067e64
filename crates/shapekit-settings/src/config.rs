//! Configuration and settings management for ShapeKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, chosen by file extension. The default location is
//! `<platform config dir>/shapekit/config.toml`.
//!
//! Configuration is organized into logical sections:
//! - Canvas settings (header strip, window size limits)
//! - Tool defaults (new shape size, move/resize steps, initial color)

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use shapekit_core::{Color, MIN_SIZE};
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "shapekit";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Largest move or resize step, and largest initial shape size, in pixels.
pub const MAX_STEP: i32 = 10_000;

/// Window and canvas geometry.
///
/// The drawable canvas is the window minus a header strip of
/// `header_height` pixels at the top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Height of the toolbar strip above the canvas
    pub header_height: i32,
    /// Smallest window width the editor allows
    pub min_window_width: i32,
    /// Smallest window height the editor allows
    pub min_window_height: i32,
    /// Window width at startup
    pub initial_window_width: i32,
    /// Window height at startup
    pub initial_window_height: i32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            header_height: 80,
            min_window_width: 750,
            min_window_height: 180,
            initial_window_width: 800,
            initial_window_height: 600,
        }
    }
}

/// Defaults applied when placing and editing shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Width (and nominal height) of a newly placed shape
    pub initial_size: i32,
    /// Pixels moved per move command
    pub move_step: i32,
    /// Margin added or removed on every side per grow/shrink command
    pub resize_step: i32,
    /// Fill color of newly placed shapes
    pub initial_color: Color,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            initial_size: 50,
            move_step: 5,
            resize_step: 5,
            initial_color: Color::BLACK,
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Canvas and window geometry
    pub canvas: CanvasSettings,
    /// Tool defaults
    pub tools: ToolSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load `path` when given, else the default location when it exists,
    /// else the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Some(default) if default.exists() => Self::load_from_file(&default),
            _ => Ok(Self::default()),
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_for(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let canvas = &self.canvas;
        if canvas.header_height < 0 {
            return Err(SettingsError::invalid(
                "canvas.header_height",
                "must not be negative",
            ));
        }
        if canvas.min_window_width <= 0 || canvas.min_window_height <= canvas.header_height {
            return Err(SettingsError::invalid(
                "canvas.min_window_size",
                "minimum window must leave a non-empty canvas",
            ));
        }
        if canvas.initial_window_width < canvas.min_window_width
            || canvas.initial_window_height < canvas.min_window_height
        {
            return Err(SettingsError::invalid(
                "canvas.initial_window_size",
                "must not be smaller than the minimum window size",
            ));
        }

        let tools = &self.tools;
        if tools.initial_size < MIN_SIZE {
            return Err(SettingsError::invalid(
                "tools.initial_size",
                format!("must be at least {}", MIN_SIZE),
            ));
        }
        if tools.initial_size > MAX_STEP {
            return Err(SettingsError::invalid(
                "tools.initial_size",
                format!("must be at most {}", MAX_STEP),
            ));
        }
        for (field, step) in [
            ("tools.move_step", tools.move_step),
            ("tools.resize_step", tools.resize_step),
        ] {
            if !(1..=MAX_STEP).contains(&step) {
                return Err(SettingsError::invalid(
                    field,
                    format!("must be between 1 and {}", MAX_STEP),
                ));
            }
        }

        Ok(())
    }
}
