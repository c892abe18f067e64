//! ShapeKit Settings Crate
//!
//! Handles editor configuration: canvas geometry, tool defaults and the
//! on-disk settings file.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, ToolSettings};
pub use error::{SettingsError, SettingsResult};
