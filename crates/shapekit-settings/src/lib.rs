//! ShapeKit Settings Crate
//!
//! Handles editor configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{default_config_path, EditorConfig, MeasurementSystem};
pub use error::{SettingsError, SettingsResult};
