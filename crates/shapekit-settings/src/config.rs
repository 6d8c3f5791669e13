//! Editor configuration for ShapeKit
//!
//! Holds the settings an editing session reads while it formats field text
//! and validates geometry:
//! - Measurement system and display precision for length and angle fields
//! - The arc range policy used when rejecting near-infinite-radius arcs
//!
//! Configuration files may be JSON or TOML, chosen by file extension.

use std::path::{Path, PathBuf};

pub use shapekit_core::units::MeasurementSystem;
use serde::{Deserialize, Serialize};
use shapekit_core::COORD_LIMIT;

use crate::error::{SettingsError, SettingsResult};

/// Largest supported number of decimal places for field text.
pub const MAX_PRECISION: usize = 9;

/// Default arc range policy: half of the coordinate range.
pub const DEFAULT_ARC_RANGE_FRACTION: f64 = 0.5;

const CONFIG_DIR_NAME: &str = "shapekit";
const CONFIG_FILE_NAME: &str = "editor.toml";

/// Editor settings consumed by editing sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Units used to display and parse length fields
    pub measurement_system: MeasurementSystem,
    /// Decimal places shown in length fields
    pub length_precision: usize,
    /// Decimal places shown in angle fields
    pub angle_precision: usize,
    /// Fraction of the coordinate range an arc's center plus radius may reach
    pub arc_range_fraction: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            measurement_system: MeasurementSystem::Metric,
            length_precision: 4,
            angle_precision: 3,
            arc_range_fraction: DEFAULT_ARC_RANGE_FRACTION,
        }
    }
}

#[derive(Clone, Copy)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Magnitude an arc's `|center| + radius` must stay below.
    pub fn arc_range_limit(&self) -> f64 {
        self.arc_range_fraction * COORD_LIMIT
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded editor config");
        Ok(config)
    }

    /// Load config from file, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no editor config, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = ConfigFormat::from_path(path)?;

        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "saved editor config");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.length_precision > MAX_PRECISION {
            return Err(SettingsError::invalid(
                "length_precision",
                format!("must be at most {}", MAX_PRECISION),
            ));
        }

        if self.angle_precision > MAX_PRECISION {
            return Err(SettingsError::invalid(
                "angle_precision",
                format!("must be at most {}", MAX_PRECISION),
            ));
        }

        if !(self.arc_range_fraction > 0.0 && self.arc_range_fraction <= 1.0) {
            return Err(SettingsError::invalid(
                "arc_range_fraction",
                format!("{} is not in (0, 1]", self.arc_range_fraction),
            ));
        }

        Ok(())
    }
}

/// Platform config location, e.g. `~/.config/shapekit/editor.toml`.
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".into())
        })
}
