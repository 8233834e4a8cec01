//! Display settings for Floorplanner
//!
//! Grid, color and theme preferences. Every field has a default and the
//! struct deserializes with `#[serde(default)]`, so a record written by an
//! older version merges over the current defaults field by field.
//!
//! Settings can also be exported to and imported from `.json` or `.toml`
//! preset files.

use floorplanner_core::constants::{
    DEFAULT_ACCENT_COLOR, DEFAULT_GRID_OPACITY, DEFAULT_GRID_SIZE, MIN_GRID_SIZE,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "Light"),
            Self::Dark => write!(f, "Dark"),
        }
    }
}

/// Editing tool. `Select` drags and resizes; `Edit` is reserved for
/// point editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTool {
    #[default]
    Select,
    Edit,
}

/// Grid, color and theme preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplaySettings {
    /// Grid cell size in inches
    pub grid_size: f64,
    /// Grid line opacity (0.0 - 1.0)
    pub grid_opacity: f64,
    /// Room outline color (`#rrggbb`)
    pub wall_color: String,
    /// Selection highlight color (`#rrggbb`)
    pub highlight_color: String,
    /// Color theme
    pub theme: Theme,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            grid_opacity: DEFAULT_GRID_OPACITY,
            wall_color: DEFAULT_ACCENT_COLOR.to_string(),
            highlight_color: DEFAULT_ACCENT_COLOR.to_string(),
            theme: Theme::default(),
        }
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

impl DisplaySettings {
    /// Create settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a preset file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match extension(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a preset file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "Saved display settings");
        Ok(())
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        if !self.grid_size.is_finite() || self.grid_size < MIN_GRID_SIZE {
            return Err(invalid("grid_size", "must be at least 1 inch"));
        }

        if !(0.0..=1.0).contains(&self.grid_opacity) {
            return Err(invalid("grid_opacity", "must be between 0 and 1"));
        }

        if !is_hex_color(&self.wall_color) {
            return Err(invalid("wall_color", "must be a #rrggbb color"));
        }

        if !is_hex_color(&self.highlight_color) {
            return Err(invalid("highlight_color", "must be a #rrggbb color"));
        }

        Ok(())
    }

    /// Set the grid size, clamped to at least one inch.
    pub fn set_grid_size(&mut self, grid_size: f64) {
        self.grid_size = if grid_size.is_finite() {
            grid_size.max(MIN_GRID_SIZE)
        } else {
            DEFAULT_GRID_SIZE
        };
    }

    /// Set the grid opacity, clamped into `0.0..=1.0`.
    pub fn set_grid_opacity(&mut self, opacity: f64) {
        self.grid_opacity = if opacity.is_finite() {
            opacity.clamp(0.0, 1.0)
        } else {
            DEFAULT_GRID_OPACITY
        };
    }

    /// Set the room outline color. Must be `#rrggbb`.
    pub fn set_wall_color(&mut self, color: &str) -> SettingsResult<()> {
        if !is_hex_color(color) {
            return Err(invalid("wall_color", "must be a #rrggbb color"));
        }
        self.wall_color = color.to_string();
        Ok(())
    }

    /// Set the selection highlight color. Must be `#rrggbb`.
    pub fn set_highlight_color(&mut self, color: &str) -> SettingsResult<()> {
        if !is_hex_color(color) {
            return Err(invalid("highlight_color", "must be a #rrggbb color"));
        }
        self.highlight_color = color.to_string();
        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

fn extension(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn invalid(key: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidSetting {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

/// Default directory for on-disk storage: `<data_dir>/floorplanner`.
pub fn default_storage_dir() -> SettingsResult<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join("floorplanner"))
        .ok_or_else(|| {
            SettingsError::StorageDirectory("no data directory on this platform".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DisplaySettings::default();
        assert_eq!(settings.grid_size, 12.0);
        assert_eq!(settings.grid_opacity, 0.2);
        assert_eq!(settings.wall_color, "#377c7c");
        assert_eq!(settings.highlight_color, "#377c7c");
        assert_eq!(settings.theme, Theme::Light);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_record_merges_over_defaults() {
        let settings: DisplaySettings =
            serde_json::from_str(r#"{"gridSize":24,"theme":"dark"}"#).unwrap();
        assert_eq!(settings.grid_size, 24.0);
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.grid_opacity, 0.2);
        assert_eq!(settings.wall_color, "#377c7c");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut settings = DisplaySettings::default();
        settings.grid_size = 0.5;
        assert!(settings.validate().is_err());

        let mut settings = DisplaySettings::default();
        settings.grid_opacity = 1.5;
        assert!(settings.validate().is_err());

        let mut settings = DisplaySettings::default();
        settings.wall_color = "teal".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_setters_clamp() {
        let mut settings = DisplaySettings::default();
        settings.set_grid_size(0.0);
        assert_eq!(settings.grid_size, 1.0);
        settings.set_grid_opacity(-0.3);
        assert_eq!(settings.grid_opacity, 0.0);
        settings.set_grid_opacity(7.0);
        assert_eq!(settings.grid_opacity, 1.0);

        assert!(settings.set_wall_color("#ABCDEF").is_ok());
        assert_eq!(settings.wall_color, "#ABCDEF");
        assert!(settings.set_highlight_color("red").is_err());
        assert_eq!(settings.highlight_color, "#377c7c");
    }

    #[test]
    fn test_unsupported_extension() {
        let settings = DisplaySettings::default();
        let err = settings
            .save_to_file(Path::new("settings.yaml"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::UnsupportedFormat(ext) if ext == "yaml"));
    }
}
