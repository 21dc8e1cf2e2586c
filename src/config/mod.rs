//! Configuration file support for scribble.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/scribble/config.toml`. Settings include the visible surface size,
//! export location and nickname, import replay pacing, and global keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{CanvasConfig, ExportConfig, ReplayConfig};

use crate::export::{DEFAULT_IMAGE_FILENAME, file};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Largest accepted surface edge in pixels.
const MAX_CANVAS_EDGE: u32 = 8192;

/// Longest accepted pause between replayed segments.
const MAX_SEGMENT_DELAY_MS: u64 = 1000;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 800
/// height = 600
///
/// [export]
/// directory = "~/Sketches"
/// nickname = "ana"
///
/// [replay]
/// segment_delay_ms = 10
///
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Visible drawing surface size
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Export location and naming
    #[serde(default)]
    pub export: ExportConfig,

    /// Import replay pacing
    #[serde(default)]
    pub replay: ReplayConfig,

    /// Global keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    /// - `replay.segment_delay_ms`: 0 - 1000
    /// - `export.nickname`: non-blank, no path separators
    /// - `export.image_filename`: bare `*.png` filename
    fn validate_and_clamp(&mut self) {
        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-{} range",
                self.canvas.width,
                MAX_CANVAS_EDGE
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_EDGE);
        }

        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-{} range",
                self.canvas.height,
                MAX_CANVAS_EDGE
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_EDGE);
        }

        if self.replay.segment_delay_ms > MAX_SEGMENT_DELAY_MS {
            log::warn!(
                "Invalid segment_delay_ms {}, clamping to 0-{} range",
                self.replay.segment_delay_ms,
                MAX_SEGMENT_DELAY_MS
            );
            self.replay.segment_delay_ms = MAX_SEGMENT_DELAY_MS;
        }

        let nickname = file::sanitize_nickname(&self.export.nickname);
        if nickname != self.export.nickname {
            log::warn!(
                "Invalid nickname '{}', using '{}'",
                self.export.nickname,
                nickname
            );
            self.export.nickname = nickname;
        }

        let image = &self.export.image_filename;
        let valid_image = image.to_lowercase().ends_with(".png")
            && image.len() > ".png".len()
            && !image.contains(['/', '\\']);
        if !valid_image {
            log::warn!(
                "Invalid image_filename '{}', falling back to '{}'",
                image,
                DEFAULT_IMAGE_FILENAME
            );
            self.export.image_filename = DEFAULT_IMAGE_FILENAME.to_string();
        }
    }

    /// Directory exported files are written to, with `~/` expanded.
    pub fn export_directory(&self) -> PathBuf {
        match &self.export.directory {
            Some(dir) => file::expand_tilde(dir),
            None => file::default_export_directory(),
        }
    }

    /// Pause between replayed segments during import.
    pub fn segment_delay(&self) -> Duration {
        Duration::from_millis(self.replay.segment_delay_ms)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/scribble/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("scribble");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is absent.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to `config_path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.canvas.width, 512);
        assert_eq!(config.canvas.height, 512);
        assert_eq!(config.export.nickname, "drawing");
        assert_eq!(config.export.image_filename, "scribble.png");
        assert_eq!(config.segment_delay(), Duration::from_millis(10));
        assert_eq!(config.keybindings.undo, vec!["Ctrl+Z".to_string()]);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [canvas]
            width = 800

            [export]
            nickname = "ana"
            "#,
        )
        .unwrap();

        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 512);
        assert_eq!(config.export.nickname, "ana");
        assert_eq!(config.replay.segment_delay_ms, 10);
    }

    #[test]
    fn test_validate_clamps_out_of_range_values() {
        let mut config = Config::default();
        config.canvas.width = 0;
        config.canvas.height = 100_000;
        config.replay.segment_delay_ms = 60_000;
        config.export.nickname = "  ".to_string();
        config.export.image_filename = "../out.jpg".to_string();

        config.validate_and_clamp();

        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, MAX_CANVAS_EDGE);
        assert_eq!(config.replay.segment_delay_ms, MAX_SEGMENT_DELAY_MS);
        assert_eq!(config.export.nickname, "drawing");
        assert_eq!(config.export.image_filename, "scribble.png");
    }

    #[test]
    fn test_export_directory_expands_tilde() {
        let mut config = Config::default();
        config.export.directory = Some("/tmp/sketches".to_string());
        assert_eq!(config.export_directory(), PathBuf::from("/tmp/sketches"));

        config.export.directory = Some("~/sketches".to_string());
        assert!(!config.export_directory().to_string_lossy().starts_with('~'));
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config.canvas.width, 512);
    }

    #[test]
    fn test_save_then_load() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("scribble").join("config.toml");

        let mut config = Config::default();
        config.canvas.height = 300;
        config.replay.segment_delay_ms = 0;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.canvas.height, 300);
        assert_eq!(loaded.segment_delay(), Duration::ZERO);
    }

    #[test]
    fn test_load_from_rejects_invalid_toml() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[canvas\nwidth = ").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
