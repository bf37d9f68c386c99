use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::board::Stone;
use crate::error::ConfigError;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "GOMOKU_CONFIG";

/// Config file looked up in the working directory when `GOMOKU_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "gomoku.toml";

const MAX_AI_DELAY_MS: u64 = 10_000;
const MIN_WINDOW_WIDTH: f32 = 400.0;
const MIN_WINDOW_HEIGHT: f32 = 300.0;

/// Game mode selected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartMode {
    VsAi,
    Hotseat,
}

/// Colour played by the human in `vs_ai` mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartColor {
    Black,
    White,
}

impl From<StartColor> for Stone {
    fn from(color: StartColor) -> Self {
        match color {
            StartColor::Black => Stone::Black,
            StartColor::White => Stone::White,
        }
    }
}

/// Application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Pause before the AI's move is applied, purely cosmetic
    pub ai_delay_ms: u64,
    pub start_mode: StartMode,
    pub human_color: StartColor,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            ai_delay_ms: 500,
            start_mode: StartMode::VsAi,
            human_color: StartColor::Black,
            window_width: 960.0,
            window_height: 720.0,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Path from `GOMOKU_CONFIG`, or `gomoku.toml` in the working directory
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai_delay_ms > MAX_AI_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "ai_delay_ms must be <= {MAX_AI_DELAY_MS}"
            )));
        }
        if self.window_width < MIN_WINDOW_WIDTH {
            return Err(ConfigError::Validation(format!(
                "window_width must be >= {MIN_WINDOW_WIDTH}"
            )));
        }
        if self.window_height < MIN_WINDOW_HEIGHT {
            return Err(ConfigError::Validation(format!(
                "window_height must be >= {MIN_WINDOW_HEIGHT}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.ai_delay_ms, 500);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
start_mode = "hotseat"
human_color = "white"
"#,
        )
        .unwrap();
        assert_eq!(config.start_mode, StartMode::Hotseat);
        assert_eq!(Stone::from(config.human_color), Stone::White);
        assert_eq!(config.ai_delay_ms, 500);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(r#"start_mode = "online""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_long_delay() {
        let config = AppConfig {
            ai_delay_ms: 60_000,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_tiny_window() {
        let config = AppConfig {
            window_width: 100.0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_gomoku.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gomoku.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "ai_delay_ms = 0").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.ai_delay_ms, 0);
        assert_eq!(config.start_mode, StartMode::VsAi);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gomoku.toml");
        std::fs::write(&path, "window_height = 10.0\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
