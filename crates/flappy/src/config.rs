//! Game configuration
//!
//! Loaded from a TOML file next to the binary; any missing section or
//! field falls back to its default, and a missing file yields the full
//! default configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level game configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    /// Gameplay settings
    pub gameplay: GameplayConfig,

    /// Window settings
    pub window: WindowConfig,
}

/// Gameplay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Seconds between pipe spawns
    pub pipe_interval: f32,

    /// Horizontal scroll speed of pipes (units per second)
    pub scroll_speed: f32,

    /// Downward acceleration applied to the bird (units per second squared)
    pub gravity: f32,

    /// X coordinate where new pipes appear
    pub pipe_spawn_x: f32,

    /// X coordinate past which pipes are culled
    pub pipe_cull_x: f32,

    /// Bird starting X position
    pub bird_start_x: f32,

    /// Bird starting Y position
    pub bird_start_y: f32,

    /// Y coordinate of the floor line
    pub floor_height: f32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            pipe_interval: 1.5,
            scroll_speed: 180.0,
            gravity: 980.0,
            pipe_spawn_x: 1100.0,
            pipe_cull_x: -100.0,
            bird_start_x: 120.0,
            bird_start_y: 300.0,
            floor_height: 620.0,
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in pixels
    pub width: u32,

    /// Window height in pixels
    pub height: u32,

    /// Window title
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            title: "Flappy".to_owned(),
        }
    }
}

impl GameConfig {
    /// Load the configuration from a TOML file
    ///
    /// A missing file is not an error: the defaults are used and a
    /// warning is logged.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let config = GameConfig::default();
        assert!(config.gameplay.pipe_interval > 0.0);
        assert!(config.gameplay.scroll_speed > 0.0);
        assert!(config.gameplay.floor_height > config.gameplay.bird_start_y);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GameConfig = toml::from_str(
            r#"
            [gameplay]
            scroll_speed = 240.0
            "#,
        )
        .unwrap();

        assert_eq!(config.gameplay.scroll_speed, 240.0);
        assert_eq!(config.gameplay.pipe_interval, GameplayConfig::default().pipe_interval);
        assert_eq!(config.window.width, WindowConfig::default().width);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = GameConfig::load("does-not-exist.toml").unwrap();
        assert_eq!(config.window.title, "Flappy");
    }
}
