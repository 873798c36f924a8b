// src/config.rs

//! Host configuration.
//!
//! Small compared to a full terminal's config: the engine owns appearance
//! and behavior, so the host only carries surface hints and demo-loop
//! pacing. Deserialized from JSON when `SURFACE_HOST_CONFIG` points at a
//! file; defaults otherwise. Parse failures log a warning and fall back to
//! defaults rather than aborting startup.

use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Environment variable naming the config file path.
pub const CONFIG_PATH_ENV: &str = "SURFACE_HOST_CONFIG";

/// Global configuration, loaded once on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load_or_default);

/// Complete host configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Surface size hints.
    pub surface: SurfaceConfig,
    /// Frame pacing for the demo tick loop.
    pub performance: PerformanceConfig,
}

/// Size hints reported before the platform's first real measurement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SurfaceConfig {
    pub initial_width_px: u32,
    pub initial_height_px: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            initial_width_px: 800,
            initial_height_px: 600,
        }
    }
}

/// Tick pacing used where no platform vsync callback exists (the demo
/// binary). A real platform's draw callback replaces this entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    pub target_fps: u32,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self { target_fps: 60 }
    }
}

impl Config {
    /// Loads config from the file named by `SURFACE_HOST_CONFIG`, falling
    /// back to defaults when the variable is unset or the file is unusable.
    pub fn load_or_default() -> Self {
        let Ok(path) = std::env::var(CONFIG_PATH_ENV) else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    info!("Config: loaded from {}", path);
                    config
                }
                Err(e) => {
                    warn!("Config: parse error in {}: {}; using defaults", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Config: cannot read {}: {}; using defaults", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_default_to_an_800x600_surface_at_60_fps() {
        let config = Config::default();
        assert_eq!(config.surface.initial_width_px, 800);
        assert_eq!(config.surface.initial_height_px, 600);
        assert_eq!(config.performance.target_fps, 60);
    }

    #[test]
    fn it_should_fill_missing_sections_from_defaults() {
        let config: Config = serde_json::from_str(r#"{"performance":{"target_fps":30}}"#).unwrap();
        assert_eq!(config.performance.target_fps, 30);
        assert_eq!(config.surface, SurfaceConfig::default());
    }

    #[test]
    fn it_should_round_trip_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
