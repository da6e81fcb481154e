//! Tunable presentation and data-source settings.
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Highest zoom level served by the public tile endpoint.
pub const MAX_TILE_ZOOM: u8 = 19;

pub const DEFAULT_CATALOG_URL: &str = "https://restcountries.com/v3.1/all?fields=name,latlng";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("map zoom {zoom} exceeds the maximum of {max}")]
    ZoomTooDeep { zoom: u8, max: u8 },
    #[error("wheel spin duration must be greater than zero")]
    ZeroSpinDuration,
    #[error("wheel palette must contain at least one colour")]
    EmptyPalette,
    #[error("map viewport must span at least one tile")]
    EmptyViewport,
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog_url: String,
    /// Pause between slot assignment and the wheel starting to turn.
    pub spin_delay_ms: u32,
    pub notice_dismiss_ms: u32,
    pub map: MapConfig,
    pub wheel: WheelConfig,
    pub confetti: ConfettiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub zoom: u8,
    /// Tile template with `{z}`, `{x}` and `{y}` placeholders.
    pub tile_url: String,
    pub attribution: String,
    pub attribution_url: String,
    /// Width and height of the rendered map in tiles.
    pub viewport_tiles: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub palette: Vec<String>,
    pub text_color: String,
    pub border_color: String,
    pub spin_turns: u8,
    pub spin_duration_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfettiConfig {
    pub particles: u16,
    pub colors: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: 6,
            tile_url: String::from("https://tile.openstreetmap.org/{z}/{x}/{y}.png"),
            attribution: String::from("© OpenStreetMap contributors"),
            attribution_url: String::from("https://www.openstreetmap.org/copyright"),
            viewport_tiles: 3,
        }
    }
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            palette: vec![
                String::from("#ffe000"),
                String::from("#40E0D0"),
                String::from("#65c465"),
            ],
            text_color: String::from("#000000"),
            border_color: String::from("#ffffff"),
            spin_turns: 5,
            spin_duration_ms: 4000,
        }
    }
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            particles: 200,
            colors: vec![
                String::from("#f44336"),
                String::from("#e91e63"),
                String::from("#9c27b0"),
                String::from("#2196f3"),
                String::from("#4caf50"),
                String::from("#ffeb3b"),
                String::from("#ff9800"),
            ],
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn default_config() -> Self {
        Self {
            catalog_url: String::from(DEFAULT_CATALOG_URL),
            spin_delay_ms: 1000,
            notice_dismiss_ms: 3000,
            map: MapConfig::default(),
            wheel: WheelConfig::default(),
            confetti: ConfettiConfig::default(),
        }
    }

    /// Parse configuration JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check the values the renderer relies on.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map.zoom > MAX_TILE_ZOOM {
            return Err(ConfigError::ZoomTooDeep {
                zoom: self.map.zoom,
                max: MAX_TILE_ZOOM,
            });
        }
        if self.map.viewport_tiles == 0 {
            return Err(ConfigError::EmptyViewport);
        }
        if self.wheel.spin_duration_ms == 0 {
            return Err(ConfigError::ZeroSpinDuration);
        }
        if self.wheel.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }

    #[must_use]
    pub fn spin_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.spin_delay_ms))
    }

    #[must_use]
    pub fn notice_dismiss(&self) -> Duration {
        Duration::from_millis(u64::from(self.notice_dismiss_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = AppConfig::from_json(r#"{ "spin_delay_ms": 250, "map": { "zoom": 4 } }"#)
            .unwrap();
        assert_eq!(cfg.spin_delay(), Duration::from_millis(250));
        assert_eq!(cfg.notice_dismiss(), Duration::from_millis(3000));
        assert_eq!(cfg.map.zoom, 4);
        assert_eq!(cfg.map.attribution, "© OpenStreetMap contributors");
        assert_eq!(cfg.wheel.palette.len(), 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_flags_bad_values() {
        let mut cfg = AppConfig::default_config();
        cfg.map.zoom = 22;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::ZoomTooDeep { zoom: 22, max: 19 })
        );

        let mut cfg = AppConfig::default_config();
        cfg.wheel.spin_duration_ms = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroSpinDuration));

        let mut cfg = AppConfig::default_config();
        cfg.wheel.palette.clear();
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyPalette));

        let mut cfg = AppConfig::default_config();
        cfg.map.viewport_tiles = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyViewport));
    }
}
