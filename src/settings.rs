//! Game settings
//!
//! Loaded from an optional JSON file in the working directory. Missing
//! fields fall back to defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{FRAME_RATE_LIMIT, VIEW_HEIGHT, VIEW_WIDTH};

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield width in world units
    pub view_width: f32,
    /// Playfield height in world units
    pub view_height: f32,
    /// Frames (and simulation ticks) per second
    pub frame_rate_limit: u32,
    /// Fixed RNG seed; a random one is drawn when absent
    pub seed: Option<u64>,
    /// Start with the debug overlay visible
    pub show_debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,
            frame_rate_limit: FRAME_RATE_LIMIT,
            seed: None,
            show_debug: false,
        }
    }
}

impl Settings {
    /// File name looked up by [`Settings::load`]
    pub const FILE_NAME: &'static str = "rock-drift.json";

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load `rock-drift.json` from the working directory, or use defaults
    pub fn load() -> Self {
        let path = Path::new(Self::FILE_NAME);
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }

        match Self::load_from_path(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let dims_ok = |v: f32| v.is_finite() && v > 0.0;
        if !(dims_ok(self.view_width) && dims_ok(self.view_height)) {
            return Err(SettingsError::Invalid(format!(
                "view size must be positive, got {}x{}",
                self.view_width, self.view_height
            )));
        }
        if self.frame_rate_limit == 0 {
            return Err(SettingsError::Invalid(
                "frame_rate_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn view_size(&self) -> Vec2 {
        Vec2::new(self.view_width, self.view_height)
    }

    /// Seconds per simulation tick
    #[inline]
    pub fn sim_dt(&self) -> f32 {
        1.0 / self.frame_rate_limit as f32
    }

    /// The configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.view_size(), Vec2::new(1920.0, 1080.0));
        assert_eq!(settings.frame_rate_limit, 144);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "show_debug": true }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(settings.show_debug);
        assert_eq!(settings.view_width, VIEW_WIDTH);
        assert_eq!(settings.resolve_seed(), 42);
    }

    #[test]
    fn test_invalid_view_rejected() {
        let err = Settings::from_json(r#"{ "view_width": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));

        let err = Settings::from_json(r#"{ "frame_rate_limit": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_non_finite_view_rejected() {
        // 1e39 overflows f32 to infinity
        let err = Settings::from_json(r#"{ "view_width": 1e39 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));

        let settings = Settings {
            view_height: f32::NAN,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load_from_path(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(7),
            ..Settings::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_sim_dt() {
        let settings = Settings {
            frame_rate_limit: 100,
            ..Settings::default()
        };
        assert!((settings.sim_dt() - 0.01).abs() < 1e-6);
    }
}
