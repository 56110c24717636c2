//! Session settings
//!
//! Loaded from a JSON file named by `BEACH_SURVIVAL_SETTINGS`, or defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::MAX_ZOMBIES;

/// Environment variable holding the settings file path
pub const SETTINGS_ENV: &str = "BEACH_SURVIVAL_SETTINGS";

/// How zombies pick their direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZombieAi {
    /// Step toward the player on each axis
    #[default]
    Chase,
    /// Constant leftward drift
    Drift,
}

impl ZombieAi {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZombieAi::Chase => "chase",
            ZombieAi::Drift => "drift",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "chase" => Some(ZombieAi::Chase),
            "drift" => Some(ZombieAi::Drift),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed first-session seed (None = derived from the clock)
    pub seed: Option<u64>,
    /// Collision circles and prop lines in the view
    pub debug_overlay: bool,
    pub zombie_count: u32,
    pub zombie_ai: ZombieAi,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Headless runner ===
    /// Simulated seconds before the native runner exits
    pub session_seconds: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            debug_overlay: false,
            zombie_count: 1,
            zombie_ai: ZombieAi::Chase,
            show_fps: true,
            session_seconds: 30.0,
        }
    }
}

impl Settings {
    /// Zombie count within limits
    pub fn effective_zombie_count(&self) -> u32 {
        self.zombie_count.min(MAX_ZOMBIES)
    }

    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from `BEACH_SURVIVAL_SETTINGS` if set, else defaults
    pub fn load() -> Self {
        let Ok(path) = std::env::var(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"zombie_count": 3, "zombie_ai": "drift"}"#).unwrap();
        assert_eq!(settings.zombie_count, 3);
        assert_eq!(settings.zombie_ai, ZombieAi::Drift);
        assert!(!settings.debug_overlay);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_from("/definitely/not/here/settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("beach_survival_settings_{}.json", std::process::id()));
        let settings = Settings {
            seed: Some(42),
            debug_overlay: true,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_zombie_ai_names() {
        assert_eq!(ZombieAi::from_str("CHASE"), Some(ZombieAi::Chase));
        assert_eq!(ZombieAi::from_str(ZombieAi::Drift.as_str()), Some(ZombieAi::Drift));
        assert_eq!(ZombieAi::from_str("wander"), None);
    }

    #[test]
    fn test_zombie_count_limit() {
        let settings = Settings {
            zombie_count: 1000,
            ..Default::default()
        };
        assert_eq!(settings.effective_zombie_count(), MAX_ZOMBIES);
    }
}
