//! Runner settings
//!
//! Read from the JSON file named by `MAZE_CHASE_SETTINGS`. Anything missing
//! or unreadable falls back to defaults; gameplay constants are not tunable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_MS;

/// Environment variable holding the settings file path
pub const SETTINGS_ENV: &str = "MAZE_CHASE_SETTINGS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Milliseconds between ticks
    pub tick_ms: u64,
    /// RNG seed; derived from the system clock when absent
    pub seed: Option<u64>,
    /// Stop after this many ticks even if the run is not over
    pub max_ticks: Option<u64>,
    /// Feed random heading requests (headless demo)
    pub autopilot: bool,
    /// Ticks between autopilot requests
    pub autopilot_interval: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            seed: None,
            max_ticks: None,
            autopilot: true,
            autopilot_interval: 8,
        }
    }
}

impl Settings {
    /// Parse and clamp zero periods to 1
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load from a file, logging and falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Cannot read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from `MAZE_CHASE_SETTINGS`, or defaults when it is unset
    pub fn load() -> Self {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Zero periods would spin
    fn sanitized(mut self) -> Self {
        self.tick_ms = self.tick_ms.max(1);
        self.autopilot_interval = self.autopilot_interval.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.tick_ms, 50);
        assert!(settings.seed.is_none());
        assert!(settings.autopilot);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "autopilot": false }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(!settings.autopilot);
        assert_eq!(settings.tick_ms, TICK_MS);
        assert_eq!(settings.autopilot_interval, 8);
    }

    #[test]
    fn test_from_json_clamps_zero_periods() {
        let settings = Settings::from_json(r#"{ "tick_ms": 0, "autopilot_interval": 0 }"#).unwrap();
        assert_eq!(settings.tick_ms, 1);
        assert_eq!(settings.autopilot_interval, 1);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            max_ticks: Some(100),
            ..Default::default()
        };
        let back = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_from(Path::new("/nonexistent/maze-chase.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file_sanitizes() {
        let path = std::env::temp_dir().join(format!("maze-chase-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "tick_ms": 0, "autopilot_interval": 0 }"#).unwrap();
        let settings = Settings::load_from(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(settings.tick_ms, 1);
        assert_eq!(settings.autopilot_interval, 1);
    }
}
