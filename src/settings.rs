//! Live-tweakable gameplay tunables
//!
//! Hosts own a `Tunables` value, may change it between frames, and pass it
//! to every step. The simulation only reads it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors loading or saving tunables
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Gameplay tunables, read fresh each step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    /// Ball speed (px/s, applied to the unnormalised velocity)
    pub ball_speed: f32,
    /// Ball radius (px)
    pub ball_radius: f32,
    /// Brick width (px), used when laying out the grid
    pub brick_width: f32,
    /// Brick height (px), used when laying out the grid
    pub brick_height: f32,
    /// Collapse every brick into a single immunity class
    pub uniform_immunity: bool,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            ball_speed: DEFAULT_BALL_SPEED,
            ball_radius: DEFAULT_BALL_RADIUS,
            brick_width: DEFAULT_BRICK_WIDTH,
            brick_height: DEFAULT_BRICK_HEIGHT,
            uniform_immunity: true,
        }
    }
}

impl Tunables {
    /// Copy with every value pulled into the range the tweak panel allows
    pub fn clamped(&self) -> Self {
        Self {
            ball_speed: self.ball_speed.clamp(0.0, MAX_BALL_SPEED),
            ball_radius: self.ball_radius.clamp(0.0, MAX_BALL_RADIUS),
            brick_width: self.brick_width.max(1.0),
            brick_height: self.brick_height.max(1.0),
            uniform_immunity: self.uniform_immunity,
        }
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let tunables: Self = serde_json::from_str(json)?;
        Ok(tunables.clamped())
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let tunables = Self::from_json(&json)?;
        log::info!("Loaded tunables from {}", path.display());
        Ok(tunables)
    }

    /// Save to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::info!("Tunables saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let t = Tunables::default();
        assert_eq!(t.ball_speed, 500.0);
        assert_eq!(t.ball_radius, 10.0);
        assert_eq!(t.brick_width, 100.0);
        assert_eq!(t.brick_height, 40.0);
        assert!(t.uniform_immunity);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let t = Tunables::from_json(r#"{ "ball_speed": 300, "uniform_immunity": false }"#).unwrap();
        assert_eq!(t.ball_speed, 300.0);
        assert_eq!(t.ball_radius, DEFAULT_BALL_RADIUS);
        assert!(!t.uniform_immunity);
    }

    #[test]
    fn test_json_is_clamped() {
        let t = Tunables::from_json(r#"{ "ball_speed": 5000, "ball_radius": -3 }"#).unwrap();
        assert_eq!(t.ball_speed, MAX_BALL_SPEED);
        assert_eq!(t.ball_radius, 0.0);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            Tunables::from_json("{ ball_speed"),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("rewind_breakout_{}.json", std::process::id()));
        let t = Tunables {
            ball_speed: 250.0,
            uniform_immunity: false,
            ..Default::default()
        };
        t.save(&path).unwrap();
        let loaded = Tunables::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, t);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            Tunables::load("/definitely/not/here/tunables.json"),
            Err(SettingsError::Io(_))
        ));
    }
}
