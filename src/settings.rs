//! Runtime settings
//!
//! Loaded from a JSON file; every field has a default so partial files work.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_VIEWPORT;
use crate::debug::DebugOverlayConfig;

/// Errors from reading or writing settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings I/O failed for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("settings JSON is invalid: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Visibility culling options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CullingSettings {
    /// When off, every entity is drawable every frame
    pub enabled: bool,
    /// Extra pixels around the viewport still treated as visible
    pub margin: f32,
}

impl Default for CullingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            margin: 0.0,
        }
    }
}

/// Collision options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionSettings {
    /// Test rotated outlines instead of axis-aligned boxes
    pub use_rotated_bounds: bool,
    /// Pass relative velocity to the SAT test to predict next-step hits
    pub predict_with_velocity: bool,
    /// Reflect velocities of colliding pairs
    pub bounce: bool,
}

impl Default for CollisionSettings {
    fn default() -> Self {
        Self {
            use_rotated_bounds: true,
            predict_with_velocity: false,
            bounce: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub culling: CullingSettings,
    pub collision: CollisionSettings,
    pub debug: DebugOverlayConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT.0,
            viewport_height: DEFAULT_VIEWPORT.1,
            culling: CullingSettings::default(),
            collision: CollisionSettings::default(),
            debug: DebugOverlayConfig::off(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Load, or fall back to defaults with a warning
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}
