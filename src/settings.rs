//! Viewer settings and preferences
//!
//! Presentation only: nothing here changes how the world simulates.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::FIELD_OF_VIEW;
use crate::error::ConfigError;

/// Camera placement relative to the avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ViewMode {
    #[default]
    FirstPerson,
    ThirdPerson,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::FirstPerson => "First person",
            ViewMode::ThirdPerson => "Third person",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::FirstPerson => ViewMode::ThirdPerson,
            ViewMode::ThirdPerson => ViewMode::FirstPerson,
        }
    }
}

/// Viewer settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub view_mode: ViewMode,
    /// Sun off, torch at the camera
    pub night_mode: bool,
    /// Base field of view in degrees (scaled by aspect ratio)
    pub field_of_view: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::FirstPerson,
            night_mode: false,
            field_of_view: FIELD_OF_VIEW,
        }
    }
}

impl Settings {
    pub fn toggle_view(&mut self) {
        self.view_mode = self.view_mode.toggled();
        log::info!("View: {}", self.view_mode.as_str());
    }

    pub fn toggle_night(&mut self) {
        self.night_mode = !self.night_mode;
        log::info!("Night mode: {}", if self.night_mode { "ENABLED" } else { "DISABLED" });
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
