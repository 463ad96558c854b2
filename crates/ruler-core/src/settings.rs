//! Persisted user preferences
//!
//! Stored as a small JSON document. Keys missing from the file take their
//! defaults, so older files keep loading as fields are added.

use crate::color::Argb;
use crate::types::{Result, RulerError, RulerState, UnitSystem};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "measureit";
const FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub is_metric: bool,
    pub show_pointer: bool,
    pub accent_color: Argb,
    /// Calibrated density for hosts that cannot report a physical one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dots_per_inch: Option<f32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            is_metric: false,
            show_pointer: true,
            accent_color: Argb::DEFAULT_ACCENT,
            dots_per_inch: None,
        }
    }
}

impl Settings {
    /// `<config dir>/measureit/settings.json`, or the working directory when
    /// the platform has no config dir
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(FILE_NAME)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path)?;
        let settings = serde_json::from_slice(&bytes)
            .map_err(|e| RulerError::Settings(format!("Failed to parse settings: {}", e)))?;
        Ok(settings)
    }

    /// Load settings, using defaults only when the file does not exist yet.
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_if_exists(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(RulerError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Load settings, falling back to defaults if the file is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load_if_exists(path).unwrap_or_else(|e| {
            log::warn!("Ignoring settings at {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Save settings to a JSON file, creating its directory if needed
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| RulerError::Serialize(format!("Failed to serialize settings: {}", e)))?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Build the screen state. A unit system given at launch wins over the
    /// stored one.
    pub fn to_state(&self, units_override: Option<UnitSystem>) -> RulerState {
        RulerState {
            unit_system: units_override.unwrap_or(UnitSystem::from_metric_flag(self.is_metric)),
            pointer_visible: self.show_pointer,
            accent_color: self.accent_color,
            ..RulerState::default()
        }
    }

    /// Copy the persisted parts of a screen state
    pub fn update_from_state(&mut self, state: &RulerState) {
        self.is_metric = state.unit_system.is_metric();
        self.show_pointer = state.pointer_visible;
        self.accent_color = state.accent_color;
    }

    /// Apply a `key=value` assignment, as used by the command line
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "is_metric" => self.is_metric = parse_bool(key, value)?,
            "show_pointer" => self.show_pointer = parse_bool(key, value)?,
            "accent_color" => self.accent_color = value.parse()?,
            "dots_per_inch" => {
                self.dots_per_inch = match value {
                    "" | "none" => None,
                    _ => {
                        let dpi: f32 = value.parse().map_err(|_| {
                            RulerError::Settings(format!("{key}: not a number: {value:?}"))
                        })?;
                        if !dpi.is_finite() || dpi <= 0.0 {
                            return Err(RulerError::Settings(format!(
                                "{key}: must be positive, got {dpi}"
                            )));
                        }
                        Some(dpi)
                    }
                }
            }
            _ => return Err(RulerError::Settings(format!("Unknown setting: {key}"))),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value
        .parse()
        .map_err(|_| RulerError::Settings(format!("{key}: expected true or false, got {value:?}")))
}
