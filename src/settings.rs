//! Display settings
//!
//! Persisted as a small JSON file; the simulation only ever sees the
//! derived layout.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::frame::{Color, colors};
use crate::sim::Layout;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Display geometry and colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Canvas width in pixels
    pub width: i32,
    /// Canvas height in pixels
    pub height: i32,
    /// Scene background color (RGBA)
    pub background: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            background: colors::BACKGROUND,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("ignoring settings file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Layout derived from this geometry
    pub fn layout(&self) -> Layout {
        Layout::new(self.width, self.height)
    }
}
