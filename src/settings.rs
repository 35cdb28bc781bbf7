//! User settings persistence.
//!
//! This module handles loading and saving user preferences across
//! sessions: supply voltage, chart line width, and the last directory a
//! trace was opened from. Trace data and selections are never persisted.

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::state::{DEFAULT_LINE_WIDTH, DEFAULT_SUPPLY_VOLTAGE};

/// User settings that persist across sessions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserSettings {
    /// Settings file version for migration support
    #[serde(default = "default_version")]
    pub version: u32,
    /// Supply voltage (Ualim) in volts
    #[serde(default = "default_supply_voltage")]
    pub supply_voltage: f64,
    /// Chart line width in pixels
    #[serde(default = "default_line_width")]
    pub line_width: f32,
    /// Directory the last trace was opened from
    #[serde(default)]
    pub last_open_dir: Option<PathBuf>,
}

fn default_version() -> u32 {
    1
}

fn default_supply_voltage() -> f64 {
    DEFAULT_SUPPLY_VOLTAGE
}

fn default_line_width() -> f32 {
    DEFAULT_LINE_WIDTH
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            version: 1,
            supply_voltage: DEFAULT_SUPPLY_VOLTAGE,
            line_width: DEFAULT_LINE_WIDTH,
            last_open_dir: None,
        }
    }
}

impl UserSettings {
    /// Get the config directory path for AmpScope
    pub fn get_config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::data_dir().map(|p| p.join("AmpScope"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|p| p.join("AmpScope"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            dirs::config_dir().map(|p| p.join("ampscope"))
        }
    }

    /// Get the path to the settings JSON file
    pub fn get_settings_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|p| p.join("settings.json"))
    }

    /// Load settings from disk, falling back to defaults on any failure
    pub fn load() -> Self {
        let path = match Self::get_settings_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let path =
            Self::get_settings_path().context("could not determine config directory")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let content =
            serde_json::to_string_pretty(self).context("failed to serialize settings")?;

        std::fs::write(&path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;

        Ok(())
    }
}
