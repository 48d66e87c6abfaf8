// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Widget configuration management.
//!
//! Configuration is stored in a TOML file and records which board and sprint
//! the widget displays:
//! - `home_url`: base URL of the tracker, used for every outbound link
//! - `agile_id`: the selected board
//! - `sprint_id` / `current_sprint_mode`: a fixed sprint, or whichever sprint
//!   is current when the widget is shown
//!
//! The file is looked up at `--config`, then `$WIPBOARD_CONFIG`, then
//! `<config dir>/wipboard/config.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use wb_core::SprintSelection;

use crate::env;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "wipboard";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Stored widget configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the tracker (e.g. `https://tracker.example.com`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub home_url: String,
    /// Identifier of the tracker service the board lives on.
    pub agile_id: String,
    /// Fixed sprint. Absent in current sprint mode or for sprint-less boards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<String>,
    #[serde(default)]
    pub current_sprint_mode: bool,
}

impl Config {
    /// Creates a configuration for a board and sprint selection.
    pub fn new(agile_id: String, selection: Option<SprintSelection>, home_url: String) -> Self {
        let (sprint_id, current_sprint_mode) = match selection {
            Some(SprintSelection::Current) => (None, true),
            Some(SprintSelection::Sprint(id)) => (Some(id), false),
            None => (None, false),
        };
        Config {
            home_url,
            agile_id,
            sprint_id,
            current_sprint_mode,
        }
    }

    /// The stored sprint selection, if any.
    pub fn selection(&self) -> Option<SprintSelection> {
        if self.current_sprint_mode {
            Some(SprintSelection::Current)
        } else {
            self.sprint_id.clone().map(SprintSelection::Sprint)
        }
    }

    /// Loads configuration from a file.
    ///
    /// Fails with [`Error::NotConfigured`] when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_optional(path)?.ok_or_else(|| Error::NotConfigured(path.display().to_string()))
    }

    /// Loads configuration from a file, returning `None` if it is missing.
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), agile_id = %config.agile_id, "loaded config");
        Ok(Some(config))
    }

    /// Saves configuration, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }
}

/// Resolves the config file location from the `--config` flag, the
/// environment, or the platform config directory.
pub fn config_path(flag: Option<&Path>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    if let Some(path) = env::config_path() {
        return path;
    }
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(format!(".{CONFIG_DIR_NAME}")))
        .join(CONFIG_FILE_NAME)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
