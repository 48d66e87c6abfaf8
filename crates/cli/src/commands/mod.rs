// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod boards;
pub mod configure;
pub mod progress;
pub mod show;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod url;

use std::path::{Path, PathBuf};

use wb_core::{ClockSource, FixedClock, SystemClock};

use crate::config::{config_path, Config};
use crate::error::{Error, Result};

/// Settings shared by every command invocation.
#[derive(Debug, Clone)]
pub struct Context {
    pub config_path: PathBuf,
    /// Read once per invocation so every decision in a command sees the same time.
    pub clock: FixedClock,
}

impl Context {
    pub fn new(config_flag: Option<&Path>, now: Option<i64>) -> Self {
        let clock = FixedClock(now.unwrap_or_else(|| SystemClock.now_ms()));
        Context {
            config_path: config_path(config_flag),
            clock,
        }
    }

    /// Loads the widget config if one has been saved.
    pub fn config(&self) -> Result<Option<Config>> {
        Config::load_optional(&self.config_path)
    }
}

/// Picks the tracker base URL: the flag wins over the configured one.
pub fn resolve_home_url(flag: Option<String>, config: Option<&Config>) -> Result<String> {
    flag.or_else(|| config.map(|config| config.home_url.clone()))
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .ok_or(Error::HomeUrlRequired)
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
