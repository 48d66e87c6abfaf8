// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the wbrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not configured: no config at {0}\n  hint: run 'wipboard configure <agiles.json>' first")]
    NotConfigured(String),

    #[error("no boards found\n  hint: create one at {0}")]
    NoBoards(String),

    #[error("board {0} has no sprints\n  hint: enable sprints on the board or select another board")]
    NoSprints(String),

    #[error("home url is required\n  hint: pass --home-url or run 'wipboard configure'")]
    HomeUrlRequired,

    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("sprint {0} has no board data\n  hint: fetch the sprint with its board fields")]
    MissingBoard(String),

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Core(#[from] wb_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("config error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

/// A specialized Result type for wbrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
