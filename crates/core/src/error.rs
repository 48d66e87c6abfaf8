// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for wb-core operations.
//!
//! The progress calculator itself never fails. Errors only arise when
//! decoding payloads or resolving a board/sprint selection.

use thiserror::Error;

/// All possible errors that can occur in wb-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("board not found: {0}")]
    AgileNotFound(String),

    #[error("sprint not found: {sprint} on board {agile}")]
    SprintNotFound { agile: String, sprint: String },

    #[error("no current sprint found on board {0}\n  hint: select a sprint explicitly")]
    NoCurrentSprint(String),

    #[error("server error: {0}")]
    Api(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for wb-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
