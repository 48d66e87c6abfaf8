// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading of JSON payloads fetched from the tracker.
//!
//! Payloads are read from files (or stdin for `-`). A file holding an API
//! error response instead of data fails with the server's message.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use wb_core::ApiError;

use crate::error::{Error, Result};

/// Reads and decodes a payload file.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = read_source(path)?;
    let payload = decode(&text)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded payload");
    Ok(payload)
}

/// Decodes a payload, surfacing API error responses.
pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if let Some(api_error) = ApiError::detect(&value) {
        tracing::warn!(error = ?api_error.error, "payload is an error response");
        return Err(wb_core::Error::Api(api_error.message().to_string()).into());
    }
    Ok(serde_json::from_value(value)?)
}

fn read_source(path: &Path) -> Result<String> {
    let read_err = |source| Error::ReadFile {
        path: path.display().to_string(),
        source,
    };
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map_err(read_err)?;
        return Ok(text);
    }
    std::fs::read_to_string(path).map_err(read_err)
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
