// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error payloads returned by the tracker REST API.

use serde::Deserialize;

/// Message shown when the server gave no usable description.
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong =(";

/// Body of an API error response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub error_developer_message: Option<String>,
}

impl ApiError {
    /// Detects an error payload among decoded JSON.
    ///
    /// Only objects carrying one of the error keys qualify, so regular
    /// payloads are never mistaken for errors.
    pub fn detect(value: &serde_json::Value) -> Option<Self> {
        let object = value.as_object()?;
        let is_error = ["error", "error_description", "error_developer_message"]
            .iter()
            .any(|key| object.contains_key(*key));
        if !is_error {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    /// User-facing message: the description, then the developer message,
    /// then a generic fallback.
    pub fn message(&self) -> &str {
        [&self.error_description, &self.error_developer_message]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|message| !message.is_empty())
            .unwrap_or(DEFAULT_ERROR_MESSAGE)
    }
}

#[cfg(test)]
#[path = "api_error_tests.rs"]
mod tests;
