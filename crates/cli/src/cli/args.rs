// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that print structured output or build links.

use clap::Args;

use super::OutputFormat;

/// Output format selection.
#[derive(Args, Clone, Debug, Default)]
pub struct OutputArgs {
    /// Output format (text, json)
    #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Tracker base URL override.
#[derive(Args, Clone, Debug, Default)]
pub struct HomeUrlArgs {
    /// Tracker base URL used for links (defaults to the configured one)
    #[arg(long, value_name = "URL")]
    pub home_url: Option<String>,
}
