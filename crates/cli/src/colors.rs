// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and board output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;
    /// Columns above their WIP maximum: soft red
    pub const OVERDUE: u8 = 167;
    /// Columns below their WIP minimum: amber
    pub const UNDERDUE: u8 = 179;

    /// Pre-formatted ANSI escape sequences for use in tests
    pub const HEADER_START: &str = "\x1b[38;5;74m";
    pub const OVERDUE_START: &str = "\x1b[38;5;167m";
    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (default values, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Apply overdue color (WIP maximum exceeded) to text.
pub fn overdue(text: &str) -> String {
    paint(codes::OVERDUE, text)
}

/// Apply underdue color (WIP minimum not reached) to text.
pub fn underdue(text: &str) -> String {
    paint(codes::UNDERDUE, text)
}

/// Colorize an examples help block.
///
/// Expects format like:
/// ```text
/// Examples:
///   wipboard progress sprint.json    Show bars for a sprint
/// ```
///
/// Section headers (lines ending with `:`) get the header color, the command
/// part of example lines (everything before the first double space) gets the
/// literal color, and descriptions stay plain.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    colorize_examples(text)
}

fn colorize_examples(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 256);

    for line in text.lines() {
        if !result.is_empty() {
            result.push('\n');
        }

        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            result.push_str(indent);
            result.push_str(&header(trimmed));
            continue;
        }

        if let Some(cmd_end) = trimmed.find("  ") {
            let (cmd, desc) = trimmed.split_at(cmd_end);
            result.push_str(indent);
            result.push_str(&literal(cmd));
            result.push_str(desc);
            continue;
        }

        result.push_str(line);
    }

    result
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
