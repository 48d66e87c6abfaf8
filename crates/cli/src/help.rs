// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_board}
  {show}        Show the board widget for a sprint
  {progress}    Show column progress bars
  {url}         Print issue search links per column

{header_setup}
  {boards}      List boards and sprints available for selection
  {configure}   Select the board and sprint to display
  {completion}  Generate shell completions
",
        header_board = colors::header("Sprint Board:"),
        header_setup = colors::header("Setup & Configuration:"),
        show = colors::literal("show"),
        progress = colors::literal("progress"),
        url = colors::literal("url"),
        boards = colors::literal("boards"),
        configure = colors::literal("configure"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  wipboard boards agiles.json                             List boards
  wipboard configure agiles.json --home-url <URL>         Pick a board
  wipboard configure agiles.json --board <ID> --current   Track the current sprint
  wipboard show agile.json sprint.json                    Render the widget",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
