// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{HomeUrlArgs, OutputArgs};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "wipboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Sprint board WIP progress from agile board snapshots")]
#[command(
    long_about = "Sprint board WIP progress from agile board snapshots.\n\n\
    Reads board and sprint JSON fetched from the tracker and shows per-column \
    card counts against WIP limits, with issue search links for every column."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Read and write the widget config at <path>
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Pin the current time (epoch milliseconds)
    #[arg(long, global = true, hide = true, value_name = "ms")]
    pub now: Option<i64>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Sprint Board
    // ─────────────────────────────────────────────────────────────────────────
    /// Show the board widget for a sprint
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  wipboard show agile.json sprint.json         Render the widget
  wipboard show agile.json sprint.json -o json Widget view as JSON
  wipboard show agile.json - < sprint.json     Read the sprint from stdin")
    )]
    Show {
        /// Agile board JSON file
        agile_file: PathBuf,

        /// Sprint JSON file including its board
        sprint_file: PathBuf,

        #[command(flatten)]
        home: HomeUrlArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show column progress bars for a sprint board
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  wipboard progress sprint.json           Bars as text
  wipboard progress sprint.json -o json   Bar geometry as JSON")
    )]
    Progress {
        /// Sprint JSON file including its board
        sprint_file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print issue search links per column
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  wipboard url agile.json sprint.json                 All columns
  wipboard url agile.json sprint.json --column 110-3  One column")
    )]
    Url {
        /// Agile board JSON file
        agile_file: PathBuf,

        /// Sprint JSON file including its board
        sprint_file: PathBuf,

        /// Only print the link of this column
        #[arg(long, value_name = "ID")]
        column: Option<String>,

        #[command(flatten)]
        home: HomeUrlArgs,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Setup & Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// List boards and sprints available for selection
    #[command(arg_required_else_help = true)]
    Boards {
        /// JSON file with the list of agile boards
        agiles_file: PathBuf,

        #[command(flatten)]
        home: HomeUrlArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Select the board and sprint to display
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  wipboard configure agiles.json --home-url https://yt.example.com
  wipboard configure agiles.json --board 108-1 --current
  wipboard configure agiles.json --board 108-1 --sprint 109-3")
    )]
    Configure {
        /// JSON file with the list of agile boards
        agiles_file: PathBuf,

        /// Board id (defaults to the first selectable board)
        #[arg(long, value_name = "ID")]
        board: Option<String>,

        /// Display this sprint
        #[arg(long, value_name = "ID", conflicts_with = "current")]
        sprint: Option<String>,

        /// Always display the current sprint
        #[arg(long)]
        current: bool,

        #[command(flatten)]
        home: HomeUrlArgs,
    },

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
