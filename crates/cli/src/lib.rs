// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! wbrs - Sprint board WIP progress from the command line.
//!
//! This crate provides the `wipboard` CLI on top of [`wb_core`]. Board and
//! sprint payloads are read from JSON files fetched from the tracker, and
//! the selected board is remembered in a TOML config.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - argument parsing
//! - [`Config`] - the saved widget selection
//! - [`Error`] - Error types for all operations
//!
//! # Usage
//!
//! ```rust,ignore
//! use clap::Parser;
//! use wbrs::Cli;
//!
//! let cli = Cli::parse_from(["wipboard", "progress", "sprint.json"]);
//! wbrs::run(cli)?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;
pub mod logging;
mod snapshot;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, HomeUrlArgs, OutputArgs, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use commands::configure::Request;
use commands::Context;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let ctx = Context::new(cli.config.as_deref(), cli.now);
    tracing::debug!(config = %ctx.config_path.display(), now = ctx.clock.0, "starting");

    match cli.command {
        Command::Show {
            agile_file,
            sprint_file,
            home,
            output,
        } => commands::show::run(&ctx, &agile_file, &sprint_file, home.home_url, output.output),
        Command::Progress {
            sprint_file,
            output,
        } => commands::progress::run(&sprint_file, output.output),
        Command::Url {
            agile_file,
            sprint_file,
            column,
            home,
        } => commands::url::run(
            &ctx,
            &agile_file,
            &sprint_file,
            column.as_deref(),
            home.home_url,
        ),
        Command::Boards {
            agiles_file,
            home,
            output,
        } => commands::boards::run(&ctx, &agiles_file, home.home_url, output.output),
        Command::Configure {
            agiles_file,
            board,
            sprint,
            current,
            home,
        } => commands::configure::run(
            &ctx,
            &agiles_file,
            Request {
                board,
                sprint,
                current,
                home_url: home.home_url,
            },
        ),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "wipboard", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
