// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use wb_core::{compute_board_progress, Board, ProgressBar, Sprint};

use crate::cli::OutputFormat;
use crate::colors;
use crate::display::format_progress;
use crate::error::{Error, Result};
use crate::snapshot;

pub fn run(sprint_file: &Path, output: OutputFormat) -> Result<()> {
    let sprint: Sprint = snapshot::load(sprint_file)?;
    println!("{}", render(&sprint, output, colors::should_colorize())?);
    Ok(())
}

/// Returns the board embedded in a sprint payload.
pub(crate) fn sprint_board(sprint: &Sprint) -> Result<&Board> {
    sprint
        .board
        .as_ref()
        .ok_or_else(|| Error::MissingBoard(sprint.id.clone()))
}

/// Computes the bars and logs columns that break their WIP limits.
pub(crate) fn board_bars(sprint: &Sprint) -> Result<Vec<ProgressBar>> {
    let board = sprint_board(sprint)?;
    let bars = compute_board_progress(board);
    tracing::debug!(sprint = %sprint.id, columns = bars.len(), "computed board progress");
    for bar in bars.iter().filter(|bar| bar.overdue || bar.underdue) {
        tracing::info!(
            column = %bar.column_name,
            amount = bar.amount,
            overdue = bar.overdue,
            underdue = bar.underdue,
            "column outside WIP limits"
        );
    }
    Ok(bars)
}

pub(crate) fn render(sprint: &Sprint, output: OutputFormat, colorize: bool) -> Result<String> {
    let bars = board_bars(sprint)?;
    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&bars)?),
        OutputFormat::Text => Ok(format_progress(&bars, colorize)),
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
