// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use wb_core::{column_display_name, column_issues_url, Agile, Sprint};

use super::progress::sprint_board;
use super::{resolve_home_url, Context};
use crate::error::{Error, Result};
use crate::snapshot;

pub fn run(
    ctx: &Context,
    agile_file: &Path,
    sprint_file: &Path,
    column: Option<&str>,
    home_url: Option<String>,
) -> Result<()> {
    let agile: Agile = snapshot::load(agile_file)?;
    let sprint: Sprint = snapshot::load(sprint_file)?;
    let config = ctx.config()?;
    let home_url = resolve_home_url(home_url, config.as_ref())?;
    println!("{}", render(&agile, &sprint, column, &home_url)?);
    Ok(())
}

/// Prints one `<name>\t<url>` line per data column, or the bare URL when a
/// single column is requested.
pub(crate) fn render(
    agile: &Agile,
    sprint: &Sprint,
    column: Option<&str>,
    home_url: &str,
) -> Result<String> {
    let board = sprint_board(sprint)?;
    if let Some(column_id) = column {
        let column = board
            .column(column_id)
            .ok_or_else(|| Error::ColumnNotFound(column_id.to_string()))?;
        return Ok(column_issues_url(home_url, agile, sprint, column));
    }

    let lines: Vec<String> = board
        .columns
        .iter()
        .filter_map(|column| {
            let agile_column = column.agile_column.as_ref()?;
            Some(format!(
                "{}\t{}",
                column_display_name(agile_column),
                column_issues_url(home_url, agile, sprint, column)
            ))
        })
        .collect();
    tracing::debug!(agile = %agile.id, sprint = %sprint.id, columns = lines.len(), "built column links");
    Ok(lines.join("\n"))
}

#[cfg(test)]
#[path = "url_tests.rs"]
mod tests;
