// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use wb_core::query::owner_profile_url;
use wb_core::{
    column_issues_url, resolve_sprint_id, widget_title, Agile, ClockSource, Sprint, SprintSelection,
};

use super::progress::{board_bars, sprint_board};
use super::{resolve_home_url, Context};
use crate::cli::OutputFormat;
use crate::colors;
use crate::config::Config;
use crate::display::{format_widget, ColumnView, OwnerView, WidgetView};
use crate::error::Result;
use crate::snapshot;

pub fn run(
    ctx: &Context,
    agile_file: &Path,
    sprint_file: &Path,
    home_url: Option<String>,
    output: OutputFormat,
) -> Result<()> {
    let agile: Agile = snapshot::load(agile_file)?;
    let sprint: Sprint = snapshot::load(sprint_file)?;
    let config = ctx.config()?;
    let home_url = resolve_home_url(home_url, config.as_ref())?;
    let selection = configured_selection(config.as_ref(), &agile);
    let current_sprint_mode = selection == Some(SprintSelection::Current);
    let shown = displayed_sprint(selection.as_ref(), &agile, &sprint, &ctx.clock)?;

    let view = build_view(&agile, shown, current_sprint_mode, &home_url)?;
    println!("{}", render(&view, output, colors::should_colorize())?);
    Ok(())
}

/// The saved selection, when the config selects this board.
pub(crate) fn configured_selection(
    config: Option<&Config>,
    agile: &Agile,
) -> Option<SprintSelection> {
    let config = config?;
    if config.agile_id != agile.id {
        tracing::warn!(
            configured = %config.agile_id,
            shown = %agile.id,
            "showing a board other than the configured one"
        );
        return None;
    }
    config.selection()
}

/// The sprint the widget shows, or `None` in current sprint mode when no
/// sprint is running.
pub(crate) fn displayed_sprint<'a>(
    selection: Option<&SprintSelection>,
    agile: &Agile,
    sprint: &'a Sprint,
    clock: &impl ClockSource,
) -> Result<Option<&'a Sprint>> {
    match selection {
        Some(SprintSelection::Current) => {
            match resolve_sprint_id(agile, &SprintSelection::Current, clock) {
                Ok(current) => {
                    if current != sprint.id {
                        tracing::warn!(
                            current = %current,
                            shown = %sprint.id,
                            "showing a sprint other than the current one"
                        );
                    }
                    Ok(Some(sprint))
                }
                Err(wb_core::Error::NoCurrentSprint(_)) => {
                    tracing::info!(agile = %agile.id, "no sprint is running right now");
                    Ok(None)
                }
                Err(e) => Err(e.into()),
            }
        }
        Some(SprintSelection::Sprint(configured)) => {
            if *configured != sprint.id {
                tracing::warn!(
                    configured = %configured,
                    shown = %sprint.id,
                    "showing a sprint other than the configured one"
                );
            }
            Ok(Some(sprint))
        }
        None => Ok(Some(sprint)),
    }
}

pub(crate) fn build_view(
    agile: &Agile,
    sprint: Option<&Sprint>,
    current_sprint_mode: bool,
    home_url: &str,
) -> Result<WidgetView> {
    let board = sprint.map(sprint_board).transpose()?;
    let owner = agile
        .owner
        .as_ref()
        .or_else(|| board.and_then(|board| board.owner.as_ref()))
        .map(|owner| OwnerView {
            name: owner.full_name.clone(),
            url: owner_profile_url(home_url, owner),
        });
    let columns = match (sprint, board) {
        (Some(sprint), Some(board)) => board_bars(sprint)?
            .into_iter()
            .map(|bar| {
                let url = board
                    .column(&bar.column_id)
                    .map(|column| column_issues_url(home_url, agile, sprint, column))
                    .unwrap_or_default();
                ColumnView { bar, url }
            })
            .collect(),
        _ => Vec::new(),
    };

    Ok(WidgetView {
        title: widget_title(agile, sprint, current_sprint_mode, home_url),
        goal: sprint
            .and_then(|sprint| sprint.goal.clone())
            .filter(|goal| !goal.is_empty()),
        owner,
        columns,
    })
}

pub(crate) fn render(view: &WidgetView, output: OutputFormat, colorize: bool) -> Result<String> {
    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
        OutputFormat::Text => Ok(format_widget(view, colorize)),
    }
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
