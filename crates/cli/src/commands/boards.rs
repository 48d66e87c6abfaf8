// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use serde::Serialize;
use wb_core::query::create_board_url;
use wb_core::{
    are_sprints_enabled, default_selection, selectable_agiles, sprint_options, Agile,
    ClockSource, SprintOption, SprintSelection,
};

use super::{resolve_home_url, Context};
use crate::cli::OutputFormat;
use crate::colors;
use crate::error::{Error, Result};
use crate::snapshot;

/// A board as offered by the configuration form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BoardChoice {
    id: String,
    name: String,
    sprints_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_selection: Option<SprintSelection>,
    options: Vec<SprintOption>,
}

pub fn run(
    ctx: &Context,
    agiles_file: &Path,
    home_url: Option<String>,
    output: OutputFormat,
) -> Result<()> {
    let agiles: Vec<Agile> = snapshot::load(agiles_file)?;
    let config = ctx.config()?;
    // A missing home url only degrades the create-board hint.
    let home_url = resolve_home_url(home_url, config.as_ref()).unwrap_or_default();
    let choices = board_choices(&agiles, &ctx.clock, &home_url)?;
    println!("{}", render(&choices, output, colors::should_colorize())?);
    Ok(())
}

pub(crate) fn board_choices(
    agiles: &[Agile],
    clock: &impl ClockSource,
    home_url: &str,
) -> Result<Vec<BoardChoice>> {
    let selectable = selectable_agiles(agiles);
    tracing::debug!(total = agiles.len(), selectable = selectable.len(), "filtered boards");
    if selectable.is_empty() {
        return Err(Error::NoBoards(create_board_url(home_url)));
    }
    Ok(selectable
        .into_iter()
        .map(|agile| {
            let sprints_enabled = are_sprints_enabled(agile);
            let (default_selection, options) = if sprints_enabled {
                (default_selection(agile, clock), sprint_options(agile, clock))
            } else {
                (None, Vec::new())
            };
            BoardChoice {
                id: agile.id.clone(),
                name: agile.name.clone(),
                sprints_enabled,
                default_selection,
                options,
            }
        })
        .collect())
}

fn format_option(option: &SprintOption, default: Option<&SprintSelection>) -> String {
    let marker = |selected: bool| if selected { "*" } else { " " };
    match option {
        SprintOption::CurrentSprint { label, description } => format!(
            "  {} {label} ({description})",
            marker(default == Some(&SprintSelection::Current))
        ),
        SprintOption::Separator => "    ---".to_string(),
        SprintOption::Sprint { id, label } => {
            let selected = matches!(default, Some(SprintSelection::Sprint(d)) if d == id);
            format!("  {} {id}  {label}", marker(selected))
        }
    }
}

fn format_choice(choice: &BoardChoice, colorize: bool) -> String {
    let heading = format!("{} ({})", choice.name, choice.id);
    let mut lines = vec![if colorize { colors::header(&heading) } else { heading }];
    if !choice.sprints_enabled {
        lines.push("    sprints disabled".to_string());
    } else if choice.options.is_empty() {
        lines.push("    no sprints".to_string());
    }
    lines.extend(
        choice
            .options
            .iter()
            .map(|option| format_option(option, choice.default_selection.as_ref())),
    );
    lines.join("\n")
}

pub(crate) fn render(choices: &[BoardChoice], output: OutputFormat, colorize: bool) -> Result<String> {
    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(choices)?),
        OutputFormat::Text => Ok(choices
            .iter()
            .map(|choice| format_choice(choice, colorize))
            .collect::<Vec<_>>()
            .join("\n\n")),
    }
}

#[cfg(test)]
#[path = "boards_tests.rs"]
mod tests;
