// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board and sprint selection, saved as the widget config.
//!
//! Mirrors the widget configuration form: the board defaults to the first
//! selectable one and the sprint to [`default_selection`].

use std::path::Path;

use wb_core::query::create_board_url;
use wb_core::selection::find_agile;
use wb_core::{
    are_sprints_enabled, current_sprint, default_selection, resolve_sprint_id, selectable_agiles,
    Agile, ClockSource, SprintSelection,
};

use super::{resolve_home_url, Context};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::snapshot;

/// What the user asked for on the command line.
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub board: Option<String>,
    pub sprint: Option<String>,
    pub current: bool,
    pub home_url: Option<String>,
}

pub fn run(ctx: &Context, agiles_file: &Path, request: Request) -> Result<()> {
    let agiles: Vec<Agile> = snapshot::load(agiles_file)?;
    let existing = ctx.config()?;
    let home_url = resolve_home_url(request.home_url.clone(), existing.as_ref())?;

    let config = build_config(&agiles, &request, home_url, &ctx.clock)?;
    config.save(&ctx.config_path)?;
    println!("{}", describe(&agiles, &config));
    Ok(())
}

fn requested_selection(request: &Request) -> Option<SprintSelection> {
    if request.current {
        Some(SprintSelection::Current)
    } else {
        request.sprint.clone().map(SprintSelection::Sprint)
    }
}

pub(crate) fn build_config(
    agiles: &[Agile],
    request: &Request,
    home_url: String,
    clock: &impl ClockSource,
) -> Result<Config> {
    let agile = match request.board.as_deref() {
        Some(id) => find_agile(agiles, id)?,
        None => selectable_agiles(agiles)
            .into_iter()
            .next()
            .ok_or_else(|| Error::NoBoards(create_board_url(&home_url)))?,
    };

    let selection = if !are_sprints_enabled(agile) {
        if requested_selection(request).is_some() {
            tracing::warn!(agile = %agile.id, "sprints are disabled, ignoring sprint selection");
        }
        None
    } else {
        match requested_selection(request) {
            Some(selection) => {
                if agile.sprints.is_empty() {
                    return Err(Error::NoSprints(agile.name.clone()));
                }
                check_selection(agile, &selection, clock)?;
                Some(selection)
            }
            None => default_selection(agile, clock),
        }
    };

    tracing::debug!(agile = %agile.id, selection = ?selection, "resolved widget selection");
    Ok(Config::new(agile.id.clone(), selection, home_url))
}

/// Fixed sprints must exist. A current sprint need not exist yet; the
/// widget reports it as missing until one starts.
fn check_selection(
    agile: &Agile,
    selection: &SprintSelection,
    clock: &impl ClockSource,
) -> Result<()> {
    match selection {
        SprintSelection::Current => {
            if current_sprint(agile, clock).is_none() {
                tracing::warn!(agile = %agile.id, "no sprint is running right now");
            }
            Ok(())
        }
        SprintSelection::Sprint(_) => {
            resolve_sprint_id(agile, selection, clock)?;
            Ok(())
        }
    }
}

/// Summary line printed after saving.
pub(crate) fn describe(agiles: &[Agile], config: &Config) -> String {
    let name = agiles
        .iter()
        .find(|agile| agile.id == config.agile_id)
        .map(|agile| agile.name.as_str())
        .unwrap_or_default();
    let sprint = match config.selection() {
        Some(SprintSelection::Current) => "current sprint".to_string(),
        Some(SprintSelection::Sprint(id)) => {
            let sprint_name = agiles
                .iter()
                .find(|agile| agile.id == config.agile_id)
                .and_then(|agile| agile.sprint(&id))
                .map(|sprint| sprint.name.clone())
                .unwrap_or_else(|| id.clone());
            format!("sprint {sprint_name}")
        }
        None => "no sprint".to_string(),
    };
    format!("Configured board {name} ({}): {sprint}", config.agile_id)
}

#[cfg(test)]
#[path = "configure_tests.rs"]
mod tests;
