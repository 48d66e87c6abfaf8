// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board and sprint selection.
//!
//! A widget shows one board and either a fixed sprint or whichever sprint
//! is current at display time ("current sprint mode").

use serde::{Deserialize, Serialize};

use crate::clock::{ClockSource, SystemClock};
use crate::error::{Error, Result};
use crate::model::{Agile, Sprint};
use crate::query::board_url;

/// Returns true unless the board disables sprints.
///
/// A board without sprint settings is treated as sprint-less.
pub fn are_sprints_enabled(agile: &Agile) -> bool {
    agile
        .sprints_settings
        .as_ref()
        .is_some_and(|settings| !settings.disable_sprints)
}

/// Returns true if the sprint is running right now.
pub fn is_current_sprint(sprint: &Sprint) -> bool {
    is_current_sprint_at(sprint, &SystemClock)
}

/// Returns true if `start < now < finish`. Sprints missing either bound are
/// never current.
pub fn is_current_sprint_at(sprint: &Sprint, clock: &impl ClockSource) -> bool {
    let now = clock.now_ms();
    match (sprint.start, sprint.finish) {
        (Some(start), Some(finish)) => start < now && now < finish,
        _ => false,
    }
}

/// Boards that belong to at least one real (non-template) project.
pub fn selectable_agiles(agiles: &[Agile]) -> Vec<&Agile> {
    agiles
        .iter()
        .filter(|agile| agile.projects.iter().any(|project| !project.template))
        .collect()
}

/// Finds a board by id.
pub fn find_agile<'a>(agiles: &'a [Agile], agile_id: &str) -> Result<&'a Agile> {
    agiles
        .iter()
        .find(|agile| agile.id == agile_id)
        .ok_or_else(|| Error::AgileNotFound(agile_id.to_string()))
}

/// The board's current sprint: the first listed sprint running by date.
///
/// The payload's `current_sprint` reference is not consulted; it can lag
/// behind the sprint dates.
pub fn current_sprint<'a>(agile: &'a Agile, clock: &impl ClockSource) -> Option<&'a Sprint> {
    agile
        .sprints
        .iter()
        .find(|sprint| is_current_sprint_at(sprint, clock))
}

/// Which sprint a widget displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "id", rename_all = "snake_case")]
pub enum SprintSelection {
    /// Always display whichever sprint is current.
    Current,
    /// A fixed sprint id.
    Sprint(String),
}

/// Picks the initial sprint for a newly selected board.
///
/// Boards without sprints have nothing to select. Otherwise current sprint
/// mode wins when a sprint is running, falling back to the first sprint.
pub fn default_selection(agile: &Agile, clock: &impl ClockSource) -> Option<SprintSelection> {
    let first = agile.sprints.first()?;
    if current_sprint(agile, clock).is_some() {
        Some(SprintSelection::Current)
    } else {
        Some(SprintSelection::Sprint(first.id.clone()))
    }
}

/// Label of the current sprint mode option.
pub const CURRENT_SPRINT_LABEL: &str = "Always display current sprint";

/// An entry of the sprint picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SprintOption {
    /// "Always display current sprint", described by the current sprint name.
    CurrentSprint { label: &'static str, description: String },
    Separator,
    Sprint { id: String, label: String },
}

/// Builds the sprint picker entries for a board.
pub fn sprint_options(agile: &Agile, clock: &impl ClockSource) -> Vec<SprintOption> {
    let mut options = Vec::with_capacity(agile.sprints.len() + 2);
    if let Some(current) = current_sprint(agile, clock) {
        options.push(SprintOption::CurrentSprint {
            label: CURRENT_SPRINT_LABEL,
            description: current.name.clone(),
        });
        options.push(SprintOption::Separator);
    }
    options.extend(agile.sprints.iter().map(|sprint| SprintOption::Sprint {
        id: sprint.id.clone(),
        label: sprint.name.clone(),
    }));
    options
}

/// Resolves a selection to a concrete sprint id.
///
/// Fixed ids are checked against the board's sprint list when the payload
/// carries one.
pub fn resolve_sprint_id(
    agile: &Agile,
    selection: &SprintSelection,
    clock: &impl ClockSource,
) -> Result<String> {
    match selection {
        SprintSelection::Current => current_sprint(agile, clock)
            .map(|sprint| sprint.id.clone())
            .ok_or_else(|| Error::NoCurrentSprint(agile.name.clone())),
        SprintSelection::Sprint(id) => {
            if agile.sprints.is_empty() || agile.sprint(id).is_some() {
                Ok(id.clone())
            } else {
                Err(Error::SprintNotFound {
                    agile: agile.id.clone(),
                    sprint: id.clone(),
                })
            }
        }
    }
}

/// Widget header text and the link it points to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetTitle {
    pub text: String,
    pub link: String,
}

/// Builds the widget header for a board and the loaded sprint.
pub fn widget_title(
    agile: &Agile,
    sprint: Option<&Sprint>,
    current_sprint_mode: bool,
    home_url: &str,
) -> WidgetTitle {
    let mut text = format!("Board {}", agile.name);
    let mut linked_sprint = None;
    if are_sprints_enabled(agile) {
        match sprint {
            Some(sprint) if current_sprint_mode => {
                text.push_str(&format!(": Current sprint ({})", sprint.name));
                linked_sprint = Some(sprint);
            }
            Some(sprint) => {
                text.push_str(&format!(": {}", sprint.name));
                linked_sprint = Some(sprint);
            }
            None if current_sprint_mode => text.push_str(": No current sprint found"),
            None => {}
        }
    }
    WidgetTitle {
        text,
        link: board_url(home_url, agile, linked_sprint),
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
