// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;
use wb_core::{ProgressBar, WidgetTitle, MAX_PROGRESS_BAR_HEIGHT};

use crate::colors;

/// Width in characters of a full-height bar.
pub const BAR_WIDTH: usize = 20;

/// Shown instead of bars when the board has no data columns.
pub const EMPTY_BOARD: &str = "No columns to display";

/// A progress bar together with the issue list link of its column.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView {
    #[serde(flatten)]
    pub bar: ProgressBar,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerView {
    pub name: String,
    pub url: String,
}

/// Everything the board widget shows for one sprint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetView {
    pub title: WidgetTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerView>,
    pub columns: Vec<ColumnView>,
}

/// Converts a pixel height into a number of bar characters, rounding up.
pub fn bar_cells(height: u32) -> usize {
    let cells = (height as usize * BAR_WIDTH).div_ceil(MAX_PROGRESS_BAR_HEIGHT as usize);
    cells.min(BAR_WIDTH)
}

fn limit_note(bar: &ProgressBar) -> Option<String> {
    if bar.overdue {
        bar.max_limit.map(|max| format!("over WIP limit {max}"))
    } else if bar.underdue {
        bar.min_limit.map(|min| format!("under WIP minimum {min}"))
    } else {
        None
    }
}

/// Format a single progress bar line.
///
/// Output format:
/// ```text
/// In Progress  ########............  8 cards in state In Progress (over WIP limit 5)
/// ```
pub fn format_progress_bar(bar: &ProgressBar, name_width: usize, colorize: bool) -> String {
    let cells = bar_cells(bar.height);
    let mut graphic = "#".repeat(cells);
    graphic.push_str(&".".repeat(BAR_WIDTH - cells));
    if colorize {
        if bar.overdue {
            graphic = colors::overdue(&graphic);
        } else if bar.underdue {
            graphic = colors::underdue(&graphic);
        }
    }

    let mut line = format!(
        "{:<width$}  {}  {}",
        bar.column_name,
        graphic,
        bar.title,
        width = name_width
    );
    if let Some(note) = limit_note(bar) {
        line.push_str(&format!(" ({note})"));
    }
    line
}

/// Format all bars, aligning the bars after the longest column name.
pub fn format_progress(bars: &[ProgressBar], colorize: bool) -> String {
    if bars.is_empty() {
        return EMPTY_BOARD.to_string();
    }
    let name_width = bars
        .iter()
        .map(|bar| bar.column_name.chars().count())
        .max()
        .unwrap_or(0);
    bars.iter()
        .map(|bar| format_progress_bar(bar, name_width, colorize))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the full widget view.
pub fn format_widget(view: &WidgetView, colorize: bool) -> String {
    let mut output = Vec::new();

    if colorize {
        output.push(colors::header(&view.title.text));
    } else {
        output.push(view.title.text.clone());
    }
    output.push(format!("  {}", view.title.link));

    if let Some(goal) = view.goal.as_deref().filter(|goal| !goal.is_empty()) {
        output.push(String::new());
        output.push(goal.to_string());
    }
    if let Some(owner) = &view.owner {
        output.push(String::new());
        output.push(format!("Owner: {} ({})", owner.name, owner.url));
    }

    output.push(String::new());
    let bars: Vec<ProgressBar> = view.columns.iter().map(|column| column.bar.clone()).collect();
    output.push(format_progress(&bars, colorize));

    if !view.columns.is_empty() {
        output.push(String::new());
        output.push("Links:".to_string());
        for column in &view.columns {
            output.push(format!("  {}: {}", column.bar.column_name, column.url));
        }
    }

    output.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
