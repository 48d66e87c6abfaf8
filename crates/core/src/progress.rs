// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board progress calculation.
//!
//! Converts a sprint board snapshot into one progress bar per data column.
//! Bars are scaled relative to the fullest column: the column with the
//! largest clamped amount reaches [`MAX_PROGRESS_BAR_HEIGHT`].
//!
//! Two amounts are tracked per column. `amount` is the true number of cards
//! and drives the title and the overdue/underdue flags. `clamped_amount` is
//! `amount` capped at the column's WIP maximum and drives the height, so an
//! overloaded column does not flatten the rest of the chart.

use serde::Serialize;

use crate::model::{AgileColumn, Board, Column, WipLimit};

/// Height in pixels of the tallest bar.
pub const MAX_PROGRESS_BAR_HEIGHT: u32 = 160;

/// Extra room above a full bar. Heights never exceed
/// `MAX_PROGRESS_BAR_HEIGHT + PROGRESS_BAR_TOP_MARGIN`.
pub const PROGRESS_BAR_TOP_MARGIN: u32 = 2;

/// Produces the human-readable title of a bar.
pub trait TitleFormatter {
    fn title(&self, count: u32, column_name: &str) -> String;
}

/// English titles: "1 card in state X" / "N cards in state X".
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishTitles;

impl TitleFormatter for EnglishTitles {
    fn title(&self, count: u32, column_name: &str) -> String {
        if count == 1 {
            format!("{count} card in state {column_name}")
        } else {
            format!("{count} cards in state {column_name}")
        }
    }
}

impl<F: Fn(u32, &str) -> String> TitleFormatter for F {
    fn title(&self, count: u32, column_name: &str) -> String {
        self(count, column_name)
    }
}

/// Renderable description of one column's bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressBar {
    pub column_id: String,
    pub column_name: String,
    /// True number of cards in the column.
    pub amount: u32,
    /// `amount` capped at `max_limit`; the value the height is scaled from.
    pub clamped_amount: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_limit: Option<u32>,
    /// Bar height in pixels.
    pub height: u32,
    pub title: String,
    /// More cards than the WIP maximum allows.
    pub overdue: bool,
    /// Fewer cards than the WIP minimum requires.
    pub underdue: bool,
}

/// Counts the issues placed in a column across all swimlanes and the
/// orphan row.
pub fn count_issues_in_column(board: &Board, column_id: &str) -> u32 {
    let total: usize = board
        .rows()
        .flat_map(|row| row.cells.iter())
        .filter(|cell| cell.in_column(column_id))
        .map(|cell| cell.issues.len())
        .sum();
    u32::try_from(total).unwrap_or(u32::MAX)
}

/// Joins the column's field value presentations with ", ".
pub fn column_display_name(agile_column: &AgileColumn) -> String {
    agile_column
        .field_values
        .iter()
        .map(|value| value.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Computes progress bars with English titles.
pub fn compute_board_progress(board: &Board) -> Vec<ProgressBar> {
    compute_board_progress_with(board, &EnglishTitles)
}

/// Computes one progress bar per column that has agile metadata, in board
/// column order.
pub fn compute_board_progress_with<F>(board: &Board, titles: &F) -> Vec<ProgressBar>
where
    F: TitleFormatter + ?Sized,
{
    let measured: Vec<Measurement<'_>> = board
        .columns
        .iter()
        .filter_map(|column| Measurement::of(board, column))
        .collect();

    let max = measured
        .iter()
        .map(|m| m.clamped_amount)
        .max()
        .unwrap_or(0);

    measured
        .into_iter()
        .map(|m| {
            let column_name = column_display_name(m.agile_column);
            ProgressBar {
                column_id: m.column.id.clone(),
                title: titles.title(m.amount, &column_name),
                column_name,
                amount: m.amount,
                clamped_amount: m.clamped_amount,
                min_limit: m.limit.and_then(|limit| limit.min),
                max_limit: m.limit.and_then(|limit| limit.max),
                height: bar_height(m.clamped_amount, max),
                overdue: m.is_overdue(),
                underdue: m.is_underdue(),
            }
        })
        .collect()
}

/// Scales `amount` against the largest amount on the board, rounding up.
///
/// An all-empty board (`max == 0`) divides by the full height instead, so
/// every bar is 0 high.
pub fn bar_height(amount: u32, max: u32) -> u32 {
    let divisor = if max == 0 { MAX_PROGRESS_BAR_HEIGHT } else { max };
    let scaled = (u64::from(amount) * u64::from(MAX_PROGRESS_BAR_HEIGHT)).div_ceil(u64::from(divisor));
    let cap = MAX_PROGRESS_BAR_HEIGHT + PROGRESS_BAR_TOP_MARGIN;
    u32::try_from(scaled.min(u64::from(cap))).unwrap_or(cap)
}

/// First-pass result for a single data column.
struct Measurement<'a> {
    column: &'a Column,
    agile_column: &'a AgileColumn,
    limit: Option<WipLimit>,
    amount: u32,
    clamped_amount: u32,
}

impl<'a> Measurement<'a> {
    fn of(board: &Board, column: &'a Column) -> Option<Self> {
        let agile_column = column.agile_column.as_ref()?;
        let limit = agile_column.wip_limit;
        let amount = count_issues_in_column(board, &column.id);
        let clamped_amount = match limit.and_then(|l| set_bound(l.max)) {
            Some(max) if amount > max => max,
            _ => amount,
        };
        Some(Measurement { column, agile_column, limit, amount, clamped_amount })
    }

    fn is_overdue(&self) -> bool {
        self.limit
            .and_then(|limit| set_bound(limit.max))
            .is_some_and(|max| self.amount > max)
    }

    fn is_underdue(&self) -> bool {
        self.limit
            .and_then(|limit| set_bound(limit.min))
            .is_some_and(|min| self.amount < min)
    }
}

/// A WIP bound of 0 means "no bound".
fn set_bound(bound: Option<u32>) -> Option<u32> {
    bound.filter(|&value| value != 0)
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
