// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! wb-core: Sprint board progress calculation.
//!
//! This crate turns agile board payloads into progress bar geometry, builds
//! issue search links for board columns, and resolves which sprint a board
//! widget should display. Everything here is pure computation over the
//! [`model`] types; fetching payloads is left to the caller.

pub mod api_error;
pub mod clock;
pub mod error;
pub mod model;
pub mod progress;
pub mod query;
pub mod selection;

pub use api_error::ApiError;
pub use clock::{ClockSource, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use model::{
    Agile, AgileColumn, Board, Cell, Column, ColumnRef, ColumnSettings, Field, FieldValue,
    IssueRef, Owner, Project, Row, Sprint, SprintsSettings, WipLimit,
};
pub use progress::{
    column_display_name, compute_board_progress, compute_board_progress_with,
    count_issues_in_column, EnglishTitles, ProgressBar, TitleFormatter, MAX_PROGRESS_BAR_HEIGHT,
    PROGRESS_BAR_TOP_MARGIN,
};
pub use query::{column_issues_url, column_search_query, column_search_url};
pub use selection::{
    are_sprints_enabled, current_sprint, default_selection, is_current_sprint,
    is_current_sprint_at, resolve_sprint_id, selectable_agiles, sprint_options, widget_title,
    SprintOption, SprintSelection, WidgetTitle,
};
