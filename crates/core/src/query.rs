// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search query and link construction.
//!
//! Column links open the tracker's issue list filtered to the sprint (or
//! board) and to the column's field values, for example:
//!
//! ```text
//! Board Team: {Sprint 4} State: {Open}, {Reopened}
//! (has: {Board Team} State: {Open}) and (project: WB)
//! ```

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::model::{Agile, Column, Owner, Sprint};
use crate::selection::are_sprints_enabled;

/// Characters escaped by `encodeURIComponent`: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a string as a single query-string value.
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Builds the query fragment matching the column's field values.
///
/// Returns an empty string when the board has no column field or the
/// column has no field values.
pub fn column_search_query(agile: &Agile, column: &Column) -> String {
    let Some(field) = agile.column_field() else {
        return String::new();
    };
    let values = match &column.agile_column {
        Some(agile_column) if !agile_column.field_values.is_empty() => &agile_column.field_values,
        _ => return String::new(),
    };
    let values = values
        .iter()
        .map(|value| format!("{{{}}}", value.name))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}: {}", field.name, values)
}

/// Builds the query fragment selecting the sprint, or the whole board when
/// sprints are disabled.
pub fn sprint_search_query(agile: &Agile, sprint: &Sprint) -> String {
    if are_sprints_enabled(agile) {
        format!("Board {}: {{{}}}", agile.name, sprint.name)
    } else {
        format!("has: {{Board {}}}", agile.name)
    }
}

/// Builds the full, unencoded search query for a column.
pub fn column_issues_query(agile: &Agile, sprint: &Sprint, column: &Column) -> String {
    let fragment = format!(
        "{} {}",
        sprint_search_query(agile, sprint),
        column_search_query(agile, column)
    );
    match agile.explicit_query() {
        Some(explicit) => format!("({fragment}) and ({explicit})"),
        None => fragment,
    }
}

/// Builds the percent-encoded search query for a column.
pub fn column_search_url(agile: &Agile, sprint: &Sprint, column: &Column) -> String {
    encode_uri_component(&column_issues_query(agile, sprint, column))
}

/// Builds the issue list link for a column.
pub fn column_issues_url(home_url: &str, agile: &Agile, sprint: &Sprint, column: &Column) -> String {
    format!(
        "{}/issues?q={}",
        home_url.trim_end_matches('/'),
        column_search_url(agile, sprint, column)
    )
}

/// Link to the board, or to the sprint when one is given.
pub fn board_url(home_url: &str, agile: &Agile, sprint: Option<&Sprint>) -> String {
    let mut link = format!("{}/agiles/{}", home_url.trim_end_matches('/'), agile.id);
    if let Some(sprint) = sprint {
        link.push('/');
        link.push_str(&sprint.id);
    }
    link
}

/// Link to the board creation page.
pub fn create_board_url(home_url: &str) -> String {
    if home_url.ends_with('/') {
        format!("{home_url}agiles/create")
    } else {
        format!("{home_url}/agiles/create")
    }
}

/// Link to the owner's profile page.
pub fn owner_profile_url(home_url: &str, owner: &Owner) -> String {
    format!("{}/users/{}", home_url.trim_end_matches('/'), owner.ring_id)
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
