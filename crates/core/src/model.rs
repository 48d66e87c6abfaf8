// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Agile board payload types.
//!
//! These mirror the JSON shape returned by the tracker's agile REST API
//! (camelCase keys). Payloads are often partially populated depending on
//! permissions and field selection, so every field is optional on the wire.
//! Defaults are filled in once while deserializing: missing or `null`
//! collections become empty, missing or `null` strings become `""`, and
//! only values whose absence carries meaning (WIP limits, sprint bounds,
//! nested settings) stay as `Option`.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes a value, mapping an explicit `null` to `T::default()`.
///
/// Combined with `#[serde(default)]` this also covers missing keys.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A value of the board's column field (e.g. the "In Progress" state).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Localized display name; falls back to `name` when absent or empty.
    #[serde(default)]
    pub presentation: Option<String>,
}

impl FieldValue {
    /// Returns the presentation if set, otherwise the raw name.
    pub fn display_name(&self) -> &str {
        match self.presentation.as_deref() {
            Some(presentation) if !presentation.is_empty() => presentation,
            _ => &self.name,
        }
    }
}

/// Work-in-progress limits for a column. A bound of 0 counts as unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WipLimit {
    #[serde(default)]
    pub min: Option<u32>,
    #[serde(default)]
    pub max: Option<u32>,
}

/// Presentation metadata attached to data-bearing columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgileColumn {
    #[serde(default, deserialize_with = "null_as_default")]
    pub field_values: Vec<FieldValue>,
    #[serde(default)]
    pub wip_limit: Option<WipLimit>,
}

/// A board column. Columns without `agile_column` are UI-only placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub agile_column: Option<AgileColumn>,
}

/// Reference from a cell to the column it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
}

/// Opaque issue reference. Only the number of issues in a cell matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRef {
    #[serde(default)]
    pub id: Option<String>,
}

/// Intersection of a row and a column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub column: Option<ColumnRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub issues: Vec<IssueRef>,
}

impl Cell {
    /// Returns true if this cell sits in the column with the given id.
    pub fn in_column(&self, column_id: &str) -> bool {
        self.column.as_ref().is_some_and(|column| column.id == column_id)
    }
}

/// A swimlane or the orphan row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cells: Vec<Cell>,
}

/// Owner of a board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Identifier in the hub user directory, used for profile links.
    #[serde(default, deserialize_with = "null_as_default")]
    pub ring_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
}

/// Sprint board snapshot: columns plus the issue placement grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub columns: Vec<Column>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub swimlanes: Vec<Row>,
    /// Cells of issues that belong to no swimlane.
    #[serde(default)]
    pub orphan_row: Option<Row>,
    #[serde(default)]
    pub owner: Option<Owner>,
}

impl Board {
    /// Iterates over all rows: swimlanes first, then the orphan row.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.swimlanes.iter().chain(self.orphan_row.iter())
    }

    /// Looks up a column by id.
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == column_id)
    }
}

/// A sprint of an agile board. `start` and `finish` are epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub start: Option<i64>,
    #[serde(default)]
    pub finish: Option<i64>,
    #[serde(default)]
    pub goal: Option<String>,
    /// Present only in extended sprint payloads.
    #[serde(default)]
    pub board: Option<Board>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintsSettings {
    #[serde(default, deserialize_with = "null_as_default")]
    pub disable_sprints: bool,
    /// Board-level query AND-ed into every column search.
    #[serde(default)]
    pub explicit_query: Option<String>,
}

/// Custom field whose values define the board columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSettings {
    #[serde(default)]
    pub field: Option<Field>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub template: bool,
}

/// Agile board definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub sprints_settings: Option<SprintsSettings>,
    #[serde(default)]
    pub column_settings: Option<ColumnSettings>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sprints: Vec<Sprint>,
    #[serde(default)]
    pub current_sprint: Option<Sprint>,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
}

impl Agile {
    /// Returns the field used to build column search queries.
    pub fn column_field(&self) -> Option<&Field> {
        self.column_settings.as_ref().and_then(|settings| settings.field.as_ref())
    }

    /// Returns the explicit query, if one is set and non-empty.
    pub fn explicit_query(&self) -> Option<&str> {
        self.sprints_settings
            .as_ref()
            .and_then(|settings| settings.explicit_query.as_deref())
            .filter(|query| !query.is_empty())
    }

    /// Looks up a sprint by id.
    pub fn sprint(&self, sprint_id: &str) -> Option<&Sprint> {
        self.sprints.iter().find(|sprint| sprint.id == sprint_id)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
