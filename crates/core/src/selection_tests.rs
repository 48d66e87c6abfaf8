// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::clock::FixedClock;
use crate::model::{Project, SprintsSettings};
use yare::parameterized;

const NOW: i64 = 1_700_000_000_000;
const DAY: i64 = 86_400_000;

fn sprint(id: &str, start: Option<i64>, finish: Option<i64>) -> Sprint {
    Sprint {
        id: id.into(),
        name: format!("Sprint {id}"),
        start,
        finish,
        ..Default::default()
    }
}

fn past_sprint(id: &str) -> Sprint {
    sprint(id, Some(NOW - 20 * DAY), Some(NOW - 10 * DAY))
}

fn running_sprint(id: &str) -> Sprint {
    sprint(id, Some(NOW - DAY), Some(NOW + DAY))
}

fn agile_with_sprints(sprints: Vec<Sprint>) -> Agile {
    Agile {
        id: "108-1".into(),
        name: "Team".into(),
        sprints_settings: Some(SprintsSettings::default()),
        sprints,
        ..Default::default()
    }
}

fn project(template: bool) -> Project {
    Project { id: "p".into(), template }
}

// =============================================================================
// are_sprints_enabled
// =============================================================================

#[test]
fn sprints_disabled_without_settings() {
    assert!(!are_sprints_enabled(&Agile::default()));
}

#[parameterized(
    enabled = { false, true },
    disabled = { true, false },
)]
fn sprints_follow_disable_flag(disable_sprints: bool, expected: bool) {
    let agile = Agile {
        sprints_settings: Some(SprintsSettings { disable_sprints, explicit_query: None }),
        ..Default::default()
    };
    assert_eq!(are_sprints_enabled(&agile), expected);
}

// =============================================================================
// is_current_sprint
// =============================================================================

#[parameterized(
    running = { Some(NOW - DAY), Some(NOW + DAY), true },
    finished = { Some(NOW - 2 * DAY), Some(NOW - DAY), false },
    upcoming = { Some(NOW + DAY), Some(NOW + 2 * DAY), false },
    starts_now = { Some(NOW), Some(NOW + DAY), false },
    finishes_now = { Some(NOW - DAY), Some(NOW), false },
    no_start = { None, Some(NOW + DAY), false },
    no_finish = { Some(NOW - DAY), None, false },
)]
fn current_sprint_bounds(start: Option<i64>, finish: Option<i64>, expected: bool) {
    assert_eq!(is_current_sprint_at(&sprint("s", start, finish), &FixedClock(NOW)), expected);
}

#[test]
fn is_current_sprint_uses_wall_clock() {
    let now = SystemClock.now_ms();
    assert!(is_current_sprint(&sprint("s", Some(now - DAY), Some(now + DAY))));
    assert!(!is_current_sprint(&sprint("s", Some(now - 2 * DAY), Some(now - DAY))));
}

// =============================================================================
// selectable_agiles / find_agile
// =============================================================================

#[test]
fn selectable_agiles_skip_template_only_boards() {
    let agiles = vec![
        Agile { id: "a".into(), projects: vec![project(false)], ..Default::default() },
        Agile { id: "b".into(), projects: vec![project(true)], ..Default::default() },
        Agile { id: "c".into(), projects: vec![project(true), project(false)], ..Default::default() },
        Agile { id: "d".into(), projects: vec![], ..Default::default() },
    ];
    let ids: Vec<_> = selectable_agiles(&agiles).iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn find_agile_by_id() {
    let agiles = vec![Agile { id: "a".into(), ..Default::default() }];
    assert_eq!(find_agile(&agiles, "a").unwrap().id, "a");
    assert!(matches!(find_agile(&agiles, "z"), Err(Error::AgileNotFound(id)) if id == "z"));
}

// =============================================================================
// current_sprint / default_selection
// =============================================================================

#[test]
fn current_sprint_ignores_stale_server_reference() {
    let mut agile = agile_with_sprints(vec![past_sprint("1")]);
    agile.current_sprint = Some(past_sprint("1"));
    assert!(current_sprint(&agile, &FixedClock(NOW)).is_none());
    assert_eq!(
        default_selection(&agile, &FixedClock(NOW)),
        Some(SprintSelection::Sprint("1".into()))
    );
    assert_eq!(
        sprint_options(&agile, &FixedClock(NOW)),
        vec![SprintOption::Sprint { id: "1".into(), label: "Sprint 1".into() }]
    );
    let err = resolve_sprint_id(&agile, &SprintSelection::Current, &FixedClock(NOW)).unwrap_err();
    assert!(matches!(err, Error::NoCurrentSprint(_)));
}

#[test]
fn current_sprint_uses_dates_over_server_reference() {
    let mut agile = agile_with_sprints(vec![past_sprint("1"), running_sprint("2")]);
    agile.current_sprint = Some(past_sprint("1"));
    assert_eq!(current_sprint(&agile, &FixedClock(NOW)).unwrap().id, "2");
}

#[test]
fn current_sprint_falls_back_to_dates() {
    let agile = agile_with_sprints(vec![past_sprint("1"), running_sprint("2")]);
    assert_eq!(current_sprint(&agile, &FixedClock(NOW)).unwrap().id, "2");
}

#[test]
fn no_current_sprint() {
    let agile = agile_with_sprints(vec![past_sprint("1")]);
    assert!(current_sprint(&agile, &FixedClock(NOW)).is_none());
}

#[test]
fn default_selection_without_sprints() {
    assert_eq!(default_selection(&agile_with_sprints(vec![]), &FixedClock(NOW)), None);
}

#[test]
fn default_selection_prefers_current_mode() {
    let agile = agile_with_sprints(vec![past_sprint("1"), running_sprint("2")]);
    assert_eq!(default_selection(&agile, &FixedClock(NOW)), Some(SprintSelection::Current));
}

#[test]
fn default_selection_falls_back_to_first_sprint() {
    let agile = agile_with_sprints(vec![past_sprint("1"), past_sprint("2")]);
    assert_eq!(
        default_selection(&agile, &FixedClock(NOW)),
        Some(SprintSelection::Sprint("1".into()))
    );
}

// =============================================================================
// sprint_options
// =============================================================================

#[test]
fn options_lead_with_current_sprint() {
    let agile = agile_with_sprints(vec![past_sprint("1"), running_sprint("2")]);
    let options = sprint_options(&agile, &FixedClock(NOW));
    assert_eq!(
        options,
        vec![
            SprintOption::CurrentSprint {
                label: CURRENT_SPRINT_LABEL,
                description: "Sprint 2".into(),
            },
            SprintOption::Separator,
            SprintOption::Sprint { id: "1".into(), label: "Sprint 1".into() },
            SprintOption::Sprint { id: "2".into(), label: "Sprint 2".into() },
        ]
    );
}

#[test]
fn options_without_current_sprint() {
    let agile = agile_with_sprints(vec![past_sprint("1")]);
    let options = sprint_options(&agile, &FixedClock(NOW));
    assert_eq!(options, vec![SprintOption::Sprint { id: "1".into(), label: "Sprint 1".into() }]);
}

// =============================================================================
// resolve_sprint_id
// =============================================================================

#[test]
fn resolve_current_sprint() {
    let agile = agile_with_sprints(vec![running_sprint("2")]);
    let id = resolve_sprint_id(&agile, &SprintSelection::Current, &FixedClock(NOW)).unwrap();
    assert_eq!(id, "2");
}

#[test]
fn resolve_current_sprint_missing() {
    let agile = agile_with_sprints(vec![past_sprint("1")]);
    let err = resolve_sprint_id(&agile, &SprintSelection::Current, &FixedClock(NOW)).unwrap_err();
    assert!(matches!(err, Error::NoCurrentSprint(_)));
}

#[test]
fn resolve_fixed_sprint() {
    let agile = agile_with_sprints(vec![past_sprint("1")]);
    let selection = SprintSelection::Sprint("1".into());
    assert_eq!(resolve_sprint_id(&agile, &selection, &FixedClock(NOW)).unwrap(), "1");
}

#[test]
fn resolve_unknown_fixed_sprint() {
    let agile = agile_with_sprints(vec![past_sprint("1")]);
    let selection = SprintSelection::Sprint("9".into());
    let err = resolve_sprint_id(&agile, &selection, &FixedClock(NOW)).unwrap_err();
    assert!(matches!(err, Error::SprintNotFound { .. }));
}

#[test]
fn resolve_fixed_sprint_without_sprint_list() {
    let agile = agile_with_sprints(vec![]);
    let selection = SprintSelection::Sprint("9".into());
    assert_eq!(resolve_sprint_id(&agile, &selection, &FixedClock(NOW)).unwrap(), "9");
}

// =============================================================================
// widget_title
// =============================================================================

const HOME: &str = "https://yt.example.com";

#[test]
fn title_for_fixed_sprint() {
    let agile = agile_with_sprints(vec![]);
    let s = sprint("109-2", None, None);
    let title = widget_title(&agile, Some(&s), false, HOME);
    assert_eq!(title.text, "Board Team: Sprint 109-2");
    assert_eq!(title.link, "https://yt.example.com/agiles/108-1/109-2");
}

#[test]
fn title_for_current_sprint_mode() {
    let agile = agile_with_sprints(vec![]);
    let s = sprint("109-2", None, None);
    let title = widget_title(&agile, Some(&s), true, HOME);
    assert_eq!(title.text, "Board Team: Current sprint (Sprint 109-2)");
}

#[test]
fn title_without_current_sprint() {
    let agile = agile_with_sprints(vec![]);
    let title = widget_title(&agile, None, true, HOME);
    assert_eq!(title.text, "Board Team: No current sprint found");
    assert_eq!(title.link, "https://yt.example.com/agiles/108-1");
}

#[test]
fn title_when_sprints_disabled() {
    let mut agile = agile_with_sprints(vec![]);
    agile.sprints_settings = Some(SprintsSettings { disable_sprints: true, explicit_query: None });
    let s = sprint("109-2", None, None);
    let title = widget_title(&agile, Some(&s), false, HOME);
    assert_eq!(title.text, "Board Team");
    assert_eq!(title.link, "https://yt.example.com/agiles/108-1");
}

#[test]
fn selection_serializes_with_mode_tag() {
    let json = serde_json::to_string(&SprintSelection::Sprint("1".into())).unwrap();
    assert_eq!(json, r#"{"mode":"sprint","id":"1"}"#);
    let json = serde_json::to_string(&SprintSelection::Current).unwrap();
    assert_eq!(json, r#"{"mode":"current"}"#);
}
