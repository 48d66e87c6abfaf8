// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use super::*;
use tempfile::TempDir;
use wb_core::{Agile, Sprint};

#[test]
fn test_load_sprint_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sprint.json");
    std::fs::write(&path, r#"{"id":"109-1","name":"S1","board":{"columns":[]}}"#).unwrap();
    let sprint: Sprint = load(&path).unwrap();
    assert_eq!(sprint.id, "109-1");
    assert!(sprint.board.is_some());
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = load::<Sprint>(&temp.path().join("missing.json")).unwrap_err();
    match err {
        Error::ReadFile { path, .. } => assert!(path.ends_with("missing.json")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_decode_api_error_payload() {
    let err = decode::<Agile>(r#"{"error":"not_found","error_description":"Board not found"}"#)
        .unwrap_err();
    match err {
        Error::Core(wb_core::Error::Api(message)) => assert_eq!(message, "Board not found"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_decode_invalid_json() {
    assert!(matches!(decode::<Agile>("{not json").unwrap_err(), Error::Json(_)));
}

#[test]
fn test_decode_agile_list() {
    let agiles: Vec<Agile> = decode(r#"[{"id":"a"},{"id":"b","name":null}]"#).unwrap();
    assert_eq!(agiles.len(), 2);
    assert_eq!(agiles[1].name, "");
}
