// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{json, Value};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const HOME: &str = "https://yt.example.com";
pub const NOW: i64 = 1_700_000_000_000;
pub const DAY: i64 = 86_400_000;

/// The binary with a clean, colorless environment.
pub fn wipboard() -> Command {
    let mut cmd = cargo_bin_cmd!("wipboard");
    cmd.env("NO_COLOR", "1")
        .env_remove("COLOR")
        .env_remove("WIPBOARD_CONFIG")
        .env_remove("WIPBOARD_LOG");
    cmd
}

/// Board with a finished and a running sprint.
pub fn agile_json() -> Value {
    json!({
        "id": "108-1",
        "name": "Team",
        "sprintsSettings": { "disableSprints": false, "explicitQuery": null },
        "columnSettings": { "field": { "id": "58-1", "name": "State" } },
        "sprints": [
            { "id": "109-1", "name": "Sprint 1", "start": NOW - 20 * DAY, "finish": NOW - 10 * DAY },
            { "id": "109-2", "name": "Sprint 2", "start": NOW - DAY, "finish": NOW + DAY }
        ],
        "owner": { "id": "1-1", "ringId": "ring-7", "fullName": "Jo Doe" },
        "projects": [ { "id": "0-1", "template": false } ]
    })
}

fn column(id: &str, name: &str, wip_limit: Value) -> Value {
    json!({
        "id": id,
        "agileColumn": {
            "fieldValues": [ { "name": name, "presentation": name } ],
            "wipLimit": wip_limit
        }
    })
}

fn cell(column_id: &str, issues: usize) -> Value {
    let issues: Vec<Value> = (0..issues).map(|n| json!({ "id": format!("2-{n}") })).collect();
    json!({ "id": null, "column": { "id": column_id }, "issues": issues })
}

/// Running sprint: Open holds 3 cards (max 2), In Progress 1 (min 2), Done 0.
pub fn sprint_json() -> Value {
    json!({
        "id": "109-2",
        "name": "Sprint 2",
        "start": NOW - DAY,
        "finish": NOW + DAY,
        "goal": "Ship the importer",
        "board": {
            "id": "109-2",
            "name": "Sprint 2",
            "columns": [
                column("110-1", "Open", json!({ "min": null, "max": 2 })),
                column("110-2", "In Progress", json!({ "min": 2, "max": 0 })),
                column("110-3", "Done", Value::Null),
                { "id": "110-4", "agileColumn": null }
            ],
            "swimlanes": [ { "id": "lane", "cells": [ cell("110-1", 2), cell("110-2", 1) ] } ],
            "orphanRow": { "cells": [ cell("110-1", 1), cell("110-3", 0) ] }
        }
    })
}

/// Temp directory holding payload files and a config path.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Fixture {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        self.write(name, &serde_json::to_string_pretty(value).unwrap())
    }

    pub fn agile_file(&self) -> PathBuf {
        self.write_json("agile.json", &agile_json())
    }

    pub fn agiles_file(&self) -> PathBuf {
        self.write_json("agiles.json", &json!([agile_json()]))
    }

    pub fn sprint_file(&self) -> PathBuf {
        self.write_json("sprint.json", &sprint_json())
    }

    pub fn config_path(&self) -> PathBuf {
        self.path("config.toml")
    }

    /// The binary pointed at this fixture's config with a pinned clock.
    pub fn cmd(&self) -> Command {
        let mut cmd = wipboard();
        cmd.arg("--config")
            .arg(self.config_path())
            .arg("--now")
            .arg(NOW.to_string());
        cmd
    }

    pub fn configure(&self, args: &[&str]) {
        self.cmd()
            .arg("configure")
            .arg(self.agiles_file())
            .arg("--home-url")
            .arg(HOME)
            .args(args)
            .assert()
            .success();
    }
}
