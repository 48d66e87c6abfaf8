// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use clap::CommandFactory;
use std::path::Path;

#[test]
fn parse_config_before_subcommand() {
    let cli = Cli::try_parse_from(["wipboard", "--config", "/tmp/w.toml", "boards", "a.json"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/w.toml")));
}

#[test]
fn parse_config_after_subcommand() {
    let cli = Cli::try_parse_from(["wipboard", "boards", "a.json", "--config=/tmp/w.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/w.toml")));
}

#[test]
fn parse_pinned_clock() {
    let cli = Cli::try_parse_from(["wipboard", "--now", "1700000000000", "boards", "a.json"]).unwrap();
    assert_eq!(cli.now, Some(1_700_000_000_000));
}

#[test]
fn now_flag_is_hidden() {
    let mut cmd = Cli::command();
    let help = cmd.render_long_help().to_string();
    assert!(!help.contains("--now"));
    assert!(help.contains("--config"));
}

#[test]
fn version_flag_short_and_long() {
    for flag in ["-v", "-V", "--version"] {
        let err = Cli::try_parse_from(["wipboard", flag]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}

#[test]
fn completion_requires_known_shell() {
    assert!(Cli::try_parse_from(["wipboard", "completion", "bash"]).is_ok());
    assert!(Cli::try_parse_from(["wipboard", "completion", "cmd"]).is_err());
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}
