// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use modseek::cli::{Cli, Command};
use modseek::config::types::SearchConfig;

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["modseek", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["modseek", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["modseek"]).unwrap();
    assert!(cli.command.is_none());
}

// =============================================================================
// Search Command
// =============================================================================

#[test]
fn cli_search_wire_params() {
    let cli = Cli::try_parse_from([
        "modseek",
        "search",
        "sodium",
        "-g",
        "1.19",
        "-g",
        "1.10",
        "-c",
        "fabric",
        "--offset",
        "20",
        "--limit",
        "20",
        "--index",
        "downloads",
    ])
    .unwrap();
    let Some(Command::Search(args)) = cli.command else {
        panic!("expected search command");
    };

    let params = args
        .to_request(&SearchConfig::default())
        .unwrap()
        .to_params()
        .unwrap();
    let rendered: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
    insta::assert_snapshot!(rendered.join("&"), @r#"query=sodium&facets=[["categories:fabric"],["versions:1.19","versions:1.10"]]&index=downloads&offset=20&limit=20"#);
}

#[test]
fn cli_search_rejects_unknown_index() {
    assert!(Cli::try_parse_from(["modseek", "search", "--index", "popular"]).is_err());
}

#[test]
fn cli_search_rejects_unknown_type() {
    assert!(Cli::try_parse_from(["modseek", "search", "-t", "world"]).is_err());
}

#[test]
fn cli_search_unknown_filter_key() {
    let cli = Cli::try_parse_from(["modseek", "search", "-f", "license=mit"]).unwrap();
    let Some(Command::Search(args)) = cli.command else {
        panic!("expected search command");
    };
    let err = args.to_filter().unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"unknown filter 'license'");
}

// =============================================================================
// Download Command
// =============================================================================

#[test]
fn cli_download_requires_game_version() {
    assert!(Cli::try_parse_from(["modseek", "download", "sodium"]).is_err());
}

#[test]
fn cli_download_no_progress() {
    let cli = Cli::try_parse_from(["modseek", "download", "sodium", "1.19", "--no-progress"])
        .unwrap();
    let Some(Command::Download(args)) = cli.command else {
        panic!("expected download command");
    };
    assert!(args.no_progress);
    assert!(args.directory.is_none());
}
