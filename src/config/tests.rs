// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::api::DEFAULT_BASE_URL;
use crate::logging::LogLevel;
use crate::query::SortIndex;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.log_level, LogLevel::Info);
    assert_eq!(config.global.file_log_level, LogLevel::Trace);
    assert!(config.global.log_file.is_none());
    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    assert!(config.api.connect_timeout().is_none());
    assert_eq!(config.search.limit, 10);
    assert_eq!(config.search.index, SortIndex::Relevance);
    assert_eq!(config.download.directory, PathBuf::from("."));
}

#[test]
fn test_parse_all_sections() {
    let config = Config::parse(
        r#"
[global]
log_level = 4
log_file = "logs/modseek.log"

[api]
base_url = "http://localhost:8080/v2/"
user_agent = "tester/1.0"
connect_timeout_secs = 5

[search]
limit = 50
index = "downloads"

[download]
directory = "mods"
"#,
    )
    .unwrap();

    assert_eq!(config.global.log_level, LogLevel::Debug);
    assert_eq!(config.global.log_file, Some(PathBuf::from("logs/modseek.log")));
    assert_eq!(config.api.base_url, "http://localhost:8080/v2/");
    assert_eq!(config.api.user_agent.as_deref(), Some("tester/1.0"));
    assert_eq!(config.api.connect_timeout(), Some(Duration::from_secs(5)));
    assert_eq!(config.search.limit, 50);
    assert_eq!(config.search.index, SortIndex::Downloads);
    assert_eq!(config.download.directory, PathBuf::from("mods"));
}

#[test]
fn test_limit_above_maximum_rejected() {
    let err = Config::parse("[search]\nlimit = 101\n").unwrap_err();
    assert!(err.to_string().contains("must be at most 100"), "{err}");
}

#[test]
fn test_unknown_field_rejected() {
    assert!(Config::parse("[search]\nsort = \"newest\"\n").is_err());
    assert!(Config::parse("[global]\nlog_level = 9\n").is_err());
}

#[test]
fn test_loader_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[search]\nlimit = 20\n")
        .set("search.limit", 30)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.search.limit, 30);
}

#[test]
fn test_loader_tracks_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("")
        .add_toml_file_optional("/nonexistent/modseek.toml");
    insta::assert_snapshot!(loader.format_loaded_files().join("\n"), @"1. <inline>");
}

#[test]
fn test_format_options() {
    let options = Config::default().format_options();
    let keys: Vec<&str> = options
        .iter()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(
        keys,
        [
            "api.base_url",
            "api.user_agent",
            "download.directory",
            "global.file_log_level",
            "global.log_file",
            "global.log_level",
            "search.index",
            "search.limit",
        ]
    );
    assert!(options.contains(&"search.limit          = 10".to_string()));
    assert!(options.contains(&"api.base_url          = https://api.modrinth.com/v2".to_string()));
}
