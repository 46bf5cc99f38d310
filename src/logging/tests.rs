// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_from_u8() {
    assert_eq!(LogLevel::try_from(0).unwrap(), LogLevel::Silent);
    assert_eq!(LogLevel::try_from(3).unwrap(), LogLevel::Info);
    assert_eq!(LogLevel::try_from(6).unwrap(), LogLevel::Dump);
    assert_eq!(u8::from(LogLevel::Debug), 4);
    assert!(LogLevel::Trace > LogLevel::Info);
}

#[test]
fn test_log_level_out_of_range() {
    let err = LogLevel::try_from(7).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'log_level' in section '[global]': log level must be 0-6, got 7");
}

#[test]
fn test_log_level_serde_as_integer() {
    assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), "2");
    assert_eq!(serde_json::from_str::<LogLevel>("5").unwrap(), LogLevel::Trace);
    assert!(serde_json::from_str::<LogLevel>("9").is_err());
}

#[test]
fn test_directive_scoped_to_crate() {
    assert_eq!(LogLevel::Silent.directive(), "off");
    assert_eq!(LogLevel::Info.directive(), "warn,modseek=info");
    assert_eq!(LogLevel::Trace.directive(), "warn,modseek=trace");
    assert_eq!(LogLevel::Dump.directive(), "trace");
}

#[test]
fn test_log_config() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::Info);
    assert_eq!(config.file_level(), LogLevel::Trace);
    assert!(config.log_file().is_none());

    let config = LogConfig::builder()
        .with_console_level(LogLevel::Debug)
        .with_log_file("logs/modseek.log")
        .build();
    assert_eq!(config.console_level(), LogLevel::Debug);
    assert_eq!(config.log_file(), Some(Path::new("logs/modseek.log")));
}
