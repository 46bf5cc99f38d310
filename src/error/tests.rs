// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, DownloadError, ModsError, ModsResult, QueryError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "search".to_string(),
        key: "limit".to_string(),
        message: "must be at most 100".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'limit' in section '[search]': must be at most 100"
    );
}

#[test]
fn test_query_error_display() {
    let err = QueryError::LimitTooLarge {
        limit: 101,
        max: 100,
    };
    insta::assert_snapshot!(err.to_string(), @"limit 101 exceeds the maximum page size of 100");

    let err = QueryError::UnsupportedFilter { key: "client_side" };
    insta::assert_snapshot!(
        err.to_string(),
        @"filter 'client_side' is not supported, choose another filter"
    );
}

#[test]
fn test_download_error_display() {
    let err = DownloadError::NoDownloadableFile {
        project: "Sodium".to_string(),
        game_version: "1.19".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"no downloadable file found for 'Sodium' on game version 1.19"
    );
}

#[test]
fn test_boxed_conversion_and_accessors() {
    let err: ModsError = QueryError::UnsupportedFilter { key: "open_source" }.into();
    assert_eq!(
        err.as_query(),
        Some(&QueryError::UnsupportedFilter { key: "open_source" })
    );
    assert!(err.as_network().is_none());
    assert!(err.as_download().is_none());
}

#[test]
fn test_mods_error_size() {
    let size = std::mem::size_of::<ModsError>();
    assert!(size <= 16, "ModsError is {size} bytes, expected <= 16");
}

#[test]
fn test_mods_result_size() {
    let size = std::mem::size_of::<ModsResult<()>>();
    assert!(size <= 16, "ModsResult<()> is {size} bytes, expected <= 16");
}
