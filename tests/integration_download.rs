// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for background downloads using wiremock.
//!
//! Covers:
//! - Progress callbacks (set_max once, cumulative updates)
//! - Compressed bodies keep their raw Content-Length
//! - File placement in the destination directory
//! - Missing files and HTTP errors surfaced through the handle

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_compression::tokio::bufread::GzipEncoder;
use modseek::api::{ModsClient, ProgressCallbacks};
use modseek::error::{DownloadError, NetworkError};
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::io::AsyncReadExt;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[derive(Debug, Default)]
struct Recorded {
    set_max: Vec<Option<String>>,
    updates: Vec<u64>,
}

fn recording_callbacks() -> (ProgressCallbacks, Arc<Mutex<Recorded>>) {
    let recorded = Arc::new(Mutex::new(Recorded::default()));
    let on_max = Arc::clone(&recorded);
    let on_update = Arc::clone(&recorded);
    let callbacks = ProgressCallbacks::new()
        .on_set_max(move |len| on_max.lock().unwrap().set_max.push(len.map(String::from)))
        .on_update(move |n| on_update.lock().unwrap().updates.push(n));
    (callbacks, recorded)
}

fn file(url: &str, name: &str) -> Value {
    json!({
        "url": url,
        "filename": name,
        "primary": true,
        "size": 1000,
        "file_type": null,
        "hashes": { "sha1": "a", "sha512": "b" }
    })
}

fn version(id: &str, files: Value) -> Value {
    json!({
        "id": id,
        "project_id": "AANobbMI",
        "author_id": "u1",
        "name": format!("Sodium {id}"),
        "version_number": id,
        "changelog": null,
        "game_versions": ["1.19"],
        "loaders": ["fabric"],
        "featured": false,
        "date_published": "2023-01-01T00:00:00Z",
        "downloads": 10,
        "version_type": "release",
        "status": "listed",
        "files": files,
        "dependencies": []
    })
}

async fn mount_versions(server: &MockServer, versions: Value) {
    Mock::given(method("GET"))
        .and(path("/project/AANobbMI/version"))
        .and(query_param("game_versions", r#"["1.19"]"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(versions))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_download_reports_progress_and_writes_file() {
    let server = MockServer::start().await;
    let dir = temp_dir();
    let body: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();

    let url = format!("{}/files/sodium.jar", server.uri());
    mount_versions(
        &server,
        json!([
            version("0.4.2", json!([])),
            version("0.4.1", json!([file(&url, "sodium.jar"), file(&url, "other.jar")]))
        ]),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/files/sodium.jar"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = ModsClient::with_base_url(server.uri());
    let (callbacks, recorded) = recording_callbacks();
    let destination = dir.path().join("mods");

    let handle = client.download("AANobbMI", "1.19", &destination, callbacks);
    let written = handle.join().await.unwrap();

    assert_eq!(written, destination.join("sodium.jar"));
    assert_eq!(std::fs::read(&written).unwrap(), body);
    assert!(!destination.join("other.jar").exists());

    let recorded = recorded.lock().unwrap();
    assert_eq!(recorded.set_max, vec![Some("1000".to_string())]);
    assert_eq!(recorded.updates.last(), Some(&1000));
    assert!(recorded.updates.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_download_gzip_body_reports_raw_length() {
    let server = MockServer::start().await;
    let dir = temp_dir();
    let body = vec![b'a'; 1000];
    let mut compressed = Vec::new();
    GzipEncoder::new(&body[..])
        .read_to_end(&mut compressed)
        .await
        .unwrap();

    let url = format!("{}/files/sodium.jar", server.uri());
    mount_versions(&server, json!([version("0.4.1", json!([file(&url, "sodium.jar")]))])).await;

    Mock::given(method("GET"))
        .and(path("/files/sodium.jar"))
        .and(header_exists("accept-encoding"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-encoding", "gzip")
                .set_body_bytes(compressed.clone()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ModsClient::with_base_url(server.uri());
    let (callbacks, recorded) = recording_callbacks();
    let written = client
        .download("AANobbMI", "1.19", dir.path(), callbacks)
        .join()
        .await
        .unwrap();

    assert_eq!(std::fs::read(&written).unwrap(), body);
    let recorded = recorded.lock().unwrap();
    assert_eq!(recorded.set_max, vec![Some(compressed.len().to_string())]);
    assert_eq!(recorded.updates.last(), Some(&1000));
}

#[tokio::test]
async fn test_download_unsupported_encoding() {
    let server = MockServer::start().await;
    let dir = temp_dir();

    let url = format!("{}/files/sodium.jar", server.uri());
    mount_versions(&server, json!([version("0.4.1", json!([file(&url, "sodium.jar")]))])).await;

    Mock::given(method("GET"))
        .and(path("/files/sodium.jar"))
        .and(header_exists("accept-encoding"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-encoding", "zstd")
                .set_body_bytes(vec![0u8; 16]),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ModsClient::with_base_url(server.uri());
    let (callbacks, recorded) = recording_callbacks();
    let err = client
        .download("AANobbMI", "1.19", dir.path(), callbacks)
        .join()
        .await
        .unwrap_err();

    match err.as_network() {
        Some(NetworkError::Decode { url: failed, message }) => {
            assert_eq!(failed, &url);
            assert_eq!(message, "unsupported content encoding 'zstd'");
        }
        other => panic!("Expected NetworkError::Decode, got {other:?}"),
    }
    assert!(!dir.path().join("sodium.jar").exists());
    assert!(recorded.lock().unwrap().set_max.is_empty());
}

#[tokio::test]
async fn test_download_returns_before_completion() {
    let server = MockServer::start().await;
    let dir = temp_dir();

    Mock::given(method("GET"))
        .and(path("/project/AANobbMI/version"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = ModsClient::with_base_url(server.uri());
    let handle = client.download("AANobbMI", "1.19", dir.path(), ());
    assert!(!handle.is_finished());

    let err = handle.join().await.unwrap_err();
    assert!(err.as_download().is_some(), "{err:?}");
}

#[tokio::test]
async fn test_download_without_files() {
    let server = MockServer::start().await;
    let dir = temp_dir();

    mount_versions(&server, json!([version("0.4.2", json!([]))])).await;

    Mock::given(method("GET"))
        .and(path("/files/sodium.jar"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = ModsClient::with_base_url(server.uri());
    let (callbacks, recorded) = recording_callbacks();
    let err = client
        .download("AANobbMI", "1.19", dir.path(), callbacks)
        .join()
        .await
        .unwrap_err();

    match err.as_download() {
        Some(DownloadError::NoDownloadableFile {
            project,
            game_version,
        }) => {
            assert_eq!(project, "AANobbMI");
            assert_eq!(game_version, "1.19");
        }
        other => panic!("Expected DownloadError::NoDownloadableFile, got {other:?}"),
    }
    insta::assert_snapshot!(
        err.to_string(),
        @"download error: no downloadable file found for 'AANobbMI' on game version 1.19"
    );

    let recorded = recorded.lock().unwrap();
    assert!(recorded.set_max.is_empty());
    assert!(recorded.updates.is_empty());
}

#[tokio::test]
async fn test_download_file_http_error() {
    let server = MockServer::start().await;
    let dir = temp_dir();

    let url = format!("{}/files/gone.jar", server.uri());
    mount_versions(&server, json!([version("0.4.2", json!([file(&url, "gone.jar")]))])).await;

    Mock::given(method("GET"))
        .and(path("/files/gone.jar"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = ModsClient::with_base_url(server.uri());
    let err = client
        .download("AANobbMI", "1.19", dir.path(), ())
        .join()
        .await
        .unwrap_err();

    match err.as_network() {
        Some(NetworkError::HttpError { status, url: failed }) => {
            assert_eq!(*status, 404);
            assert_eq!(failed, &url);
        }
        other => panic!("Expected NetworkError::HttpError, got {other:?}"),
    }
    assert!(!dir.path().join("gone.jar").exists());
}
