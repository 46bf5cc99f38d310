// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `reqwest`-backed API client.

use std::path::{Path, PathBuf};

use futures_util::TryStreamExt;
use reqwest::Client;
use reqwest::header::{ACCEPT_ENCODING, CONTENT_ENCODING, CONTENT_LENGTH, HeaderName};
use serde::de::DeserializeOwned;
use tokio_util::io::StreamReader;
use tracing::{debug, error, info};

use super::download::{self, DownloadHandle, DownloadProgress, copy_body, decode_body};
use super::models::{Project, ProjectRef, ProjectVersion, SearchResult, first_file};
use crate::config::types::ApiConfig;
use crate::error::{DownloadError, ModsResult, NetworkError};
use crate::net::{build_client, build_file_client, global_client, global_file_client};
use crate::query::{SearchCursor, SearchRequest};

/// Public API root.
pub const DEFAULT_BASE_URL: &str = "https://api.modrinth.com/v2";

/// One page of search results plus the cursor for the page after it.
#[derive(Debug, Clone)]
pub struct SearchPage {
    pub result: SearchResult,
    pub next: SearchCursor,
}

impl SearchPage {
    /// Whether the server has no hits beyond this page.
    #[must_use]
    pub fn is_last(&self) -> bool {
        let seen = u64::from(self.result.offset) + self.result.hits.len() as u64;
        self.result.hits.is_empty() || seen >= self.result.total_hits
    }
}

/// Client for the search, project and version endpoints.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ModsClient {
    http: Client,
    files: Client,
    base_url: String,
}

impl Default for ModsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ModsClient {
    /// Client for the public API using the shared HTTP client.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client for another API root, e.g. a staging server or a mock.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: global_client().clone(),
            files: global_file_client().clone(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client built from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an http(s) URL or the HTTP
    /// client cannot be built.
    pub fn from_config(config: &ApiConfig) -> ModsResult<Self> {
        if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
            return Err(NetworkError::InvalidUrl(config.base_url.clone()).into());
        }
        let user_agent = config.user_agent.as_deref();
        Ok(Self {
            http: build_client(user_agent, config.connect_timeout())?,
            files: build_file_client(user_agent, config.connect_timeout())?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, routes: &[&str]) -> String {
        format!("{}/{}", self.base_url, routes.join("/"))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> ModsResult<T> {
        let mut request = self.http.get(url);
        if !params.is_empty() {
            request = request.query(params);
        }

        debug!(url, ?params, "GET");

        let response = request.send().await.map_err(NetworkError::Reqwest)?;

        if !response.status().is_success() {
            return Err(NetworkError::HttpError {
                status: response.status().as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        let body = response.bytes().await.map_err(NetworkError::Reqwest)?;
        serde_json::from_slice(&body).map_err(|e| {
            NetworkError::Decode {
                url: url.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Run one search page.
    ///
    /// # Errors
    ///
    /// Returns a query error, without sending anything, if the limit is above
    /// 100 or the filter uses an unsupported key. Transport, status and
    /// decoding failures are returned as network errors.
    ///
    /// # Example
    /// ```no_run
    /// use modseek::api::ModsClient;
    /// use modseek::query::{Filter, SearchRequest};
    ///
    /// # async fn run() -> modseek::error::ModsResult<()> {
    /// let client = ModsClient::new();
    /// let request = SearchRequest::builder()
    ///     .filter(Filter::new().versions(["1.19", "1.10"]).categories(["fabric"]))
    ///     .limit(20)
    ///     .build();
    /// let page = client.search(&request).await?;
    /// let page_two = client.next_page(&page.next).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, request: &SearchRequest) -> ModsResult<SearchPage> {
        let params = request.to_params()?;
        let url = self.endpoint(&["search"]);

        let result: SearchResult = self.get_json(&url, &params).await?;

        debug!(
            total = result.total_hits,
            found = result.hits.len(),
            offset = result.offset,
            "search completed"
        );

        Ok(SearchPage {
            result,
            next: request.next_cursor(),
        })
    }

    /// Fetch the page a cursor points at.
    ///
    /// # Errors
    ///
    /// Same as [`ModsClient::search`].
    pub async fn next_page(&self, cursor: &SearchCursor) -> ModsResult<SearchPage> {
        self.search(cursor.request()).await
    }

    /// Look up a project by id or slug.
    ///
    /// # Errors
    ///
    /// Returns a network error on transport, status or decoding failure.
    pub async fn project(&self, id_or_slug: &str) -> ModsResult<Project> {
        let url = self.endpoint(&["project", id_or_slug]);
        self.get_json(&url, &[]).await
    }

    /// List the versions of a project, optionally for one game version.
    ///
    /// The list is returned as the server sent it.
    ///
    /// # Errors
    ///
    /// Returns a network error on transport, status or decoding failure.
    pub async fn versions<P: ProjectRef + ?Sized>(
        &self,
        project: &P,
        game_version: Option<&str>,
    ) -> ModsResult<Vec<ProjectVersion>> {
        let url = self.endpoint(&["project", project.project_id(), "version"]);
        let params: Vec<(&str, String)> = game_version
            .map(|v| vec![("game_versions", serde_json::json!([v]).to_string())])
            .unwrap_or_default();
        self.get_json(&url, &params).await
    }

    /// Start downloading the first file available for `game_version`.
    ///
    /// Returns as soon as the task is spawned. Must be called from within a
    /// tokio runtime. The file is written to `destination/<filename>`.
    ///
    /// # Example
    /// ```no_run
    /// use modseek::api::{ModsClient, ProgressCallbacks};
    ///
    /// # async fn run() -> modseek::error::ModsResult<()> {
    /// let client = ModsClient::new();
    /// let progress = ProgressCallbacks::new()
    ///     .on_set_max(|len| println!("max {len:?}"))
    ///     .on_update(|n| println!("{n}"));
    /// let handle = client.download("AANobbMI", "1.20.1", ".", progress);
    /// let path = handle.join().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn download<P, D>(
        &self,
        project: &P,
        game_version: impl Into<String>,
        destination: impl Into<PathBuf>,
        progress: D,
    ) -> DownloadHandle
    where
        P: ProjectRef + ?Sized,
        D: DownloadProgress,
    {
        let client = self.clone();
        let project_id = project.project_id().to_string();
        let name = project.display_name().to_string();
        let game_version = game_version.into();
        let destination = destination.into();

        DownloadHandle::new(tokio::spawn(async move {
            let result = client
                .run_download(&project_id, &name, &game_version, &destination, &progress)
                .await;
            if let Err(e) = &result {
                error!(project = %name, game_version = %game_version, error = %e, "download failed");
            }
            result
        }))
    }

    async fn run_download<D: DownloadProgress>(
        &self,
        project_id: &str,
        name: &str,
        game_version: &str,
        destination: &Path,
        progress: &D,
    ) -> ModsResult<PathBuf> {
        let versions = self.versions(project_id, Some(game_version)).await?;
        let file = first_file(&versions).ok_or_else(|| DownloadError::NoDownloadableFile {
            project: name.to_string(),
            game_version: game_version.to_string(),
        })?;

        let output = destination.join(&file.filename);
        debug!(url = %file.url, file = %output.display(), "resolved download target");

        let response = self
            .files
            .get(&file.url)
            .header(ACCEPT_ENCODING, download::ACCEPT_ENCODING)
            .send()
            .await
            .map_err(NetworkError::Reqwest)?;

        if !response.status().is_success() {
            return Err(NetworkError::HttpError {
                status: response.status().as_u16(),
                url: file.url.clone(),
            }
            .into());
        }

        let header = |name: HeaderName| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned)
        };
        let content_length = header(CONTENT_LENGTH);
        let content_encoding = header(CONTENT_ENCODING);

        let body = StreamReader::new(response.bytes_stream().map_err(std::io::Error::other));
        let reader = decode_body(content_encoding.as_deref(), body).ok_or_else(|| {
            NetworkError::Decode {
                url: file.url.clone(),
                message: format!(
                    "unsupported content encoding '{}'",
                    content_encoding.as_deref().unwrap_or_default()
                ),
            }
        })?;

        tokio::fs::create_dir_all(destination)
            .await
            .map_err(|e| DownloadError::Write {
                path: destination.display().to_string(),
                message: e.to_string(),
            })?;

        let mut out = tokio::fs::File::create(&output)
            .await
            .map_err(|e| DownloadError::Write {
                path: output.display().to_string(),
                message: e.to_string(),
            })?;

        let written = copy_body(
            content_length.as_deref(),
            reader,
            &mut out,
            progress,
            &file.url,
            &output,
        )
        .await?;

        info!(
            project = %name,
            file = %output.display(),
            bytes = written,
            "download completed"
        );

        Ok(output)
    }
}
