// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        ModsError (16 bytes)
//!              |
//!    +---------+---------+
//!    v         v         v
//!  Query    Network   Download
//!   Box       Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Query    LimitTooLarge, UnsupportedFilter, UnknownFilter, InvalidValue
//!   Network  Reqwest, HttpError, InvalidUrl, Stream, Decode
//!   Download NoDownloadableFile, Write, TaskFailed
//!
//! ConfigError (InvalidValue) travels through anyhow in the config layer.
//! Query errors are raised before any request is sent.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ModsError`].
pub type ModsResult<T> = std::result::Result<T, ModsError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum two words wide.
#[derive(Debug, Error)]
pub enum ModsError {
    /// The request was rejected locally before reaching the network.
    #[error("query error: {0}")]
    Query(#[from] Box<QueryError>),

    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Download could not be resolved or written.
    #[error("download error: {0}")]
    Download(#[from] Box<DownloadError>),
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ModsError {
                fn from(err: $error) -> Self {
                    ModsError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    QueryError => Query,
    NetworkError => Network,
    DownloadError => Download,
}

impl ModsError {
    /// Returns the query error if this is a local validation failure.
    #[must_use]
    pub fn as_query(&self) -> Option<&QueryError> {
        match self {
            Self::Query(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the network error if the request reached the transport layer.
    #[must_use]
    pub fn as_network(&self) -> Option<&NetworkError> {
        match self {
            Self::Network(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the download error if resolving or writing the file failed.
    #[must_use]
    pub fn as_download(&self) -> Option<&DownloadError> {
        match self {
            Self::Download(err) => Some(err),
            _ => None,
        }
    }
}

// --- Query Errors ---

/// Errors raised while validating a search before it is sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Page size above the API maximum.
    #[error("limit {limit} exceeds the maximum page size of {max}")]
    LimitTooLarge { limit: u32, max: u32 },

    /// Filter key the facet encoder does not translate.
    #[error("filter '{key}' is not supported, choose another filter")]
    UnsupportedFilter { key: &'static str },

    /// Filter key that is not known at all.
    #[error("unknown filter '{key}'")]
    UnknownFilter { key: String },

    /// Filter value that cannot be parsed for its key.
    #[error("invalid value '{value}' for filter '{key}'")]
    InvalidValue { key: String, value: String },
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Response body stream broke off.
    #[error("failed to read response body from {url}: {message}")]
    Stream { url: String, message: String },

    /// Response body was not valid JSON of the expected shape, or used an
    /// unsupported content encoding.
    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

// --- Download Errors ---

/// Errors raised by a download task.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// No version for the requested game version carries a file.
    #[error("no downloadable file found for '{project}' on game version {game_version}")]
    NoDownloadableFile {
        project: String,
        game_version: String,
    },

    /// Destination could not be created or written.
    #[error("failed to write {path}: {message}")]
    Write { path: String, message: String },

    /// Background task panicked or was aborted.
    #[error("download task failed: {0}")]
    TaskFailed(String),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

#[cfg(test)]
mod tests;
