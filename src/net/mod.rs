// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP client construction and terminal progress display.
//!
//! ```text
//! global_client()       OnceLock, connection pool, keep-alive
//! build_client()        user agent + connect timeout from [api]
//! build_file_client()   same, without automatic decompression
//!
//! TerminalProgress (DownloadProgress)
//!   set_max(Some(n)) -> Bar     [=====>     ] 50MB/100MB
//!   set_max(None)    -> Spinner * 50MB @ 5MB/s
//!   Silent           -> hidden
//! ```

use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, ClientBuilder};

use crate::api::DownloadProgress;
use crate::error::{ModsResult, NetworkError};

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("modseek/", env!("CARGO_PKG_VERSION"));

fn client_builder(user_agent: Option<&str>, connect_timeout: Option<Duration>) -> ClientBuilder {
    let mut builder = Client::builder().user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT));
    if let Some(timeout) = connect_timeout {
        builder = builder.connect_timeout(timeout);
    }
    builder
}

/// Global API client - initialized once, reused across all requests.
/// Falls back to a basic client if custom configuration fails.
pub fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        client_builder(None, None)
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Global file client, see [`build_file_client`].
pub fn global_file_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        client_builder(None, None)
            .no_gzip()
            .no_brotli()
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Build an API client with a custom user agent and connect timeout.
///
/// Compressed JSON bodies are decoded transparently.
///
/// # Errors
///
/// Returns [`NetworkError::Reqwest`] if the TLS backend cannot be initialized.
pub fn build_client(
    user_agent: Option<&str>,
    connect_timeout: Option<Duration>,
) -> ModsResult<Client> {
    client_builder(user_agent, connect_timeout)
        .build()
        .map_err(|e| NetworkError::Reqwest(e).into())
}

/// Build a client for file downloads.
///
/// Automatic decompression is off so that `Content-Length` reaches the
/// progress callback untouched; bodies are decoded by
/// [`crate::api::download::decode_body`].
///
/// # Errors
///
/// Returns [`NetworkError::Reqwest`] if the TLS backend cannot be initialized.
pub fn build_file_client(
    user_agent: Option<&str>,
    connect_timeout: Option<Duration>,
) -> ModsResult<Client> {
    client_builder(user_agent, connect_timeout)
        .no_gzip()
        .no_brotli()
        .build()
        .map_err(|e| NetworkError::Reqwest(e).into())
}

/// Pre-validated progress bar style for known file sizes.
fn bar_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} @ {binary_bytes_per_sec} ({eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-")
        })
        .clone()
}

/// Pre-validated spinner style for unknown file sizes.
fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] {bytes} @ {binary_bytes_per_sec}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        })
        .clone()
}

/// Progress display style for downloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressDisplay {
    /// Bar when the size is known, spinner otherwise
    #[default]
    Bar,
    /// No visual progress (silent mode)
    Silent,
}

/// Terminal progress display driven by download callbacks.
#[derive(Debug, Clone)]
pub struct TerminalProgress {
    bar: ProgressBar,
}

impl TerminalProgress {
    #[must_use]
    pub fn new(display: ProgressDisplay) -> Self {
        let bar = match display {
            ProgressDisplay::Bar => ProgressBar::new_spinner(),
            ProgressDisplay::Silent => ProgressBar::hidden(),
        };
        Self { bar }
    }

    /// Current position in bytes.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total length, if `set_max` received a parseable size.
    #[must_use]
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    pub fn finish(&self, message: impl Into<String>) {
        self.bar.finish_with_message(message.into());
    }

    pub fn abandon(&self, message: impl Into<String>) {
        self.bar.abandon_with_message(message.into());
    }
}

impl DownloadProgress for TerminalProgress {
    fn set_max(&self, content_length: Option<&str>) {
        match content_length.and_then(|s| s.trim().parse::<u64>().ok()) {
            Some(total) => {
                self.bar.set_length(total);
                self.bar.set_style(bar_style());
            }
            None => self.bar.set_style(spinner_style()),
        }
    }

    fn update(&self, downloaded: u64) {
        self.bar.set_position(downloaded);
    }
}

#[cfg(test)]
mod tests;
