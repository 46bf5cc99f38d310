// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Background file download.
//!
//! ```text
//! ModsClient::download()  (returns immediately)
//!        |
//!        v  tokio::spawn
//! versions(project, game_version)
//!        |  first version with files, first file
//!        v
//! GET file.url (Accept-Encoding: gzip, br) --> set_max(raw Content-Length)
//!        |
//!        v  decode_body(Content-Encoding)
//! read <= 64 KiB --> write --> update(total)   (until EOF)
//!        |
//!        v
//! DownloadHandle::join() -> ModsResult<PathBuf>
//! ```
//!
//! Partial files are left in place on failure.

use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

use async_compression::tokio::bufread::{BrotliDecoder, GzipDecoder};
use tokio::io::{AsyncBufRead, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::task::JoinHandle;

use crate::error::{DownloadError, ModsResult, NetworkError};

/// Upper bound on the bytes taken per read.
///
/// A read returns what the body has ready, so over the network a chunk
/// usually ends at a frame boundary below this size. `update` fires once per
/// chunk actually read.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Content codings requested for file downloads and decoded by
/// [`decode_body`].
pub const ACCEPT_ENCODING: &str = "gzip, br";

/// Decoded body of a file response.
pub type BodyReader = Pin<Box<dyn AsyncRead + Send>>;

/// Wrap `body` in the decoder named by its `Content-Encoding` header.
///
/// Returns `None` for a coding other than gzip or brotli.
pub fn decode_body<R>(content_encoding: Option<&str>, body: R) -> Option<BodyReader>
where
    R: AsyncBufRead + Send + 'static,
{
    let coding = content_encoding.map(|c| c.trim().to_ascii_lowercase());
    match coding.as_deref() {
        None | Some("" | "identity") => Some(Box::pin(body)),
        Some("gzip" | "x-gzip") => Some(Box::pin(GzipDecoder::new(body))),
        Some("br") => Some(Box::pin(BrotliDecoder::new(body))),
        Some(_) => None,
    }
}

/// Receives progress of a running download.
///
/// `set_max` is called once before the first chunk with the raw
/// `Content-Length` header, `update` after every chunk with the number of
/// bytes written so far.
pub trait DownloadProgress: Send + Sync + 'static {
    fn set_max(&self, _content_length: Option<&str>) {}

    fn update(&self, _downloaded: u64) {}
}

impl DownloadProgress for () {}

impl<T: DownloadProgress + ?Sized> DownloadProgress for Arc<T> {
    fn set_max(&self, content_length: Option<&str>) {
        (**self).set_max(content_length);
    }

    fn update(&self, downloaded: u64) {
        (**self).update(downloaded);
    }
}

type SetMaxFn = Box<dyn Fn(Option<&str>) + Send + Sync>;
type UpdateFn = Box<dyn Fn(u64) + Send + Sync>;

/// Closure-backed [`DownloadProgress`].
///
/// # Example
/// ```no_run
/// use modseek::api::ProgressCallbacks;
///
/// let progress = ProgressCallbacks::new()
///     .on_set_max(|len| println!("size: {len:?}"))
///     .on_update(|n| println!("{n} bytes"));
/// ```
#[derive(Default)]
pub struct ProgressCallbacks {
    set_max: Option<SetMaxFn>,
    update: Option<UpdateFn>,
}

impl ProgressCallbacks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_set_max<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<&str>) + Send + Sync + 'static,
    {
        self.set_max = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_update<F>(mut self, f: F) -> Self
    where
        F: Fn(u64) + Send + Sync + 'static,
    {
        self.update = Some(Box::new(f));
        self
    }
}

impl std::fmt::Debug for ProgressCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressCallbacks")
            .field("set_max", &self.set_max.is_some())
            .field("update", &self.update.is_some())
            .finish()
    }
}

impl DownloadProgress for ProgressCallbacks {
    fn set_max(&self, content_length: Option<&str>) {
        if let Some(f) = &self.set_max {
            f(content_length);
        }
    }

    fn update(&self, downloaded: u64) {
        if let Some(f) = &self.update {
            f(downloaded);
        }
    }
}

/// Handle to a download running in the background.
///
/// Dropping the handle detaches the task; it keeps running until it finishes
/// or the runtime shuts down.
#[derive(Debug)]
pub struct DownloadHandle {
    inner: JoinHandle<ModsResult<PathBuf>>,
}

impl DownloadHandle {
    pub(crate) const fn new(inner: JoinHandle<ModsResult<PathBuf>>) -> Self {
        Self { inner }
    }

    /// Whether the task has completed, successfully or not.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    /// Wait for the download and return the path of the written file.
    ///
    /// # Errors
    ///
    /// Returns the error the task failed with, or
    /// [`DownloadError::TaskFailed`] if it panicked.
    pub async fn join(self) -> ModsResult<PathBuf> {
        match self.inner.await {
            Ok(result) => result,
            Err(e) => Err(DownloadError::TaskFailed(e.to_string()).into()),
        }
    }
}

/// Copy `reader` into `writer` chunk by chunk, reporting progress.
///
/// Each read takes at most [`CHUNK_SIZE`] bytes; `update` sees the running
/// total after every chunk. Returns the number of bytes written.
///
/// # Errors
///
/// Read failures map to [`NetworkError::Stream`], write failures to
/// [`DownloadError::Write`].
pub async fn copy_body<R, W, P>(
    content_length: Option<&str>,
    mut reader: R,
    writer: &mut W,
    progress: &P,
    source: &str,
    destination: &Path,
) -> ModsResult<u64>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
    P: DownloadProgress + ?Sized,
{
    let write_error = |e: std::io::Error| DownloadError::Write {
        path: destination.display().to_string(),
        message: e.to_string(),
    };

    progress.set_max(content_length);

    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut written: u64 = 0;

    loop {
        let n = reader
            .read(&mut buf)
            .await
            .map_err(|e| NetworkError::Stream {
                url: source.to_string(),
                message: e.to_string(),
            })?;
        if n == 0 {
            break;
        }

        writer.write_all(&buf[..n]).await.map_err(write_error)?;
        written += n as u64;
        progress.update(written);
    }

    writer.flush().await.map_err(write_error)?;
    Ok(written)
}
