// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mods API client.
//!
//! ```text
//! SearchRequest --search()--> SearchPage { result, next }
//!                                  |            |
//!                           pick a ProjectHit   next_page(&next)
//!                                  |
//!                  versions(&hit, Some("1.20.1"))
//!                                  |
//!       download(&hit, "1.20.1", dir, progress) --> DownloadHandle
//! ```

pub mod client;
pub mod download;
pub mod models;


pub use client::{DEFAULT_BASE_URL, ModsClient, SearchPage};
pub use download::{
    ACCEPT_ENCODING, BodyReader, CHUNK_SIZE, DownloadHandle, DownloadProgress, ProgressCallbacks,
    copy_body, decode_body,
};
pub use models::{
    Dependency, DependencyType, FileHashes, Project, ProjectHit, ProjectRef, ProjectVersion,
    SearchResult, VersionFile, VersionType, first_file,
};
