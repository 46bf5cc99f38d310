// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Response bodies of the API.
//!
//! | Type             | Endpoint                       |
//! |------------------|--------------------------------|
//! | `SearchResult`   | `GET /search`                  |
//! | `Project`        | `GET /project/{id}`            |
//! | `ProjectVersion` | `GET /project/{id}/version`    |

use serde::{Deserialize, Serialize};

use crate::query::{ProjectType, SideSupport};

/// One page of search hits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub hits: Vec<ProjectHit>,
    pub offset: u32,
    pub limit: u32,
    pub total_hits: u64,
}

/// Project summary as returned by a search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectHit {
    pub project_id: String,
    pub project_type: Option<ProjectType>,
    pub slug: Option<String>,
    pub author: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub display_categories: Vec<String>,
    #[serde(default)]
    pub versions: Vec<String>,
    pub downloads: u64,
    pub follows: u64,
    pub icon_url: Option<String>,
    pub date_created: String,
    pub date_modified: String,
    pub latest_version: Option<String>,
    pub client_side: SideSupport,
    pub server_side: SideSupport,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub featured_gallery: Option<String>,
    pub color: Option<u32>,
}

/// Full project record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub project_type: Option<ProjectType>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub game_versions: Vec<String>,
    #[serde(default)]
    pub loaders: Vec<String>,
    /// Version ids, oldest first.
    #[serde(default)]
    pub versions: Vec<String>,
    pub downloads: u64,
    pub followers: u64,
    pub client_side: SideSupport,
    pub server_side: SideSupport,
    pub published: String,
    pub updated: String,
}

/// One releasable version of a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectVersion {
    pub id: String,
    pub project_id: String,
    pub author_id: String,
    pub name: String,
    pub version_number: String,
    pub changelog: Option<String>,
    #[serde(default)]
    pub game_versions: Vec<String>,
    #[serde(default)]
    pub loaders: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    pub date_published: String,
    pub downloads: u64,
    pub version_type: VersionType,
    pub status: Option<String>,
    #[serde(default)]
    pub files: Vec<VersionFile>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

/// Release channel of a version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionType {
    Release,
    Beta,
    Alpha,
}

impl std::fmt::Display for VersionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Release => "release",
            Self::Beta => "beta",
            Self::Alpha => "alpha",
        })
    }
}

/// Downloadable file attached to a version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionFile {
    pub url: String,
    pub filename: String,
    #[serde(default)]
    pub primary: bool,
    pub size: u64,
    pub file_type: Option<String>,
    pub hashes: FileHashes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHashes {
    pub sha1: String,
    pub sha512: String,
}

/// Dependency of a version on another project or version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub version_id: Option<String>,
    pub project_id: Option<String>,
    pub file_name: Option<String>,
    pub dependency_type: DependencyType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyType {
    Required,
    Optional,
    Incompatible,
    Embedded,
}

/// Anything that identifies a project on the API.
pub trait ProjectRef {
    /// Project id or slug used in request paths.
    fn project_id(&self) -> &str;

    /// Human readable name for logs and errors.
    fn display_name(&self) -> &str {
        self.project_id()
    }
}

impl ProjectRef for ProjectHit {
    fn project_id(&self) -> &str {
        &self.project_id
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}

impl ProjectRef for Project {
    fn project_id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}

impl ProjectRef for str {
    fn project_id(&self) -> &str {
        self
    }
}

impl ProjectRef for String {
    fn project_id(&self) -> &str {
        self
    }
}

/// First file of the first version that has any files.
///
/// Later versions and files are not considered.
#[must_use]
pub fn first_file(versions: &[ProjectVersion]) -> Option<&VersionFile> {
    versions.iter().find_map(|version| version.files.first())
}
