// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Search query description.
//!
//! ```text
//! Filter + query text + SortIndex + offset/limit
//!        |
//!        v
//!  SearchRequest --validate()--> wire params
//!        |
//!        v
//!  SearchCursor (same request, offset += limit)
//! ```
//!
//! # Key Types
//!
//! | Type            | Purpose                                |
//! |-----------------|----------------------------------------|
//! | `Filter`        | versions, categories, project type     |
//! | `SortIndex`     | relevance/downloads/follows/...        |
//! | `SearchRequest` | one page worth of query parameters     |
//! | `SearchCursor`  | echoed request for the following page  |

pub mod facets;


use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::error::QueryError;
pub use facets::{Facets, encode_filter};

/// Largest page size the search endpoint accepts.
pub const MAX_LIMIT: u32 = 100;

/// Page size used when none is given.
pub const DEFAULT_LIMIT: u32 = 10;

/// Kind of project hosted on the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Mod,
    Plugin,
    Datapack,
    Shader,
    Resourcepack,
    Modpack,
    /// Any type this client does not know yet.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Mod => "mod",
            Self::Plugin => "plugin",
            Self::Datapack => "datapack",
            Self::Shader => "shader",
            Self::Resourcepack => "resourcepack",
            Self::Modpack => "modpack",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for ProjectType {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // plural forms are what the site uses in URLs
        match s.to_lowercase().trim_end_matches('s') {
            "mod" => Ok(Self::Mod),
            "plugin" => Ok(Self::Plugin),
            "datapack" => Ok(Self::Datapack),
            "shader" => Ok(Self::Shader),
            "resourcepack" => Ok(Self::Resourcepack),
            "modpack" => Ok(Self::Modpack),
            _ => Err(QueryError::InvalidValue {
                key: "project_type".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Client/server support level of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideSupport {
    Required,
    Optional,
    Unsupported,
    #[serde(other)]
    Unknown,
}

impl std::str::FromStr for SideSupport {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "required" => Ok(Self::Required),
            "optional" => Ok(Self::Optional),
            "unsupported" => Ok(Self::Unsupported),
            "unknown" => Ok(Self::Unknown),
            _ => Err(QueryError::InvalidValue {
                key: "side".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Sort order of search hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortIndex {
    #[default]
    Relevance,
    Downloads,
    Follows,
    Newest,
    Updated,
}

impl SortIndex {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Downloads => "downloads",
            Self::Follows => "follows",
            Self::Newest => "newest",
            Self::Updated => "updated",
        }
    }
}

impl std::fmt::Display for SortIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortIndex {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relevance" => Ok(Self::Relevance),
            "downloads" => Ok(Self::Downloads),
            "follows" => Ok(Self::Follows),
            "newest" => Ok(Self::Newest),
            "updated" => Ok(Self::Updated),
            _ => Err(QueryError::InvalidValue {
                key: "index".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Search filter.
///
/// Versions are OR'd together in a single facet group, every category is a
/// group of its own and therefore AND'd with everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    /// Game versions, any of which qualifies.
    pub versions: Vec<String>,
    /// Accepted, but not translated into a facet.
    pub project_type: Option<ProjectType>,
    /// Categories, all of which must match.
    pub categories: Vec<String>,
    /// Not supported by the encoder; rejected when set.
    pub client_side: Option<SideSupport>,
    /// Not supported by the encoder; rejected when set.
    pub server_side: Option<SideSupport>,
    /// Not supported by the encoder; rejected when set.
    pub open_source: Option<bool>,
}

impl Filter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.versions.push(version.into());
        self
    }

    #[must_use]
    pub fn versions<I, S>(mut self, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.versions.extend(versions.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    #[must_use]
    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories
            .extend(categories.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub const fn project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = Some(project_type);
        self
    }

    /// Apply a `key=value` pair, as given on the command line.
    ///
    /// List keys accept comma-separated values and append to what is
    /// already set. Unsupported keys are stored so that encoding can
    /// reject them.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnknownFilter`] for an unrecognised key and
    /// [`QueryError::InvalidValue`] if the value does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), QueryError> {
        let split = || {
            value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        match key {
            "versions" | "version" => self.versions.extend(split()),
            "categories" | "category" => self.categories.extend(split()),
            "project_type" => self.project_type = Some(value.parse()?),
            "client_side" => self.client_side = Some(value.parse()?),
            "server_side" => self.server_side = Some(value.parse()?),
            "open_source" => {
                self.open_source =
                    Some(value.parse().map_err(|_| QueryError::InvalidValue {
                        key: key.to_string(),
                        value: value.to_string(),
                    })?);
            }
            _ => {
                return Err(QueryError::UnknownFilter {
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }

    /// First unsupported key that is set, if any.
    #[must_use]
    pub const fn unsupported_key(&self) -> Option<&'static str> {
        if self.client_side.is_some() {
            Some("client_side")
        } else if self.server_side.is_some() {
            Some("server_side")
        } else if self.open_source.is_some() {
            Some("open_source")
        } else {
            None
        }
    }

    /// Encode into facet groups.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnsupportedFilter`] if an unsupported key is set.
    pub fn to_facets(&self) -> Result<Facets, QueryError> {
        encode_filter(self)
    }
}

/// Parameters of one search page.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct SearchRequest {
    #[builder(into)]
    query: Option<String>,
    #[builder(default)]
    filter: Filter,
    #[builder(default)]
    index: SortIndex,
    #[builder(default = 0)]
    offset: u32,
    #[builder(default = DEFAULT_LIMIT)]
    limit: u32,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SearchRequest {
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    #[must_use]
    pub const fn filter(&self) -> &Filter {
        &self.filter
    }

    #[must_use]
    pub const fn index(&self) -> SortIndex {
        self.index
    }

    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Check the request and produce the query parameters to send.
    ///
    /// Parameters without a value are left out. `facets` is always present,
    /// `[]` when the filter is empty.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::LimitTooLarge`] if `limit` exceeds [`MAX_LIMIT`],
    /// or [`QueryError::UnsupportedFilter`] for an unsupported filter key.
    pub fn to_params(&self) -> Result<Vec<(&'static str, String)>, QueryError> {
        if self.limit > MAX_LIMIT {
            return Err(QueryError::LimitTooLarge {
                limit: self.limit,
                max: MAX_LIMIT,
            });
        }

        let facets = self.filter.to_facets()?;

        let mut params = Vec::with_capacity(5);
        if let Some(query) = &self.query {
            params.push(("query", query.clone()));
        }
        params.push(("facets", facets.encode()));
        params.push(("index", self.index.to_string()));
        params.push(("offset", self.offset.to_string()));
        params.push(("limit", self.limit.to_string()));
        Ok(params)
    }

    /// Cursor for the page following this one.
    #[must_use]
    pub fn next_cursor(&self) -> SearchCursor {
        SearchCursor {
            request: Self {
                offset: self.offset.saturating_add(self.limit),
                ..self.clone()
            },
        }
    }
}

/// Handle for fetching the next page of a search.
///
/// Holds the original query text, filter, sort index and limit together with
/// the advanced offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCursor {
    request: SearchRequest,
}

impl SearchCursor {
    /// Offset the next page will start at.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.request.offset
    }

    /// Request that fetches the next page.
    #[must_use]
    pub const fn request(&self) -> &SearchRequest {
        &self.request
    }

    /// Same query with a different page size.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.request.limit = limit;
        self
    }
}
