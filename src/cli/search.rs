// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `search` command.
//!
//! ```text
//! modseek search [QUERY] [options]
//!   -g 1.20.1 -g 1.20   → one versions group (any)
//!   -c fabric -c food   → one group per category (all)
//!   -f key=value        → Filter::set
//!   --pages N           → follow the cursor up to N pages
//!
//! USAGE:
//! $ modseek search sodium -g 1.20.1 -c fabric --index downloads
//! $ modseek search -f categories=fabric,optimization --limit 50 --pages 3
//! ```

use clap::Args;

use crate::config::types::SearchConfig;
use crate::error::QueryError;
use crate::query::{Filter, ProjectType, SearchRequest, SortIndex};

/// Arguments for the `search` command.
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Free text query.
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Game version, any of the given versions qualifies.
    #[arg(short = 'g', long = "game-version", value_name = "VERSION", action = clap::ArgAction::Append)]
    pub versions: Vec<String>,

    /// Category or loader, all given categories must match.
    #[arg(short = 'c', long = "category", value_name = "CATEGORY", action = clap::ArgAction::Append)]
    pub categories: Vec<String>,

    /// Project type (accepted but not sent as a facet).
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub project_type: Option<ProjectType>,

    /// Raw filter entry, e.g. 'versions=1.19,1.20'.
    #[arg(short = 'f', long = "filter", value_name = "KEY=VALUE", action = clap::ArgAction::Append)]
    pub filters: Vec<String>,

    /// Sort order: relevance, downloads, follows, newest or updated.
    #[arg(long, value_name = "INDEX")]
    pub index: Option<SortIndex>,

    /// Number of hits to skip.
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub offset: u32,

    /// Page size, at most 100.
    #[arg(long, value_name = "N")]
    pub limit: Option<u32>,

    /// Number of pages to fetch.
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub pages: u32,
}

impl SearchArgs {
    /// Build the filter from the dedicated flags and `-f` entries.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] for a malformed or unknown `-f` entry.
    pub fn to_filter(&self) -> Result<Filter, QueryError> {
        let mut filter = Filter::new()
            .versions(&self.versions)
            .categories(&self.categories);
        filter.project_type = self.project_type;

        for entry in &self.filters {
            let (key, value) = entry
                .split_once('=')
                .ok_or_else(|| QueryError::InvalidValue {
                    key: "filter".to_string(),
                    value: entry.clone(),
                })?;
            filter.set(key.trim(), value.trim())?;
        }
        Ok(filter)
    }

    /// Build the first page request, taking unset values from `[search]`.
    ///
    /// # Errors
    ///
    /// Same as [`SearchArgs::to_filter`].
    pub fn to_request(&self, config: &SearchConfig) -> Result<SearchRequest, QueryError> {
        Ok(SearchRequest::builder()
            .maybe_query(self.query.clone())
            .filter(self.to_filter()?)
            .index(self.index.unwrap_or(config.index))
            .offset(self.offset)
            .limit(self.limit.unwrap_or(config.limit))
            .build())
    }
}
