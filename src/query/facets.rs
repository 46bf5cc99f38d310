// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Facet encoding.
//!
//! ```text
//! Filter { categories: [fabric, forge], versions: [1.19, 1.10] }
//!                       |
//!                       v
//! [["categories:fabric"],["categories:forge"],["versions:1.19","versions:1.10"]]
//!   \_______ AND ______/ \________ AND _____/ \___________ OR ____________/
//! ```
//!
//! Groups are AND'd, values inside one group are OR'd.

use serde::Serialize;
use tracing::warn;

use super::Filter;
use crate::error::QueryError;

/// Encoded facet groups, ready to be serialized onto the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Facets(Vec<Vec<String>>);

impl Facets {
    /// Number of facet groups.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Facet groups in wire order.
    #[must_use]
    pub fn groups(&self) -> &[Vec<String>] {
        &self.0
    }

    /// Serialize to the nested JSON-array-of-strings wire format.
    #[must_use]
    pub fn encode(&self) -> String {
        // Vec<Vec<String>> cannot fail to serialize
        serde_json::to_string(&self.0).unwrap_or_else(|_| "[]".to_string())
    }
}

impl std::fmt::Display for Facets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Build facet groups from a filter.
///
/// # Errors
///
/// Returns [`QueryError::UnsupportedFilter`] if `client_side`, `server_side`
/// or `open_source` is set.
pub fn encode_filter(filter: &Filter) -> Result<Facets, QueryError> {
    if let Some(key) = filter.unsupported_key() {
        return Err(QueryError::UnsupportedFilter { key });
    }

    if let Some(project_type) = filter.project_type {
        warn!(
            project_type = %project_type,
            "project type filter is not translated into a facet and has no effect"
        );
    }

    let mut groups: Vec<Vec<String>> = filter
        .categories
        .iter()
        .map(|category| vec![format!("categories:{category}")])
        .collect();

    if !filter.versions.is_empty() {
        groups.push(
            filter
                .versions
                .iter()
                .map(|version| format!("versions:{version}"))
                .collect(),
        );
    }

    Ok(Facets(groups))
}
