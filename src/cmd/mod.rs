// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> ModsClient
//!   config, download, project, search
//! ```
//!
//! Handlers print results to stdout; logs go to stderr.

pub mod config;
pub mod download;
pub mod project;
pub mod search;
