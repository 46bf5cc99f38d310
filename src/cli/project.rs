// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the per-project commands.
//!
//! ```text
//! modseek project  <ID|SLUG>
//! modseek versions <ID|SLUG> [-g VERSION]
//! modseek download <ID|SLUG> <GAME_VERSION> [-d DIR] [--no-progress]
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `project` command.
#[derive(Debug, Clone, Args)]
pub struct ProjectArgs {
    /// Project id or slug.
    #[arg(value_name = "PROJECT")]
    pub project: String,
}

/// Arguments for the `versions` command.
#[derive(Debug, Clone, Args)]
pub struct VersionsArgs {
    /// Project id or slug.
    #[arg(value_name = "PROJECT")]
    pub project: String,

    /// Only list versions for this game version.
    #[arg(short = 'g', long = "game-version", value_name = "VERSION")]
    pub game_version: Option<String>,
}

/// Arguments for the `download` command.
#[derive(Debug, Clone, Args)]
pub struct DownloadArgs {
    /// Project id or slug.
    #[arg(value_name = "PROJECT")]
    pub project: String,

    /// Game version the file must support.
    #[arg(value_name = "GAME_VERSION")]
    pub game_version: String,

    /// Output directory, overrides download.directory.
    #[arg(short = 'd', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Hides the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}
