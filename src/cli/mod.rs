// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for modseek using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! modseek [global options] <command>
//! search [QUERY] [-g VERSION]... [-c CATEGORY]... [-t TYPE] [-f KEY=VALUE]...
//! project <ID|SLUG>
//! versions <ID|SLUG> [-g VERSION]
//! download <ID|SLUG> <GAME_VERSION> [-d DIR]
//! options
//! version
//! ```

pub mod global;
pub mod project;
pub mod search;


use crate::cli::global::GlobalOptions;
use crate::cli::project::{DownloadArgs, ProjectArgs, VersionsArgs};
use crate::cli::search::SearchArgs;
use clap::{Parser, Subcommand};

/// Search, inspect and download mods from Modrinth.
#[derive(Debug, Parser)]
#[command(
    name = "modseek",
    author,
    version,
    about = "Search, inspect and download mods from Modrinth",
    long_about = "modseek Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Searches the Modrinth API and downloads project files.\n\n\
                  `modseek search sodium -g 1.20.1 -c fabric` lists matching\n\
                  projects, `modseek download sodium 1.20.1` fetches the first\n\
                  file published for that game version. See\n\
                  `modseek <command> --help` for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  modseek reads `modseek.toml` from the current directory if it\n\
                  exists. Additional files can be given with --config, later files\n\
                  override earlier ones. MODSEEK_SECTION__KEY environment variables\n\
                  (e.g. MODSEEK_SEARCH__LIMIT=50) override files, and command line\n\
                  flags override everything."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Lists the config files that were loaded.
    Configs,

    /// Searches projects.
    Search(SearchArgs),

    /// Shows a project.
    Project(ProjectArgs),

    /// Lists the versions of a project.
    Versions(VersionsArgs),

    /// Downloads a project file for a game version.
    Download(DownloadArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
