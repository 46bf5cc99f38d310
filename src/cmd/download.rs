// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `download` command.

use tracing::info;

use crate::api::ModsClient;
use crate::cli::project::DownloadArgs;
use crate::config::Config;
use crate::error::Result;
use crate::net::{ProgressDisplay, TerminalProgress};

/// Run the download command and wait for it to finish.
///
/// # Errors
///
/// Returns an error if no file exists for the game version, the transfer
/// fails, or the file cannot be written.
pub async fn run_download_command(
    args: &DownloadArgs,
    config: &Config,
    client: &ModsClient,
) -> Result<()> {
    let directory = args
        .directory
        .clone()
        .unwrap_or_else(|| config.download.directory.clone());

    let display = if args.no_progress {
        ProgressDisplay::Silent
    } else {
        ProgressDisplay::Bar
    };
    let progress = TerminalProgress::new(display);

    info!(
        project = %args.project,
        game_version = %args.game_version,
        directory = %directory.display(),
        "starting download"
    );

    let handle = client.download(
        args.project.as_str(),
        args.game_version.as_str(),
        directory,
        progress.clone(),
    );

    match handle.join().await {
        Ok(path) => {
            progress.finish("done");
            println!("{}", path.display());
            Ok(())
        }
        Err(e) => {
            progress.abandon("failed");
            Err(e.into())
        }
    }
}
