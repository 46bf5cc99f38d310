// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Search | Project | Versions | Download | Options | Configs | Version
//! ```

use std::process::ExitCode;

use modseek::api::ModsClient;
use modseek::cli::global::GlobalOptions;
use modseek::cli::{self, Command};
use modseek::cmd::config::{run_configs_command, run_options_command};
use modseek::cmd::download::run_download_command;
use modseek::cmd::project::{run_project_command, run_versions_command};
use modseek::cmd::search::run_search_command;
use modseek::config::Config;
use modseek::config::loader::ConfigLoader;
use modseek::error::Result;
use modseek::logging::{LogConfig, LogGuard, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(command) => match load_config(&cli.global) {
            Ok(config) => match start_logging(&config) {
                Ok(_log_guard) => dispatch_command(command, &cli.global, &config).await,
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn start_logging(config: &Config) -> Result<LogGuard> {
    let log_config = LogConfig::builder()
        .with_console_level(config.global.log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .build();
    init_logging(&log_config)
}

async fn dispatch_command(command: &Command, global: &GlobalOptions, config: &Config) -> Result<()> {
    match command {
        Command::Version => {
            handle_version_command();
            Ok(())
        }
        Command::Options => {
            run_options_command(config);
            Ok(())
        }
        Command::Configs => {
            let loader = build_config_loader(global)?;
            run_configs_command(&loader.format_loaded_files());
            Ok(())
        }
        Command::Search(args) => {
            let client = ModsClient::from_config(&config.api)?;
            run_search_command(args, config, &client).await
        }
        Command::Project(args) => {
            let client = ModsClient::from_config(&config.api)?;
            run_project_command(args, &client).await
        }
        Command::Versions(args) => {
            let client = ModsClient::from_config(&config.api)?;
            run_versions_command(args, &client).await
        }
        Command::Download(args) => {
            let client = ModsClient::from_config(&config.api)?;
            run_download_command(args, config, &client).await
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional("modseek.toml");
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix("MODSEEK");
    for (key, value) in global.to_config_overrides()? {
        loader = loader.set(&key, value)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> Result<Config> {
    build_config_loader(global)?.build()
}
