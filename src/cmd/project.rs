// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `project` and `versions` commands.

use crate::api::{ModsClient, Project, ProjectVersion};
use crate::cli::project::{ProjectArgs, VersionsArgs};
use crate::error::Result;

/// Run the project command.
///
/// # Errors
///
/// Returns an error if the project cannot be fetched.
pub async fn run_project_command(args: &ProjectArgs, client: &ModsClient) -> Result<()> {
    let project = client.project(&args.project).await?;
    for line in format_project(&project) {
        println!("{line}");
    }
    Ok(())
}

/// Run the versions command.
///
/// # Errors
///
/// Returns an error if the version list cannot be fetched.
pub async fn run_versions_command(args: &VersionsArgs, client: &ModsClient) -> Result<()> {
    let versions = client
        .versions(args.project.as_str(), args.game_version.as_deref())
        .await?;
    if versions.is_empty() {
        println!("No versions found");
    }
    for version in &versions {
        println!("{}", format_version(version));
    }
    Ok(())
}

/// Key facts about a project, one per line.
#[must_use]
pub fn format_project(project: &Project) -> Vec<String> {
    let project_type = project
        .project_type
        .map_or_else(|| "unknown".to_string(), |t| t.to_string());

    vec![
        format!("{} ({})", project.title, project.slug),
        format!("  {}", project.description),
        format!("  id:            {}", project.id),
        format!("  type:          {project_type}"),
        format!("  downloads:     {}", project.downloads),
        format!("  followers:     {}", project.followers),
        format!("  categories:    {}", project.categories.join(", ")),
        format!("  loaders:       {}", project.loaders.join(", ")),
        format!("  game versions: {}", project.game_versions.join(", ")),
        format!("  updated:       {}", project.updated),
    ]
}

/// One line per version: number, channel, loaders, game versions, file.
#[must_use]
pub fn format_version(version: &ProjectVersion) -> String {
    let file = version.files.first().map_or("-", |f| f.filename.as_str());
    format!(
        "{:<24} {:<8} {:<16} {:<24} {file}",
        version.version_number,
        version.version_type.to_string(),
        version.loaders.join(","),
        version.game_versions.join(","),
    )
}
