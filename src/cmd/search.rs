// modseek: Modrinth search and download client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `search` command.
//!
//! ```text
//! SearchArgs + [search] --> SearchRequest --search()--> page 1
//!                                                         |
//!                            next_page(&page.next) <------+ (--pages N)
//! ```

use tracing::debug;

use crate::api::{ModsClient, ProjectHit, SearchPage};
use crate::cli::search::SearchArgs;
use crate::config::Config;
use crate::error::Result;

/// Run the search command.
///
/// # Errors
///
/// Returns an error if the arguments do not form a valid request or a page
/// cannot be fetched.
pub async fn run_search_command(
    args: &SearchArgs,
    config: &Config,
    client: &ModsClient,
) -> Result<()> {
    let request = args.to_request(&config.search)?;

    let mut page = client.search(&request).await?;
    print_page(&page);

    for _ in 1..args.pages {
        if page.is_last() {
            debug!(offset = page.next.offset(), "no more pages");
            break;
        }
        page = client.next_page(&page.next).await?;
        print_page(&page);
    }

    Ok(())
}

fn print_page(page: &SearchPage) {
    println!("{}", format_page_header(page));
    for hit in &page.result.hits {
        println!("{}", format_hit(hit));
    }
}

/// Range line above a page, e.g. `11-20 of 42`.
#[must_use]
pub fn format_page_header(page: &SearchPage) -> String {
    let result = &page.result;
    if result.hits.is_empty() {
        return format!("no hits at offset {} ({} total)", result.offset, result.total_hits);
    }
    let first = u64::from(result.offset) + 1;
    let last = u64::from(result.offset) + result.hits.len() as u64;
    format!("{first}-{last} of {}", result.total_hits)
}

/// One line per hit: slug, downloads, title.
#[must_use]
pub fn format_hit(hit: &ProjectHit) -> String {
    let slug = hit.slug.as_deref().unwrap_or(&hit.project_id);
    format!("{slug:<28} {:>10}  {}", hit.downloads, hit.title)
}
