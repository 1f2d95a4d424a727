// src/scan/run.rs
// =============================================================================
// Fans the page processor out across every listed page and rolls the
// results up into a RunSummary.
//
// One future per page; each future exclusively owns its page, so the tasks
// share nothing but the HTTP client (read-only after login). `buffered`
// rather than `buffer_unordered` keeps pages in discovery order, which the
// report relies on.
// =============================================================================

use chrono::Local;
use futures::stream::{self, StreamExt};
use reqwest::Client;

use crate::config::RunConfig;
use crate::model::{RunSummary, SourcePage};
use crate::scan::page;

/// Processes every page concurrently and returns them, fully populated, in
/// the order they were given. A cap of 0 schedules every page at once.
pub async fn process_pages(
    client: &Client,
    cfg: &RunConfig,
    pages: Vec<SourcePage>,
) -> Vec<SourcePage> {
    let cap = if cfg.concurrency == 0 {
        pages.len().max(1)
    } else {
        cfg.concurrency
    };

    let futures = pages.into_iter().map(|p| {
        let client = client.clone(); // cheap, it is an Arc internally
        async move { page::process_page(&client, cfg, p).await }
    });

    stream::iter(futures).buffered(cap).collect().await
}

/// Computes run totals once every page has finished processing.
pub fn build_summary(pages: Vec<SourcePage>) -> RunSummary {
    let total_links: usize = pages.iter().map(|p| p.links_out.len()).sum();
    let total_bad_links: usize = pages.iter().map(|p| p.bad_links).sum();
    let total_modified_links: usize = pages.iter().map(|p| p.modified_links).sum();

    // defined as 0 when nothing was examined; integer division floors
    let percent_bad_links = if total_links == 0 {
        0
    } else {
        total_bad_links * 100 / total_links
    };

    RunSummary {
        total_links,
        total_bad_links,
        total_modified_links,
        percent_bad_links,
        timestamp: Local::now().format("%a %b %-d, %Y at %H:%M").to_string(),
        pages,
    }
}
