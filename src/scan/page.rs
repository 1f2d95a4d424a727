// src/scan/page.rs
// =============================================================================
// Processes one pathway page: fetch (with retries), locate its content
// nodes, extract and normalize their links, then check each link in turn.
//
// The portal drops page requests under load, so the fetch retries up to
// `page_attempts` times. Whatever the final attempt returned is what gets
// recorded and parsed - a non-200 page usually still carries the node markup.
//
// Node containers are forms named form_node_content_*; the ones whose name
// ends in a reserved suffix (local/public/national) are administrative
// sections that never carry outbound links and are skipped.
// =============================================================================

use log::warn;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tokio::time::sleep;

use crate::config::RunConfig;
use crate::model::{OutboundLink, SourcePage};
use crate::scan::{checker, extract};

const RESERVED_SUFFIXES: [&str; 3] = ["local", "public", "national"];

/// Fetches, extracts and checks one page, returning it fully populated.
/// Runs alone: nothing else touches this page while it is being processed.
pub async fn process_page(client: &Client, cfg: &RunConfig, mut page: SourcePage) -> SourcePage {
    let body = fetch_page(client, cfg, &mut page).await;
    page.links_out = extract_page_links(&body);

    // links are checked strictly in sequence within a page; concurrency
    // lives at the page level, not here
    for link in &mut page.links_out {
        checker::check_link(client, cfg, link).await;
    }
    page.finalize_counts();
    page
}

/// Fetches the page with bounded retries, recording the final status code.
/// Returns the body of the last response (empty if every attempt failed at
/// the transport level). Bodies are consumed on every attempt, including
/// retried ones, so connections are never left holding a descriptor.
async fn fetch_page(client: &Client, cfg: &RunConfig, page: &mut SourcePage) -> String {
    let mut body = String::new();
    for attempt in 1..=cfg.page_attempts {
        match client.get(&page.url).send().await {
            Ok(res) => {
                page.status_code = res.status().as_u16();
                body = res.text().await.unwrap_or_default();
                if page.status_code == 200 {
                    break;
                }
            }
            Err(e) => {
                warn!("error requesting {}: {}", page.url, e);
                page.status_code = 0;
                body.clear();
            }
        }
        if attempt < cfg.page_attempts {
            sleep(cfg.retry_delay).await;
        }
    }
    body
}

/// Parses the page body and runs the normalizer over every qualifying
/// node's link-bearing fields. Pure; no network.
fn extract_page_links(body: &str) -> Vec<OutboundLink> {
    let document = Html::parse_document(body);

    // These selectors are constants and known to be valid, so unwrap is fine
    let node_sel = Selector::parse("#pwNodeContainer form[name^='form_node_content_']").unwrap();
    let id_sel = Selector::parse("input[name='id']").unwrap();
    let title_sel = Selector::parse("input[name='quickInfoTitle']").unwrap();
    let body_sel = Selector::parse("textarea[name='quickInfoBody']").unwrap();
    let admin_sel = Selector::parse("input[name='adminInfoTxt']").unwrap();

    let mut links = Vec::new();

    for form in document.select(&node_sel) {
        let name = form.value().attr("name").unwrap_or("");
        if RESERVED_SUFFIXES.iter().any(|s| name.ends_with(s)) {
            continue;
        }

        let node_id: i64 = attr_value(form, &id_sel).parse().unwrap_or(0);
        let node_title = attr_value(form, &title_sel);

        // the two free-text fields that may embed links, concatenated so one
        // extraction pass covers both
        let quick_info = form
            .select(&body_sel)
            .next()
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default();
        let admin_info = attr_value(form, &admin_sel);

        let raw = format!("{}{}", quick_info, admin_info);
        links.extend(extract::extract_links(node_id, &node_title, &raw));
    }

    links
}

/// First matching descendant's `value` attribute, or "".
fn attr_value(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope
        .select(selector)
        .next()
        .and_then(|el| el.value().attr("value"))
        .unwrap_or("")
        .to_string()
}
