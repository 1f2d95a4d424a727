// src/portal/listing.rs
// =============================================================================
// Fetches the portal's pathway listing page and turns its anchors into
// SourcePage skeletons (name + URL, nothing else populated yet).
//
// An empty listing is valid - the run then produces an empty report.
// Failing to fetch or read the listing at all is fatal.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use log::warn;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::config::RunConfig;
use crate::model::SourcePage;

const LISTING_PAGE: &str = "widget_localisedpathways.html";

pub async fn fetch_pathways(client: &Client, cfg: &RunConfig) -> Result<Vec<SourcePage>> {
    let url = cfg
        .base_url
        .join(LISTING_PAGE)
        .context("building listing URL")?;
    let res = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("fetching pathway listing {}", url))?;
    if !res.status().is_success() {
        return Err(anyhow!("pathway listing returned HTTP {}", res.status()));
    }
    let html = res.text().await.context("reading pathway listing body")?;

    Ok(parse_pathway_list(&html, &cfg.base_url))
}

/// Every anchor on the listing page is one pathway: its text is the page
/// name, its href (joined against the base URL) the page URL.
pub fn parse_pathway_list(html: &str, base: &Url) -> Vec<SourcePage> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").unwrap();

    let mut pages = Vec::new();
    for a in document.select(&selector) {
        let href = a.value().attr("href").unwrap_or("");
        let url = match base.join(href) {
            Ok(url) => url,
            Err(e) => {
                warn!("skipping pathway anchor with bad href '{}': {}", href, e);
                continue;
            }
        };
        let name = a.text().collect::<String>().trim().to_string();
        pages.push(SourcePage::new(name, url.to_string()));
    }
    pages
}
