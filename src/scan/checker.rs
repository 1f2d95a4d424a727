// src/scan/checker.rs
// =============================================================================
// Probes one outbound link and records the outcome on it.
//
// Probe sequence: up to `link_attempts` tries, the first a HEAD (cheap, no
// body), the rest full GETs - some endpoints reject HEAD probes but serve a
// normal fetch. The first HTTP 200 ends the check. A transport-level failure
// (connect/TLS/DNS, not an HTTP error status) records status code 0 and the
// error chain as the status text; if that failure is a certificate problem,
// the URL is rewritten https -> http and later attempts use the rewrite.
//
// Every response body is drained before the next attempt so the connection
// goes back to reqwest's pool. An undrained body keeps its connection (and
// descriptor) alive; under load that has cascaded into DNS lookup failures.
// =============================================================================

use std::error::Error as _;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::config::RunConfig;
use crate::model::OutboundLink;

/// Checks `link` in place: status code, status text, and (on a certificate
/// failure) a rewritten URL plus modification note.
pub async fn check_link(client: &Client, cfg: &RunConfig, link: &mut OutboundLink) {
    check_link_with(client, cfg.link_attempts, cfg.retry_delay, link).await;
}

async fn check_link_with(
    client: &Client,
    max_attempts: u32,
    retry_delay: Duration,
    link: &mut OutboundLink,
) {
    for attempt in 0..max_attempts {
        let result = if attempt == 0 {
            client.head(&link.url).send().await
        } else {
            client.get(&link.url).send().await
        };

        match result {
            Ok(res) => {
                let status = res.status();
                link.status_code = status.as_u16();
                link.status = status_line(status);
                // drain the body so the connection returns to the pool
                res.bytes().await.ok();
            }
            Err(e) => record_failure(link, &error_chain(&e)),
        }

        if link.status_code == 200 {
            break;
        }
        if attempt + 1 < max_attempts {
            sleep(retry_delay).await;
        }
    }
}

/// Records a transport-level failure and, for certificate problems on an
/// https URL, applies the scheme downgrade so later attempts try plain http.
fn record_failure(link: &mut OutboundLink, detail: &str) {
    link.status_code = 0;
    link.status = format!("request failed: {}", detail);
    if is_certificate_error(detail) {
        if let Some(plain) = downgrade_to_http(&link.url) {
            link.modified = format!("https -> http, {}", detail);
            link.url = plain;
        }
    }
}

/// "404 Not Found"-style line for the report.
fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

/// Full error chain as one string; reqwest's Display alone usually hides the
/// interesting cause (the rustls certificate error, the DNS failure, ...).
fn error_chain(err: &reqwest::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

fn is_certificate_error(detail: &str) -> bool {
    let lower = detail.to_ascii_lowercase();
    lower.contains("certificate") || lower.contains("ssl") || lower.contains("tls")
}

fn downgrade_to_http(url: &str) -> Option<String> {
    url.strip_prefix("https://")
        .map(|rest| format!("http://{}", rest))
}
