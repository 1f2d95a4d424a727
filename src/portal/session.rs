// src/portal/session.rs
// =============================================================================
// Establishes the authenticated portal session.
//
// The portal uses plain cookie-based form login: GET the base page to pick
// up the session cookie, then POST the credentials form. The returned client
// carries the cookie jar and is shared (read-only) by every page task.
//
// Any failure here is fatal to the run - without a session every page fetch
// would just fail ten times each.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use reqwest::Client;

use crate::config::RunConfig;

pub async fn login(cfg: &RunConfig) -> Result<Client> {
    let client = Client::builder()
        .cookie_store(true)
        .timeout(cfg.request_timeout)
        .build()
        .context("building HTTP client")?;

    // primes the cookie jar
    client
        .get(cfg.base_url.clone())
        .send()
        .await
        .with_context(|| format!("fetching login page {}", cfg.base_url))?;

    let login_url = cfg
        .base_url
        .join("index.html")
        .context("building login URL")?;
    let form = [
        ("userId", cfg.user.as_str()),
        ("password", cfg.password.as_str()),
    ];
    let res = client
        .post(login_url.clone())
        .form(&form)
        .send()
        .await
        .with_context(|| format!("submitting login form to {}", login_url))?;

    if !res.status().is_success() {
        return Err(anyhow!("login rejected: HTTP {}", res.status()));
    }

    Ok(client)
}
