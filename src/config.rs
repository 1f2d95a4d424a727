// src/config.rs
// =============================================================================
// Run configuration, built once from the CLI and passed by reference to
// every component. Nothing reads configuration from anywhere else.
// =============================================================================

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use url::Url;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Portal root; always ends with '/' so relative joins stay inside it
    pub base_url: Url,
    pub user: String,
    pub password: String,
    pub page_attempts: u32,
    pub link_attempts: u32,
    pub retry_delay: Duration,
    pub request_timeout: Duration,
    /// Max pages in flight at once; 0 means one task per page
    pub concurrency: usize,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        // A base URL without a trailing slash would make Url::join replace
        // the last path segment instead of appending to it.
        let mut base = cli.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .with_context(|| format!("invalid base URL '{}'", cli.base_url))?;

        if cli.page_attempts == 0 || cli.link_attempts == 0 {
            return Err(anyhow!("attempt counts must be at least 1"));
        }

        Ok(Self {
            base_url,
            user: cli.user.clone(),
            password: cli.password.clone(),
            page_attempts: cli.page_attempts,
            link_attempts: cli.link_attempts,
            retry_delay: Duration::from_millis(cli.retry_delay_ms),
            request_timeout: Duration::from_secs(cli.timeout_secs),
            concurrency: cli.concurrency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(args)
    }

    #[test]
    fn test_default_knob_values() {
        let cli = parse(&[
            "pathcheck",
            "http://portal.example.com/app/250/",
            "--user",
            "u",
            "--password",
            "p",
        ]);
        let cfg = RunConfig::from_cli(&cli).unwrap();
        assert_eq!(cfg.page_attempts, 10);
        assert_eq!(cfg.link_attempts, 5);
        assert_eq!(cfg.retry_delay, Duration::from_millis(50));
        assert_eq!(cfg.request_timeout, Duration::from_secs(10));
        assert_eq!(cfg.concurrency, 0);
    }

    #[test]
    fn test_base_url_gains_trailing_slash() {
        let cli = parse(&[
            "pathcheck",
            "http://portal.example.com/app/250",
            "--user",
            "u",
            "--password",
            "p",
        ]);
        let cfg = RunConfig::from_cli(&cli).unwrap();
        assert_eq!(cfg.base_url.as_str(), "http://portal.example.com/app/250/");
        // joins now append instead of replacing the last segment
        let joined = cfg.base_url.join("index.html").unwrap();
        assert_eq!(joined.as_str(), "http://portal.example.com/app/250/index.html");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let cli = parse(&["pathcheck", "not a url", "--user", "u", "--password", "p"]);
        assert!(RunConfig::from_cli(&cli).is_err());
    }
}
