// src/model.rs
// =============================================================================
// Core data model for a link-check run.
//
// Ownership is partitioned by page: each SourcePage (and every OutboundLink
// inside it) is written by exactly one processing task, so no locking is
// needed anywhere in the scan.
//
// #[derive(Serialize)] lets us dump the whole run as JSON with --json.
// =============================================================================

use serde::Serialize;

/// One outbound hyperlink found inside a node on a pathway page.
///
/// `node_id` / `node_title` say where on the source page the link was found
/// and are fixed at extraction time. The checker fills in the status fields
/// and may rewrite `url` (recording why in `modified`).
#[derive(Debug, Clone, Serialize)]
pub struct OutboundLink {
    /// Identifier of the node the link was found in (0 if unparseable)
    pub node_id: i64,
    /// Title of the node the link was found in
    pub node_title: String,
    /// The link itself, post-normalization
    pub url: String,
    /// Human-readable outcome of the last check attempt
    pub status: String,
    /// HTTP status of the last check attempt; 0 means the request itself failed
    pub status_code: u16,
    /// Non-empty if the checker rewrote the URL (e.g. https -> http)
    pub modified: String,
}

impl OutboundLink {
    /// A freshly extracted link that has not been checked yet.
    pub fn new(node_id: i64, node_title: &str, url: String) -> Self {
        Self {
            node_id,
            node_title: node_title.to_string(),
            url,
            status: String::new(),
            status_code: 0,
            modified: String::new(),
        }
    }

    pub fn is_bad(&self) -> bool {
        self.status_code != 200
    }

    pub fn is_modified(&self) -> bool {
        !self.modified.is_empty()
    }
}

/// One pathway page listed by the portal.
///
/// Created with just a name and URL by the page lister; the page processor
/// fills in the fetch status, the links, and the derived counts.
#[derive(Debug, Clone, Serialize)]
pub struct SourcePage {
    pub name: String,
    pub url: String,
    /// Status of fetching the page itself; 0 if every attempt failed outright
    pub status_code: u16,
    /// Outbound links in discovery order
    pub links_out: Vec<OutboundLink>,
    pub bad_links: usize,
    pub modified_links: usize,
}

impl SourcePage {
    pub fn new(name: String, url: String) -> Self {
        Self {
            name,
            url,
            status_code: 0,
            links_out: Vec::new(),
            bad_links: 0,
            modified_links: 0,
        }
    }

    /// Recomputes the derived counts from the per-link results.
    /// Called once, after every link on the page has been checked.
    pub fn finalize_counts(&mut self) {
        self.bad_links = self.links_out.iter().filter(|l| l.is_bad()).count();
        self.modified_links = self.links_out.iter().filter(|l| l.is_modified()).count();
    }
}

/// Totals for a whole run, in page discovery order. Read-only input to the
/// report renderer.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub total_links: usize,
    pub total_bad_links: usize,
    pub total_modified_links: usize,
    /// floor(100 * bad / total); defined as 0 when no links were examined
    pub percent_bad_links: usize,
    pub timestamp: String,
    pub pages: Vec<SourcePage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_counts() {
        let mut page = SourcePage::new("P".to_string(), "http://example.com/p".to_string());
        let mut ok = OutboundLink::new(1, "N", "http://example.com/ok".to_string());
        ok.status_code = 200;
        let mut bad = OutboundLink::new(1, "N", "http://example.com/bad".to_string());
        bad.status_code = 404;
        let mut rewritten = OutboundLink::new(2, "M", "http://example.com/tls".to_string());
        rewritten.status_code = 0;
        rewritten.modified = "https -> http, certificate error".to_string();
        page.links_out = vec![ok, bad, rewritten];

        page.finalize_counts();

        assert_eq!(page.bad_links, 2);
        assert_eq!(page.modified_links, 1);
    }

    #[test]
    fn test_new_link_is_unchecked() {
        let link = OutboundLink::new(7, "Node", "http://example.com".to_string());
        assert_eq!(link.status_code, 0);
        assert!(link.status.is_empty());
        assert!(!link.is_modified());
    }
}
