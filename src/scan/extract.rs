// src/scan/extract.rs
// =============================================================================
// Extracts and normalizes candidate URLs from raw node text.
//
// Links arrive from the portal in three shapes:
//   - bracketed plain text:            [http://example.com/page]
//   - HTML anchors:                    <a href="http://example.com/page">
//   - javascript-call escapes:         href="javascript:go('http%3A%2F%2F...')"
//
// One regex covers all three: a candidate starts right after '[', '\'' or '"',
// begins with http/https, and runs to the first whitespace, quote or ']'.
// Candidates are then percent-decoded once (the javascript case), parsed, and
// have only their query string re-encoded (decoding may have broken it).
//
// No network activity happens here - this is pure text transformation.
// =============================================================================

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::model::OutboundLink;

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"["'\[](https?[^"'\s\]]+)"#).unwrap());

/// Finds every candidate link in `raw` and returns one unchecked
/// OutboundLink per match, tagged with the owning node, in discovery order.
pub fn extract_links(node_id: i64, node_title: &str, raw: &str) -> Vec<OutboundLink> {
    LINK_RE
        .captures_iter(raw)
        .map(|cap| OutboundLink::new(node_id, node_title, normalize_url(&cap[1])))
        .collect()
}

/// Decodes and canonicalizes one raw link substring.
///
/// Decode or parse failures are non-fatal: the best text we have so far is
/// kept as the URL and the failure is logged. A link we cannot clean up is
/// still worth probing and reporting.
pub fn normalize_url(raw: &str) -> String {
    let decoded = match urlencoding::decode(raw) {
        Ok(cow) => cow.into_owned(),
        Err(e) => {
            warn!("could not percent-decode '{}': {}", raw, e);
            raw.to_string()
        }
    };

    match Url::parse(&decoded) {
        Ok(mut parsed) => {
            // Decoding above also decoded the query string, which can corrupt
            // its structure; re-encode exactly the query, leave the rest as-is.
            let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
            if parsed.query().is_some() {
                if pairs.is_empty() {
                    parsed.set_query(None);
                } else {
                    parsed.query_pairs_mut().clear().extend_pairs(pairs);
                }
            }
            parsed.to_string()
        }
        Err(e) => {
            warn!("could not parse url '{}': {}", decoded, e);
            decoded
        }
    }
}
