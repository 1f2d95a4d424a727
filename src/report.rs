// src/report.rs
// =============================================================================
// Renders the run summary as a static HTML document and writes it to a
// timestamped file in the working directory.
//
// Layout: run totals up top (bad-link count highlighted red when non-zero),
// then one section per page that has at least one bad link, listing each
// offending link with the node it was found in and its final status text.
// Every interpolated value is HTML-escaped.
// =============================================================================

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::model::RunSummary;

const FILE_PREFIX: &str = "LinkCheck";

/// Renders the report and writes it to `LinkCheck<YYYY-MM-DD-HHMM>.html`.
/// Returns the path written. A write failure is fatal to the run.
pub fn write_report(summary: &RunSummary) -> Result<PathBuf> {
    let filename = format!("{}{}.html", FILE_PREFIX, Local::now().format("%Y-%m-%d-%H%M"));
    let path = PathBuf::from(filename);
    std::fs::write(&path, render(summary))
        .with_context(|| format!("writing report to {}", path.display()))?;
    Ok(path)
}

/// Builds the full HTML document. Infallible; writing to a String cannot
/// fail, so the fmt results are ignored.
pub fn render(summary: &RunSummary) -> String {
    let mut out = String::new();

    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"utf-8\">\n    \
         <title>Pathway Link Check</title>\n</head>\n<body>\n"
    );

    let bad_count = if summary.total_bad_links > 0 {
        format!(
            "<font color=\"red\">{}</font>",
            summary.total_bad_links
        )
    } else {
        summary.total_bad_links.to_string()
    };
    let _ = write!(
        out,
        "<div>\n<h1>Pathway Bad Links Log - {}</h1>\n<p>\n\
         Total links found and checked: {}<br>\n\
         Total bad links: {}<br>\n\
         Percent bad links: {} %\n</p>\n</div>\n",
        encode_text(&summary.timestamp),
        summary.total_links,
        bad_count,
        summary.percent_bad_links,
    );

    out.push_str("<div>\n");
    for page in summary.pages.iter().filter(|p| p.bad_links > 0) {
        let _ = write!(
            out,
            "<div>\n<h2><a href=\"{}\">{}</a></h2>\n\
             <span>Total Links: {} Bad Links: {} Modified Links: {}</span><br>\n<br>\n",
            encode_double_quoted_attribute(&page.url),
            encode_text(&page.name),
            page.links_out.len(),
            page.bad_links,
            page.modified_links,
        );
        for link in page.links_out.iter().filter(|l| l.is_bad()) {
            let _ = write!(
                out,
                "<div style=\"padding-left:20px\">\n\
                 <span><strong>Node {} - {}</strong></span><br>\n\
                 <span><a href=\"{}\">Offending Link</a></span><br>\n\
                 <span>Status: {}</span><br>\n<br>\n</div>\n",
                link.node_id,
                encode_text(&link.node_title),
                encode_double_quoted_attribute(&link.url),
                encode_text(&link.status),
            );
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n</body>\n</html>\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OutboundLink, SourcePage};
    use crate::scan::build_summary;

    fn bad_link(node_id: i64, title: &str, url: &str, status: &str) -> OutboundLink {
        let mut l = OutboundLink::new(node_id, title, url.to_string());
        l.status_code = 404;
        l.status = status.to_string();
        l
    }

    fn summary_with_one_bad_page() -> RunSummary {
        let mut clean = SourcePage::new("Clean".to_string(), "http://x.example/clean".to_string());
        let mut ok = OutboundLink::new(1, "N", "http://ok.example/".to_string());
        ok.status_code = 200;
        clean.links_out = vec![ok];
        clean.finalize_counts();

        let mut broken =
            SourcePage::new("Broken <Page>".to_string(), "http://x.example/broken".to_string());
        broken.links_out = vec![bad_link(
            17,
            "Node & Title",
            "http://dead.example/page?a=1",
            "404 Not Found",
        )];
        broken.finalize_counts();

        build_summary(vec![clean, broken])
    }

    #[test]
    fn test_report_lists_bad_link_details() {
        let html = render(&summary_with_one_bad_page());
        assert!(html.contains("Node 17 - Node &amp; Title"));
        assert!(html.contains("href=\"http://dead.example/page?a=1\""));
        assert!(html.contains("Status: 404 Not Found"));
    }

    #[test]
    fn test_report_omits_clean_pages() {
        let html = render(&summary_with_one_bad_page());
        assert!(!html.contains("Clean"));
    }

    #[test]
    fn test_report_escapes_page_names() {
        let html = render(&summary_with_one_bad_page());
        assert!(html.contains("Broken &lt;Page&gt;"));
        assert!(!html.contains("Broken <Page>"));
    }

    #[test]
    fn test_report_highlights_nonzero_bad_total() {
        let html = render(&summary_with_one_bad_page());
        assert!(html.contains("<font color=\"red\">1</font>"));
    }

    #[test]
    fn test_empty_run_renders_zero_totals() {
        let summary = build_summary(vec![]);
        let html = render(&summary);
        assert!(html.contains("Total links found and checked: 0"));
        assert!(html.contains("Percent bad links: 0 %"));
        assert!(!html.contains("color=\"red\""));
    }
}
