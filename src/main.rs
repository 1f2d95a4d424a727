// src/main.rs
// =============================================================================
// Entry point: log in to the portal, list its pathway pages, scan them all
// concurrently, print a console summary, and write the HTML report.
//
// Exit codes: 0 = report written, 1 = fatal error (no session, listing
// failure, report write failure). Broken links are findings, not failures -
// they only show up in the report.
// =============================================================================

mod cli;
mod config;
mod model;
mod portal;
mod report;
mod scan;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use config::RunConfig;
use model::SourcePage;

#[tokio::main]
async fn main() {
    env_logger::init();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = RunConfig::from_cli(&cli)?;

    println!("establishing portal session");
    let client = portal::login(&cfg).await?;

    println!("fetching pathway list");
    let pages = portal::fetch_pathways(&client, &cfg).await?;
    println!("number of pathways found: {}", pages.len());

    println!("scanning pathways and checking links");
    let pages = scan::process_pages(&client, &cfg, pages).await;
    print_page_lines(&pages);

    let summary = scan::build_summary(pages);
    println!(
        "links: {}\tbad: {}\tmodified: {}",
        summary.total_links, summary.total_bad_links, summary.total_modified_links
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    let path = report::write_report(&summary)?;
    println!("report written to {}", path.display());
    Ok(())
}

// One console line per page, mirroring what lands in the report
fn print_page_lines(pages: &[SourcePage]) {
    for (i, page) in pages.iter().enumerate() {
        println!(
            "{}\tstatus {}\tlinks {}\tbad {}\tmod {} - {}",
            i,
            page.status_code,
            page.links_out.len(),
            page.bad_links,
            page.modified_links,
            truncate(&page.name, 30),
        );
    }
}

/// Cuts `s` at a character boundary for display.
fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
