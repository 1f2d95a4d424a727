// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// The retry/delay/timeout/concurrency knobs are flags so operators can tune
// them without a rebuild; the defaults are the values production runs use.
// =============================================================================

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "pathcheck",
    version,
    about = "Audits a portal's pathway pages for broken outbound links",
    long_about = "pathcheck logs into a web portal, lists its pathway pages, extracts every \
                  outbound link embedded in their content nodes, probes each link over HTTP, \
                  and writes a timestamped HTML report of broken and rewritten links."
)]
pub struct Cli {
    /// Base URL of the portal, e.g. https://portal.example.com/app/250/
    pub base_url: String,

    /// Portal login user id
    #[arg(long)]
    pub user: String,

    /// Portal login password
    #[arg(long)]
    pub password: String,

    /// Attempts to fetch each pathway page before giving up
    #[arg(long, default_value_t = 10)]
    pub page_attempts: u32,

    /// Probe attempts per outbound link (first is HEAD, the rest GET)
    #[arg(long, default_value_t = 5)]
    pub link_attempts: u32,

    /// Delay between retry attempts, in milliseconds
    #[arg(long, default_value_t = 50)]
    pub retry_delay_ms: u64,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Maximum pathway pages processed at once (0 = one task per page)
    #[arg(long, default_value_t = 0)]
    pub concurrency: usize,

    /// Also print the run summary as JSON on stdout
    #[arg(long)]
    pub json: bool,
}
