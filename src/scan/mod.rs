// src/scan/mod.rs
// =============================================================================
// The link extraction and validation engine.
//
// Submodules:
// - extract: recovers clean URLs from raw node text (no network)
// - checker: probes one URL with bounded retries and scheme-downgrade recovery
// - page:    fetches one pathway page and drives extract + checker for it
// - run:     fans page processing out concurrently and rolls up totals
// =============================================================================

pub mod checker;
pub mod extract;
pub mod page;
pub mod run;

pub use run::{build_summary, process_pages};
