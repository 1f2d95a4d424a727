// src/portal/mod.rs
// =============================================================================
// Thin integrations with the source portal: the login handshake and the
// pathway-listing fetch. Everything in here is single-call and fatal on
// failure; the interesting logic lives in scan/.
// =============================================================================

pub mod listing;
pub mod session;

pub use listing::fetch_pathways;
pub use session::login;
