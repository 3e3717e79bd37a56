//! Centralized constants for the default endpoint and UA.

/// The quote endpoint. A GET on the root returns `{"quote": "..."}`.
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.kanye.rest";

pub(crate) const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Line printed to stdout after every successful fetch.
pub(crate) const NEW_QUOTE_NOTICE: &str = "New Kanye Quote coming up!";
