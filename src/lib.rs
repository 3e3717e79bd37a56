//! kanye-rest: a small client for the [kanye.rest](https://api.kanye.rest) quote API.
//!
//! One GET, one JSON parse, one [`Quote`] back. The simplest entry point is the
//! blocking [`fetch_quote`]:
//!
//! ```no_run
//! let quote = kanye_rest::fetch_quote()?;
//! println!("{}", quote.text().unwrap_or_default());
//! # Ok::<(), kanye_rest::KanyeError>(())
//! ```
//!
//! Async callers build a [`KanyeClient`] and call [`KanyeClient::fetch_quote`].

pub mod core;
pub mod quote;

pub use crate::core::{BlockingKanyeClient, KanyeClient, KanyeClientBuilder, KanyeError, Quote};

/// Fetch a random quote from `https://api.kanye.rest`, blocking the current thread.
///
/// Prints `New Kanye Quote coming up!` to standard output once the body has been
/// parsed. The response shape is not validated and a non-2xx status is not an error.
///
/// # Errors
///
/// Returns [`KanyeError::Http`] if the request cannot be completed and
/// [`KanyeError::Json`] if the body is not valid JSON.
///
/// # Panics
///
/// Panics if called from within an async runtime; use [`KanyeClient::fetch_quote`] there.
pub fn fetch_quote() -> Result<Quote, KanyeError> {
    BlockingKanyeClient::new()?.fetch_quote()
}

/// Install a `tracing-subscriber` fmt subscriber filtered by `RUST_LOG`.
///
/// Does nothing if a global subscriber is already set.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
