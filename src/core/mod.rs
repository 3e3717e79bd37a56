//! Core components of the `kanye-rest` client.
//!
//! - The [`KanyeClient`], its blocking twin, and their builder.
//! - The [`KanyeError`] type.
//! - The [`Quote`] model.
//! - Internal networking helpers.

/// The client (`KanyeClient`), builder, and configuration.
pub mod client;
/// The error type (`KanyeError`) for the crate.
pub mod error;
/// The `Quote` model returned by every fetch.
pub mod models;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

pub use client::{BlockingKanyeClient, KanyeClient, KanyeClientBuilder};
pub use error::KanyeError;
pub use models::Quote;
