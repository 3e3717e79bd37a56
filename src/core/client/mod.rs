//! Public client surface + builder.
//! Defaults (endpoint, UA, notice text) live in `constants`.

pub(crate) mod constants;

use crate::core::KanyeError;
use constants::{DEFAULT_BASE_URL, USER_AGENT};
use std::time::Duration;
use url::Url;

/// Async client for the quote service.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct KanyeClient {
    http: reqwest::Client,
    base_url: Url,
}

impl KanyeClient {
    /// Create a new builder.
    pub fn builder() -> KanyeClientBuilder {
        KanyeClientBuilder::default()
    }

    /// Create a client for the default endpoint with no timeouts.
    pub fn new() -> Result<Self, KanyeError> {
        Self::builder().build()
    }

    /// The endpoint every fetch is sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Fetch a random quote. See [`crate::quote::fetch`].
    pub async fn fetch_quote(&self) -> Result<crate::Quote, KanyeError> {
        crate::quote::fetch(self).await
    }
}

/// Blocking client for the quote service.
///
/// Must not be created, used, or dropped from within an async runtime.
#[derive(Debug, Clone)]
pub struct BlockingKanyeClient {
    http: reqwest::blocking::Client,
    base_url: Url,
}

impl BlockingKanyeClient {
    pub fn new() -> Result<Self, KanyeError> {
        KanyeClientBuilder::default().build_blocking()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::blocking::Client {
        &self.http
    }

    /// Fetch a random quote, blocking the current thread. See [`crate::quote::fetch_blocking`].
    pub fn fetch_quote(&self) -> Result<crate::Quote, KanyeError> {
        crate::quote::fetch_blocking(self)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Debug, Default)]
pub struct KanyeClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl KanyeClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the endpoint (default `https://api.kanye.rest`). Mostly useful for tests.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    fn resolve_base_url(&mut self) -> Result<Url, KanyeError> {
        match self.base_url.take() {
            Some(u) => Ok(u),
            None => Ok(Url::parse(DEFAULT_BASE_URL)?),
        }
    }

    pub fn build(mut self) -> Result<KanyeClient, KanyeError> {
        let base_url = self.resolve_base_url()?;

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(KanyeClient {
            http: httpb.build()?,
            base_url,
        })
    }

    /// Build a [`BlockingKanyeClient`] with the same settings.
    pub fn build_blocking(mut self) -> Result<BlockingKanyeClient, KanyeError> {
        let base_url = self.resolve_base_url()?;

        // reqwest's blocking builder applies a 30s default; the contract has none.
        let mut httpb = reqwest::blocking::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout);
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(BlockingKanyeClient {
            http: httpb.build()?,
            base_url,
        })
    }
}
