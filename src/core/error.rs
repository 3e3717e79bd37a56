use thiserror::Error;

/// The error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum KanyeError {
    /// The HTTP request could not be completed (DNS, connect, TLS, timeout, body read).
    ///
    /// A non-2xx status is not reported here; the body is parsed regardless.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A provided endpoint URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl KanyeError {
    /// True if this is a transport-level failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, KanyeError::Http(_))
    }

    /// True if the body could not be parsed as JSON.
    pub fn is_parse(&self) -> bool {
        matches!(self, KanyeError::Json(_))
    }
}
