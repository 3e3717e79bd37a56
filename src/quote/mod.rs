use std::io::{self, Write};

use crate::core::client::constants::NEW_QUOTE_NOTICE;
use crate::core::{BlockingKanyeClient, KanyeClient, KanyeError, Quote, net};

/* ---------------- Public API ---------------- */

/// Fetch a random quote and announce it on standard output.
///
/// Sends one GET to the client's endpoint, parses the whole body as JSON and
/// prints `New Kanye Quote coming up!` once parsing succeeds. The status code
/// is not checked and the JSON is returned as-is.
pub async fn fetch(client: &KanyeClient) -> Result<Quote, KanyeError> {
    fetch_with_notice(client, &mut io::stdout()).await
}

/// Same as [`fetch`], but writes the notice line to `out` instead of stdout.
///
/// Nothing is written if the request or the parse fails.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(client, out), err, fields(url = %client.base_url()))
)]
pub async fn fetch_with_notice<W: Write>(
    client: &KanyeClient,
    out: &mut W,
) -> Result<Quote, KanyeError> {
    let resp = client.http().get(client.base_url().clone()).send().await?;

    #[cfg(feature = "tracing")]
    let status = resp.status();

    let body = net::get_text(resp, "quote", "kanye", "json").await?;

    #[cfg(feature = "tracing")]
    tracing::debug!(status = status.as_u16(), bytes = body.len(), "quote response received");

    parse_and_announce(&body, out)
}

/// Blocking form of [`fetch`].
pub fn fetch_blocking(client: &BlockingKanyeClient) -> Result<Quote, KanyeError> {
    fetch_blocking_with_notice(client, &mut io::stdout())
}

/// Blocking form of [`fetch_with_notice`].
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(client, out), err, fields(url = %client.base_url()))
)]
pub fn fetch_blocking_with_notice<W: Write>(
    client: &BlockingKanyeClient,
    out: &mut W,
) -> Result<Quote, KanyeError> {
    let resp = client.http().get(client.base_url().clone()).send()?;

    #[cfg(feature = "tracing")]
    let status = resp.status();

    let body = net::get_text_blocking(resp, "quote", "kanye", "json")?;

    #[cfg(feature = "tracing")]
    tracing::debug!(status = status.as_u16(), bytes = body.len(), "quote response received");

    parse_and_announce(&body, out)
}

/* ---------------- Internal ---------------- */

fn parse_and_announce<W: Write>(body: &str, out: &mut W) -> Result<Quote, KanyeError> {
    let quote: Quote = serde_json::from_str(body)?;
    // a closed stdout is not a fetch failure
    let _ = writeln!(out, "{NEW_QUOTE_NOTICE}");
    Ok(quote)
}
