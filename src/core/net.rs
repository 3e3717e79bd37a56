#[cfg(feature = "test-mode")]
use std::env;

/// Read the response body as text.
/// In `test-mode`, if `KR_RECORD=1`, the body is saved as a fixture via `fixtures`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    endpoint: &str,
    name: &str,
    ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;
    maybe_record(endpoint, name, ext, &text);
    Ok(text)
}

/// Blocking twin of [`get_text`].
pub(crate) fn get_text_blocking(
    resp: reqwest::blocking::Response,
    endpoint: &str,
    name: &str,
    ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text()?;
    maybe_record(endpoint, name, ext, &text);
    Ok(text)
}

#[cfg_attr(not(feature = "test-mode"), allow(unused_variables))]
fn maybe_record(endpoint: &str, name: &str, ext: &str, body: &str) {
    #[cfg(feature = "test-mode")]
    {
        if env::var("KR_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(endpoint, name, ext, body)
        {
            eprintln!("KR_RECORD: failed to write fixture {endpoint}_{name}: {e}");
        }
    }
}
