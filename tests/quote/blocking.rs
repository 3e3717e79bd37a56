use crate::common::{blocking_client_for, dead_url, mock_quote, mock_quote_fixture, setup_server};
use kanye_rest::KanyeClient;

// Plain #[test]: the blocking client must not run inside a tokio runtime.

#[test]
fn blocking_fetch_returns_quote_and_notice() {
    let server = setup_server();
    let mock = mock_quote_fixture(&server);
    let client = blocking_client_for(&server);

    let mut out = Vec::new();
    let quote = kanye_rest::quote::fetch_blocking_with_notice(&client, &mut out).unwrap();

    mock.assert();
    assert_eq!(quote.as_object().map(|m| m.len()), Some(1));
    assert_eq!(quote.text(), Some("I'm a creative genius"));
    assert_eq!(String::from_utf8(out).unwrap(), "New Kanye Quote coming up!\n");
}

#[test]
fn blocking_client_method_prints_to_stdout() {
    let server = setup_server();
    let mock = mock_quote(&server, 200, r#"{"quote":"I love sleep"}"#);

    let quote = blocking_client_for(&server).fetch_quote().unwrap();

    mock.assert();
    assert_eq!(quote.to_string(), "I love sleep");
}

#[test]
fn blocking_errors_match_async_errors() {
    let client = KanyeClient::builder()
        .base_url(dead_url())
        .build_blocking()
        .unwrap();
    let mut out = Vec::new();
    let err = kanye_rest::quote::fetch_blocking_with_notice(&client, &mut out).unwrap_err();
    assert!(err.is_transport(), "got {err:?}");
    assert!(out.is_empty());

    let server = setup_server();
    let _mock = mock_quote(&server, 200, "not json");
    let err = kanye_rest::quote::fetch_blocking_with_notice(&blocking_client_for(&server), &mut out)
        .unwrap_err();
    assert!(err.is_parse(), "got {err:?}");
    assert!(out.is_empty());
}
