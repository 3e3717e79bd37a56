/// Live recorder to refresh tests/fixtures/quote_kanye.json via core::net::get_text.
/// Run it explicitly with recording turned on:
///   KR_RECORD=1 cargo test --features test-mode --test quote -- --ignored record_quote_live
#[tokio::test]
#[ignore]
async fn record_quote_live() {
    let client = kanye_rest::KanyeClient::new().unwrap();

    let quote = client.fetch_quote().await.unwrap();

    assert!(quote.is_object());
    assert!(quote.text().is_some_and(|t| !t.is_empty()));
}

#[test]
#[ignore]
fn fetch_quote_live_blocking() {
    let quote = kanye_rest::fetch_quote().unwrap();
    assert!(quote.text().is_some());
}
