use std::time::Duration;

use kanye_rest::KanyeClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    kanye_rest::init_tracing();

    // 1. A client with timeouts; the default has none.
    let client = KanyeClient::builder()
        .timeout(Duration::from_secs(5))
        .connect_timeout(Duration::from_secs(2))
        .build()?;

    // 2. A few quotes, one request each.
    for _ in 0..3 {
        let quote = client.fetch_quote().await?;
        println!("  - {quote}");
    }

    // 3. The raw JSON is available untouched.
    let raw = client.fetch_quote().await?.into_value();
    println!("{}", serde_json::to_string_pretty(&raw)?);

    Ok(())
}
