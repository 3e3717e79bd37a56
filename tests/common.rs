#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use kanye_rest::{BlockingKanyeClient, KanyeClient};
use std::{fs, path::Path};
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, name: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, name, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn mock_quote<'a>(server: &'a MockServer, status: u16, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_quote_fixture(server: &MockServer) -> Mock<'_> {
    mock_quote(server, 200, &fixture("quote", "kanye", "json"))
}

pub fn client_for(server: &MockServer) -> KanyeClient {
    KanyeClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap()
}

pub fn blocking_client_for(server: &MockServer) -> BlockingKanyeClient {
    KanyeClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .build_blocking()
        .unwrap()
}

/// An endpoint nothing listens on.
pub fn dead_url() -> Url {
    Url::parse("http://127.0.0.1:1/").unwrap()
}
