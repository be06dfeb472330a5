#![allow(dead_code)]

use axum_test::TestServer;
use url_shortener::routes::routes;
use url_shortener::state::AppState;

pub const TEST_BASE_URL: &str = "http://s.example.com";

/// State with an empty lookup table and a fixed base URL.
pub fn create_test_state() -> AppState {
    AppState::new(Some(TEST_BASE_URL.to_string()))
}

/// State that derives short link bases from the `Host` header.
pub fn create_host_based_state() -> AppState {
    AppState::new(None)
}

/// Server over the full route table.
pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(routes(state)).unwrap()
}

/// Shortens `url` through the API and returns the short code.
pub async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server.post("/shorten").add_query_param("url", url).await;
    response.assert_status_ok();

    let short_url = response.json::<String>();
    short_url
        .rsplit('/')
        .next()
        .unwrap()
        .to_string()
}
