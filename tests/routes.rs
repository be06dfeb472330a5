mod common;

#[tokio::test]
async fn test_canonicalization_scenario() {
    let server = common::create_test_server(common::create_test_state());

    let cases = [
        ("nintex.com", "a"),
        ("nintex.com", "a"),
        ("www.nintex.com", "b"),
        ("http://www.nintex.com", "b"),
        ("https://www.nintex.com", "c"),
        ("https://www.nintex.com#", "c"),
        ("https://www.nintex.com/#", "c"),
        ("https://www.nintex.com/?", "c"),
        ("https://www.nintex.com/?somequerystring=abc123", "d"),
        ("nintex.com", "a"),
    ];

    for (url, expected) in cases {
        assert_eq!(common::shorten(&server, url).await, expected, "{url}");
    }

    let response = server.get("/d").await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<String>(),
        "https://www.nintex.com/?somequerystring=abc123"
    );
}

#[tokio::test]
async fn test_api_prefix_shares_lookup_table() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/api/shorten")
        .add_query_param("url", "nintex.com")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<String>(), "http://s.example.com/a");

    let root = server.get("/a").await;
    root.assert_status_ok();
    assert_eq!(root.json::<String>(), "http://nintex.com/");

    let prefixed = server.get("/api/a").await;
    prefixed.assert_status_ok();
    assert_eq!(prefixed.json::<String>(), "http://nintex.com/");
}

#[tokio::test]
async fn test_health_route_takes_precedence() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "healthy");

    server.get("/api/health").await.assert_status_not_found();
}

#[tokio::test]
async fn test_api_missing_url() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.post("/api/shorten").await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "Must provide a URL."
    );
}
