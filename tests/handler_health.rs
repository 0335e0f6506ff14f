mod common;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (server, state) = common::create_test_server();
    state.deck_service.create_deck(None, false).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["registry"]["status"], "ok");
    assert_eq!(
        json["checks"]["registry"]["message"],
        "Decks registered: 1"
    );
}
