mod common;

use serde_json::json;

#[tokio::test]
async fn test_open_custom_deck() {
    let (server, state) = common::create_test_server();
    let (deck_id, _) = state
        .deck_service
        .create_deck(Some("AS,KH,10D"), false)
        .unwrap();

    let response = server.get(&format!("/api/v1/decks/{deck_id}")).await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "deck_id": "deck-1",
        "shuffled": false,
        "remaining": 3,
        "cards": [
            { "value": "ACE", "suite": "SPADES", "code": "AS" },
            { "value": "KING", "suite": "HEARTS", "code": "KH" },
            { "value": "10", "suite": "DIAMONDS", "code": "10D" }
        ]
    }));
}

#[tokio::test]
async fn test_open_standard_deck_lists_all_cards_in_order() {
    let (server, state) = common::create_test_server();
    let (deck_id, deck) = state.deck_service.create_deck(None, false).unwrap();

    let response = server.get(&format!("/api/v1/decks/{deck_id}")).await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["remaining"], 52);
    assert_eq!(common::card_codes(&json["cards"]), deck.to_string());
}

#[tokio::test]
async fn test_open_shuffled_deck_reports_shuffle() {
    let (server, state) = common::create_test_server();
    let (deck_id, deck) = state.deck_service.create_deck(None, true).unwrap();

    let response = server.get(&format!("/api/v1/decks/{deck_id}")).await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["shuffled"], true);
    assert_eq!(common::card_codes(&json["cards"]), deck.to_string());
}

#[tokio::test]
async fn test_open_does_not_consume_cards() {
    let (server, state) = common::create_test_server();
    let (deck_id, _) = state
        .deck_service
        .create_deck(Some("AS,2S"), false)
        .unwrap();

    for _ in 0..3 {
        server
            .get(&format!("/api/v1/decks/{deck_id}"))
            .await
            .assert_status_ok();
    }

    let response = server
        .post(&format!("/api/v1/decks/{deck_id}/draw"))
        .add_query_param("count", "2")
        .await;

    assert_eq!(
        common::card_codes(&response.json::<serde_json::Value>()["cards"]),
        "AS 2S"
    );
}

#[tokio::test]
async fn test_open_exhausted_deck_omits_cards() {
    let (server, state) = common::create_test_server();
    let (deck_id, _) = state.deck_service.create_deck(Some("AS"), false).unwrap();
    state.deck_service.draw_from_deck(&deck_id, 1).unwrap();

    let response = server.get(&format!("/api/v1/decks/{deck_id}")).await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "deck_id": "deck-1",
        "shuffled": false,
        "remaining": 0
    }));
}

#[tokio::test]
async fn test_open_unknown_deck() {
    let (server, _state) = common::create_test_server();

    let response = server.get("/api/v1/decks/INVALID_ID").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["deck_id"], "INVALID_ID");
}
