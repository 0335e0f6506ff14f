#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use deck_service::api::handlers::health_handler;
use deck_service::api::routes::deck_routes;
use deck_service::application::services::DeckService;
use deck_service::infrastructure::persistence::InMemoryDeckRegistry;
use deck_service::state::AppState;
use deck_service::utils::id_generator::SequenceIdGenerator;
use serde_json::Value;
use std::sync::Arc;

/// Seed used for every test service so shuffled decks are reproducible.
pub const TEST_SHUFFLE_SEED: u64 = 20;

/// State backed by a fresh registry, issuing ids `deck-1`, `deck-2`, ...
pub fn create_test_state() -> AppState {
    let service = DeckService::new(
        Arc::new(InMemoryDeckRegistry::new()),
        Arc::new(SequenceIdGenerator::new("deck")),
    )
    .with_shuffle_seed(TEST_SHUFFLE_SEED);

    AppState::new(Arc::new(service))
}

/// Deck API plus health check, without rate limiting.
pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1", deck_routes(true))
        .with_state(state)
}

pub fn create_test_server() -> (TestServer, AppState) {
    let state = create_test_state();
    let server = TestServer::new(create_test_app(state.clone())).unwrap();
    (server, state)
}

/// Space-separated codes of a JSON card array.
pub fn card_codes(cards: &Value) -> String {
    cards
        .as_array()
        .unwrap()
        .iter()
        .map(|card| card["code"].as_str().unwrap())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sorted copy of a space-separated code string, for order-insensitive comparison.
pub fn sorted_codes(codes: &str) -> String {
    let mut codes: Vec<&str> = codes.split(' ').collect();
    codes.sort_unstable();
    codes.join(" ")
}
