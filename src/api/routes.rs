//! API route configuration.

use crate::api::handlers::{
    clear_decks_handler, create_deck_handler, draw_cards_handler, list_decks_handler,
    open_deck_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Deck API routes, mounted under `/api/v1`.
///
/// # Endpoints
///
/// - `GET    /decks`                  - List deck identifiers
/// - `POST   /decks`                  - Create a deck (`?shuffle=true&cards=AS,KD`)
/// - `DELETE /decks`                  - Remove every deck (only with `enable_admin`)
/// - `GET    /decks/{deck_id}`        - Open a deck (summary + remaining cards)
/// - `POST   /decks/{deck_id}/draw`   - Draw cards (`?count=N`)
pub fn deck_routes(enable_admin: bool) -> Router<AppState> {
    let decks = get(list_decks_handler).post(create_deck_handler);
    let decks = if enable_admin {
        decks.delete(clear_decks_handler)
    } else {
        decks
    };

    Router::new()
        .route("/decks", decks)
        .route("/decks/{deck_id}", get(open_deck_handler))
        .route("/decks/{deck_id}/draw", post(draw_cards_handler))
}
