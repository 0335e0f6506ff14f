//! Handlers for deck lifecycle endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::deck::{
    ClearDecksResponse, CreateDeckQuery, DeckListItem, DeckListResponse, DeckResponse,
};
use crate::api::extract::FirstValueQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new deck.
///
/// # Endpoint
///
/// `POST /api/v1/decks`
///
/// # Query Parameters
///
/// - `shuffle` (optional): `true` shuffles the deck before it is stored
/// - `cards` (optional): comma-separated card codes for a custom deck,
///   e.g. `AS,KD,AC,2C,KH`; omitted or empty builds the standard 52 cards
///
/// # Response
///
/// ```json
/// {
///   "deck_id": "a251071b-662f-44b6-ba11-e24863039c59",
///   "shuffled": false,
///   "remaining": 52
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request naming the invalid rank and/or suit if any custom
/// card code is malformed. No deck is created in that case.
pub async fn create_deck_handler(
    State(state): State<AppState>,
    FirstValueQuery(params): FirstValueQuery<CreateDeckQuery>,
) -> Result<Json<DeckResponse>, AppError> {
    let (deck_id, deck) = state
        .deck_service
        .create_deck(params.cards.as_deref(), params.shuffle())?;

    Ok(Json(DeckResponse::summary(deck_id, &deck)))
}

/// Opens a deck, returning its summary and remaining cards.
///
/// # Endpoint
///
/// `GET /api/v1/decks/{deck_id}`
///
/// Opening never changes the deck.
///
/// # Response
///
/// ```json
/// {
///   "deck_id": "a251071b-662f-44b6-ba11-e24863039c59",
///   "shuffled": false,
///   "remaining": 2,
///   "cards": [
///     { "value": "ACE", "suite": "SPADES", "code": "AS" },
///     { "value": "KING", "suite": "HEARTS", "code": "KH" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the deck does not exist.
pub async fn open_deck_handler(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
) -> Result<Json<DeckResponse>, AppError> {
    let deck = state.deck_service.open_deck(&deck_id)?;

    Ok(Json(DeckResponse::with_cards(deck_id, &deck)))
}

/// Lists the identifiers of all decks.
///
/// # Endpoint
///
/// `GET /api/v1/decks`
///
/// # Response
///
/// ```json
/// { "decks": [ { "deck_id": "a251071b-662f-44b6-ba11-e24863039c59" } ] }
/// ```
pub async fn list_decks_handler(State(state): State<AppState>) -> Json<DeckListResponse> {
    let decks = state
        .deck_service
        .list_decks()
        .into_iter()
        .map(|deck_id| DeckListItem { deck_id })
        .collect();

    Json(DeckListResponse { decks })
}

/// Removes every deck.
///
/// # Endpoint
///
/// `DELETE /api/v1/decks` (only mounted when admin routes are enabled)
///
/// # Response
///
/// ```json
/// { "cleared": 3 }
/// ```
pub async fn clear_decks_handler(State(state): State<AppState>) -> Json<ClearDecksResponse> {
    Json(ClearDecksResponse {
        cleared: state.deck_service.clear_all(),
    })
}
