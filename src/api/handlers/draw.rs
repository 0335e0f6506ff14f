//! Handler for drawing cards from a deck.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::deck::{DrawQuery, DrawResponse};
use crate::api::extract::FirstValueQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Draws cards from the top of a deck, removing them permanently.
///
/// # Endpoint
///
/// `POST /api/v1/decks/{deck_id}/draw`
///
/// # Query Parameters
///
/// - `count` (optional): number of cards to draw. Missing or non-numeric
///   values draw a single card. When `count` repeats, the first value is used.
///
/// Asking for more cards than remain returns only what is left; an
/// exhausted deck returns an empty list.
///
/// # Response
///
/// ```json
/// {
///   "cards": [
///     { "value": "ACE", "suite": "SPADES", "code": "AS" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the deck does not exist.
pub async fn draw_cards_handler(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
    FirstValueQuery(params): FirstValueQuery<DrawQuery>,
) -> Result<Json<DrawResponse>, AppError> {
    let cards = state
        .deck_service
        .draw_from_deck(&deck_id, params.count())?;

    Ok(Json(DrawResponse::from(cards)))
}
