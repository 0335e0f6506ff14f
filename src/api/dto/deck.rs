//! DTOs for deck endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};

use crate::domain::entities::{Card, Deck};

/// Query parameters for `POST /api/v1/decks`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct CreateDeckQuery {
    /// Only the exact value `"true"` requests a shuffle.
    #[serde(default)]
    pub shuffle: Option<String>,

    /// Comma-separated card codes; empty or missing builds a standard deck.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub cards: Option<String>,
}

impl CreateDeckQuery {
    pub fn shuffle(&self) -> bool {
        self.shuffle.as_deref() == Some("true")
    }
}

/// Query parameters for `POST /api/v1/decks/{deck_id}/draw`.
#[derive(Debug, Default, Deserialize)]
pub struct DrawQuery {
    #[serde(default)]
    pub count: Option<String>,
}

impl DrawQuery {
    /// Number of cards to draw.
    ///
    /// Parsing is permissive: a missing, non-numeric or negative count
    /// falls back to a single card instead of rejecting the request.
    pub fn count(&self) -> usize {
        self.count
            .as_deref()
            .and_then(|count| count.parse().ok())
            .unwrap_or(1)
    }
}

/// A card as rendered on the wire.
#[derive(Debug, Serialize)]
pub struct CardResponse {
    pub value: &'static str,
    pub suite: &'static str,
    pub code: String,
}

impl From<&Card> for CardResponse {
    fn from(card: &Card) -> Self {
        Self {
            value: card.rank().name(),
            suite: card.suit().name(),
            code: card.code(),
        }
    }
}

/// Deck summary, optionally carrying the remaining cards.
#[derive(Debug, Serialize)]
pub struct DeckResponse {
    pub deck_id: String,
    pub shuffled: bool,
    pub remaining: usize,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cards: Vec<CardResponse>,
}

impl DeckResponse {
    /// Summary without card contents (creation response).
    pub fn summary(deck_id: String, deck: &Deck) -> Self {
        Self {
            deck_id,
            shuffled: deck.is_shuffled(),
            remaining: deck.len(),
            cards: Vec::new(),
        }
    }

    /// Summary including every remaining card, top first (open response).
    pub fn with_cards(deck_id: String, deck: &Deck) -> Self {
        Self {
            cards: deck.cards().iter().map(CardResponse::from).collect(),
            ..Self::summary(deck_id, deck)
        }
    }
}

/// Cards removed by a draw.
#[derive(Debug, Serialize)]
pub struct DrawResponse {
    pub cards: Vec<CardResponse>,
}

impl From<Vec<Card>> for DrawResponse {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.iter().map(CardResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeckListItem {
    pub deck_id: String,
}

/// All registered decks.
#[derive(Debug, Serialize)]
pub struct DeckListResponse {
    pub decks: Vec<DeckListItem>,
}

/// Result of clearing the registry.
#[derive(Debug, Serialize)]
pub struct ClearDecksResponse {
    pub cleared: usize,
}
