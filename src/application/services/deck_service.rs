//! Deck creation, inspection and drawing service.

use std::sync::{Arc, Mutex, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{Card, Deck};
use crate::domain::repositories::DeckRegistry;
use crate::error::AppError;
use crate::utils::id_generator::IdGenerator;

/// Maximum identifier generation attempts before giving up on a collision.
const MAX_ID_ATTEMPTS: usize = 10;

/// Service orchestrating deck construction, registration and draws.
///
/// This is the single entry point used by the HTTP layer. It owns the
/// shuffle RNG, seeded once when the service is built, so decks created in
/// quick succession never share a shuffle sequence.
pub struct DeckService<R: DeckRegistry> {
    registry: Arc<R>,
    id_generator: Arc<dyn IdGenerator>,
    rng: Mutex<StdRng>,
}

impl<R: DeckRegistry> DeckService<R> {
    /// Creates a new deck service with an OS-seeded shuffle RNG.
    pub fn new(registry: Arc<R>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            registry,
            id_generator,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Replaces the shuffle RNG with one seeded from `seed`, making the
    /// sequence of shuffles reproducible.
    pub fn with_shuffle_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            ..self
        }
    }

    /// Creates and registers a new deck.
    ///
    /// # Arguments
    ///
    /// - `cards` - Optional comma-separated card codes (e.g. `"AS,KD,AC"`).
    ///   `None` or an empty string builds the standard 52-card deck.
    ///   Duplicates are allowed and the given order is kept.
    /// - `shuffle` - Shuffle the deck before registering it
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for the first code whose rank or suit
    /// does not resolve; no deck is registered in that case.
    ///
    /// Returns [`AppError::Internal`] if no free identifier could be generated.
    pub fn create_deck(
        &self,
        cards: Option<&str>,
        shuffle: bool,
    ) -> Result<(String, Deck), AppError> {
        let mut deck = match cards.filter(|selection| !selection.is_empty()) {
            Some(selection) => parse_selection(selection)?,
            None => Deck::standard(),
        };

        if shuffle {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            deck.shuffle(&mut *rng);
        }

        let deck_id = self.register(deck.clone())?;

        info!(
            deck_id = %deck_id,
            remaining = deck.len(),
            shuffled = deck.is_shuffled(),
            "Deck created"
        );

        Ok((deck_id, deck))
    }

    /// Returns a snapshot of a deck without changing it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `deck_id` is not registered.
    pub fn open_deck(&self, deck_id: &str) -> Result<Deck, AppError> {
        self.registry
            .get(deck_id)
            .ok_or_else(|| AppError::deck_not_found(deck_id))
    }

    /// Draws up to `count` cards from the top of a deck, removing them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `deck_id` is not registered.
    pub fn draw_from_deck(&self, deck_id: &str, count: usize) -> Result<Vec<Card>, AppError> {
        let cards = self
            .registry
            .draw(deck_id, count)
            .ok_or_else(|| AppError::deck_not_found(deck_id))?;

        debug!(
            deck_id = %deck_id,
            requested = count,
            drawn = cards.len(),
            "Cards drawn"
        );

        Ok(cards)
    }

    /// Identifiers of all registered decks.
    pub fn list_decks(&self) -> Vec<String> {
        self.registry.ids()
    }

    /// Drops every registered deck, returning how many were removed.
    pub fn clear_all(&self) -> usize {
        let removed = self.registry.clear();
        info!(removed, "Deck registry cleared");
        removed
    }

    /// Number of registered decks.
    pub fn deck_count(&self) -> usize {
        self.registry.count()
    }

    /// Registers a deck under a freshly generated identifier, retrying on
    /// collision up to [`MAX_ID_ATTEMPTS`] times.
    fn register(&self, mut deck: Deck) -> Result<String, AppError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let deck_id = self.id_generator.generate();

            match self.registry.insert(deck_id.clone(), deck) {
                Ok(()) => return Ok(deck_id),
                Err(returned) => {
                    warn!(deck_id = %deck_id, "Deck identifier collision, retrying");
                    deck = returned;
                }
            }
        }

        Err(AppError::internal(
            "Failed to generate unique deck id",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

/// Parses a comma-separated card selection. All-or-nothing: the first
/// invalid code rejects the whole selection.
fn parse_selection(selection: &str) -> Result<Deck, AppError> {
    selection
        .split(',')
        .map(|code| {
            code.parse::<Card>().inspect_err(|err| {
                warn!(code = %err.code(), "Rejected custom deck: {}", err);
            })
        })
        .collect::<Result<Deck, _>>()
        .map_err(AppError::from)
}
