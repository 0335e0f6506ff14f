//! Registry trait for deck storage.

use crate::domain::entities::{Card, Deck};

/// Store mapping opaque identifiers to decks.
///
/// The registry is the sole owner of every registered deck. Callers receive
/// snapshots from [`DeckRegistry::get`]; the only in-place mutation is
/// [`DeckRegistry::draw`], which must look up and shrink the deck atomically
/// so concurrent draws against the same identifier never hand out a card
/// twice or lose one.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryDeckRegistry`] - process-local map behind a lock
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/registry_concurrency.rs`
#[cfg_attr(test, mockall::automock)]
pub trait DeckRegistry: Send + Sync {
    /// Registers `deck` under `id`.
    ///
    /// # Errors
    ///
    /// Returns the deck back unchanged if `id` is already registered.
    fn insert(&self, id: String, deck: Deck) -> Result<(), Deck>;

    /// Returns a snapshot of the deck registered under `id`.
    fn get(&self, id: &str) -> Option<Deck>;

    /// Draws up to `count` cards from the deck registered under `id`.
    ///
    /// # Returns
    ///
    /// - `Some(cards)` with the drawn cards (possibly empty)
    /// - `None` if no deck is registered under `id`
    fn draw(&self, id: &str, count: usize) -> Option<Vec<Card>>;

    /// Identifiers of all registered decks, sorted.
    fn ids(&self) -> Vec<String>;

    /// Number of registered decks.
    fn count(&self) -> usize;

    /// Drops every registered deck, returning how many were removed.
    fn clear(&self) -> usize;
}
