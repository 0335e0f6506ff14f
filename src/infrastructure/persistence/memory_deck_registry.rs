//! In-memory implementation of the deck registry.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::domain::entities::{Card, Deck};
use crate::domain::repositories::DeckRegistry;

/// Process-local deck registry.
///
/// A single [`RwLock`] guards the whole map: lookups and listings share the
/// read lock, while registration, draws and clearing take the write lock.
/// Every mutation completes in one step under the lock, so a poisoned lock
/// still guards a consistent map and is recovered rather than propagated.
#[derive(Debug, Default)]
pub struct InMemoryDeckRegistry {
    decks: RwLock<HashMap<String, Deck>>,
}

impl InMemoryDeckRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeckRegistry for InMemoryDeckRegistry {
    fn insert(&self, id: String, deck: Deck) -> Result<(), Deck> {
        let mut decks = self.decks.write().unwrap_or_else(PoisonError::into_inner);

        match decks.entry(id) {
            Entry::Occupied(entry) => {
                debug!(deck_id = %entry.key(), "Deck identifier already registered");
                Err(deck)
            }
            Entry::Vacant(entry) => {
                entry.insert(deck);
                Ok(())
            }
        }
    }

    fn get(&self, id: &str) -> Option<Deck> {
        self.decks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    fn draw(&self, id: &str, count: usize) -> Option<Vec<Card>> {
        self.decks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(id)
            .map(|deck| deck.draw(count))
    }

    fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .decks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        ids.sort_unstable();
        ids
    }

    fn count(&self) -> usize {
        self.decks.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn clear(&self) -> usize {
        let mut decks = self.decks.write().unwrap_or_else(PoisonError::into_inner);
        let removed = decks.len();
        decks.clear();
        removed
    }
}
