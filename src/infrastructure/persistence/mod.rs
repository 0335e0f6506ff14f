//! Deck storage implementations.
//!
//! Decks live only for the lifetime of the process.

mod memory_deck_registry;

pub use memory_deck_registry::InMemoryDeckRegistry;
