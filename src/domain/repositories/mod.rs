//! Registry trait definitions for the domain layer.
//!
//! The [`DeckRegistry`] trait abstracts deck storage. It is implemented in
//! `crate::infrastructure::persistence`; a mock is generated via `mockall`
//! for unit tests.

pub mod deck_registry;

pub use deck_registry::DeckRegistry;

#[cfg(test)]
pub use deck_registry::MockDeckRegistry;
