//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations: it validates card selections,
//! builds and shuffles decks, generates identifiers and registers decks.
//! Handlers talk only to this layer, never to the registry directly.
//!
//! # Available Services
//!
//! - [`services::deck_service::DeckService`] - Deck creation, inspection and drawing

pub mod services;
