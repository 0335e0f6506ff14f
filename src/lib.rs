//! # Deck Service
//!
//! An in-memory playing card deck service built with Axum.
//!
//! Clients create decks (the standard 52 cards or a custom selection),
//! optionally shuffled, open them to inspect the remaining cards, and draw
//! cards off the top, which removes them for good.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Card and deck entities, registry trait
//! - **Application Layer** ([`application`]) - Deck orchestration service
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory deck registry
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//!
//! curl -X POST 'localhost:3000/api/v1/decks?shuffle=true'
//! curl 'localhost:3000/api/v1/decks/{deck_id}'
//! curl -X POST 'localhost:3000/api/v1/decks/{deck_id}/draw?count=3'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::DeckService;
    pub use crate::domain::entities::{Card, Deck, Rank, STANDARD_DECK, Suit};
    pub use crate::domain::repositories::DeckRegistry;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryDeckRegistry;
    pub use crate::state::AppState;
    pub use crate::utils::id_generator::{IdGenerator, RandomIdGenerator, SequenceIdGenerator};
}
