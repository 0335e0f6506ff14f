//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Cards and decks
//! - [`repositories`] - Deck registry trait definition
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The registry trait defines the contract implemented by the infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
