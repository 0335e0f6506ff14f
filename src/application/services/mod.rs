//! Business logic services for the application layer.

pub mod deck_service;

pub use deck_service::DeckService;
