//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod decks;
pub mod draw;
pub mod health;

pub use decks::{clear_decks_handler, create_deck_handler, list_decks_handler, open_deck_handler};
pub use draw::draw_cards_handler;
pub use health::health_handler;
