//! Core domain entities representing the card data model.
//!
//! # Entity Types
//!
//! - [`Card`] - An immutable playing card (rank + suit)
//! - [`Deck`] - An ordered, shrinking collection of cards

pub mod card;
pub mod deck;

pub use card::{Card, CardCodeError, Rank, Suit};
pub use deck::{Deck, STANDARD_DECK};
