//! Utility functions used across the application.
//!
//! - [`id_generator`] - Deck identifier generation

pub mod id_generator;
