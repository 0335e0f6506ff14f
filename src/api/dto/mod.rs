//! Data Transfer Objects for API requests and responses.
//!
//! Query parameters are deserialized with Serde (plus `serde_with` helpers);
//! responses mirror the JSON wire shapes of the deck API.

pub mod deck;
pub mod health;
