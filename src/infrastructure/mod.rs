//! Infrastructure layer implementing domain contracts.
//!
//! - [`persistence`] - Deck registry storage
pub mod persistence;
