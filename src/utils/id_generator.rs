//! Deck identifier generation.
//!
//! Provides the [`IdGenerator`] capability used by
//! [`crate::application::services::DeckService`] together with a random
//! UUID-shaped implementation for production and a sequential one for
//! deterministic runs.

use std::sync::atomic::{AtomicU64, Ordering};

/// Number of random bytes in an identifier (128 bits, like a UUID).
const ID_LENGTH_BYTES: usize = 16;

/// Source of fresh, opaque deck identifiers.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Returns a new identifier.
    fn generate(&self) -> String;
}

/// Generates random version-4 UUID strings.
///
/// Uses `getrandom` for entropy and lays the hex-encoded bytes out in the
/// canonical `8-4-4-4-12` form, e.g. `a251071b-662f-44b6-ba11-e24863039c59`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    /// # Panics
    ///
    /// Panics if the system random number generator fails (extremely rare).
    fn generate(&self) -> String {
        let mut buffer = [0u8; ID_LENGTH_BYTES];

        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        // Version 4, RFC 4122 variant.
        buffer[6] = (buffer[6] & 0x0f) | 0x40;
        buffer[8] = (buffer[8] & 0x3f) | 0x80;

        let hex = hex::encode(buffer);
        format!(
            "{}-{}-{}-{}-{}",
            &hex[0..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..32]
        )
    }
}

/// Generates `<prefix>-<n>` identifiers with `n` counting up from 1.
///
/// Handy in tests and demos where identifiers must be predictable.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequenceIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}
