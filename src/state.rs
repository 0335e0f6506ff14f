//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::DeckService;
use crate::infrastructure::persistence::InMemoryDeckRegistry;

/// State shared by all request handlers.
///
/// Cloning is cheap: the service lives behind an [`Arc`], so every clone
/// talks to the same deck registry.
#[derive(Clone)]
pub struct AppState {
    pub deck_service: Arc<DeckService<InMemoryDeckRegistry>>,
}

impl AppState {
    pub fn new(deck_service: Arc<DeckService<InMemoryDeckRegistry>>) -> Self {
        Self { deck_service }
    }
}
