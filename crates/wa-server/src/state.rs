//! Application state shared across all handlers.

use std::sync::Arc;
use std::time::Instant;
use wa_storage::{GameStore, MemoryGameStore};
use wa_words::WordContext;

/// Shared application state. Word data is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub words: Arc<WordContext>,
    pub games: Arc<dyn GameStore>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(words: WordContext, games: Arc<dyn GameStore>) -> Self {
        Self {
            words: Arc::new(words),
            games,
            start_time: Instant::now(),
        }
    }

    /// State backed by the in-memory game store.
    pub fn in_memory(words: WordContext) -> Self {
        Self::new(words, Arc::new(MemoryGameStore::new()))
    }
}
