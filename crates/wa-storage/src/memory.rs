use crate::error::Result;
use crate::schema::validate_word;
use crate::traits::GameStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;
use wa_core::GameRecord;

/// Process-local game store. Records are lost on restart.
#[derive(Default)]
pub struct MemoryGameStore {
    games: RwLock<HashMap<Uuid, GameRecord>>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl GameStore for MemoryGameStore {
    async fn init(&self) -> Result<()> {
        Ok(())
    }

    async fn create(&self, word: &str) -> Result<GameRecord> {
        let record = GameRecord::new(validate_word(word)?);
        self.games.write().insert(record.id, record.clone());
        tracing::debug!(id = %record.id, "stored game in memory");
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<Option<GameRecord>> {
        Ok(self.games.read().get(&id).cloned())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
