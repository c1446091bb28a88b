use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;
use wa_core::GameRecord;

#[async_trait]
pub trait GameStore: Send + Sync {
    /// Prepare the backend, creating tables if needed.
    async fn init(&self) -> Result<()>;
    /// Persist a new game for `word` and return it with its generated id.
    async fn create(&self, word: &str) -> Result<GameRecord>;
    async fn get(&self, id: Uuid) -> Result<Option<GameRecord>>;
    fn backend(&self) -> &'static str;
}
