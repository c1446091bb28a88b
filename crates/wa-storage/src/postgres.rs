//! PostgreSQL-backed game store.

use crate::error::Result;
use crate::schema::{validate_word, CREATE_WORDLE_TABLE};
use crate::traits::GameStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use uuid::Uuid;
use wa_core::GameRecord;

#[derive(Clone)]
pub struct PgGameStore {
    pool: PgPool,
}

impl PgGameStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        tracing::info!(max_connections, "connected to database");
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl GameStore for PgGameStore {
    async fn init(&self) -> Result<()> {
        sqlx::query(CREATE_WORDLE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    async fn create(&self, word: &str) -> Result<GameRecord> {
        let record = GameRecord::new(validate_word(word)?);
        sqlx::query(
            r#"
            INSERT INTO wordle (id, word, created_on)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(record.id)
        .bind(&record.word)
        .bind(record.created_on)
        .execute(&self.pool)
        .await?;
        tracing::debug!(id = %record.id, "stored game");
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<Option<GameRecord>> {
        let row = sqlx::query(
            r#"
            SELECT id, word, created_on
            FROM wordle
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => Ok(Some(GameRecord {
                id: r.try_get::<Uuid, _>("id")?,
                word: r.try_get::<String, _>("word")?,
                created_on: r.try_get::<DateTime<Utc>, _>("created_on")?,
            })),
            None => Ok(None),
        }
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
