use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid word: {0}")]
    InvalidWord(String),
    #[cfg(feature = "postgres")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
