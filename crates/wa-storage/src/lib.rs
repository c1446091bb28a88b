//! Game record storage: in-memory and PostgreSQL backends.

pub mod error;
pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;
pub mod schema;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryGameStore;
#[cfg(feature = "postgres")]
pub use postgres::PgGameStore;
pub use schema::{validate_word, MAX_WORD_CHARS};
pub use traits::GameStore;

#[cfg(test)]
mod tests;
