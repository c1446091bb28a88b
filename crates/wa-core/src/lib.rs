//! Shared types, configuration and errors for the words API.

pub mod config;
pub mod error;
pub mod types;

pub use config::{WordsApiConfig, DEFAULT_POOL_CAPACITY};
pub use error::{Result, WordsError};
pub use types::{FrequencyRecord, GameRecord, ParseFailurePolicy, WordEntry};
