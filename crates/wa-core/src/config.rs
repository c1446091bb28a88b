use crate::error::{Result, WordsError};
use crate::types::ParseFailurePolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Default number of top-ranked matches a random word is drawn from.
pub const DEFAULT_POOL_CAPACITY: usize = 1000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WordsApiConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub selector: SelectorConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub words_path: PathBuf,
    pub frequency_path: PathBuf,
    pub frequency_has_header: bool,
    pub on_parse_failure: ParseFailurePolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Number of top-ranked matches a random word is drawn from.
    pub pool_capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 9000,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            words_path: PathBuf::from("assets/words.txt"),
            frequency_path: PathBuf::from("assets/unigram_freq.csv"),
            frequency_has_header: false,
            on_parse_failure: ParseFailurePolicy::CoerceToZero,
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self { pool_capacity: DEFAULT_POOL_CAPACITY }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 5,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl WordsApiConfig {
    /// Defaults overridden by process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each known key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();

        if let Some(host) = lookup("HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            cfg.server.port = parse_var("PORT", &port)?;
        }
        if let Some(path) = lookup("WORDS_PATH") {
            cfg.data.words_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("FREQUENCY_PATH") {
            cfg.data.frequency_path = PathBuf::from(path);
        }
        if let Some(flag) = lookup("FREQUENCY_HAS_HEADER") {
            cfg.data.frequency_has_header = parse_var("FREQUENCY_HAS_HEADER", &flag)?;
        }
        if let Some(policy) = lookup("ON_PARSE_FAILURE") {
            cfg.data.on_parse_failure = ParseFailurePolicy::from_str(&policy)
                .map_err(|e| WordsError::Config(format!("ON_PARSE_FAILURE: {e}")))?;
        }
        if let Some(capacity) = lookup("POOL_CAPACITY") {
            cfg.selector.pool_capacity = parse_var("POOL_CAPACITY", &capacity)?;
        }
        if let Some(url) = lookup("DATABASE_URL").filter(|u| !u.trim().is_empty()) {
            cfg.database.url = Some(url);
        }
        if let Some(max) = lookup("DATABASE_MAX_CONNECTIONS") {
            cfg.database.max_connections = parse_var("DATABASE_MAX_CONNECTIONS", &max)?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.selector.pool_capacity == 0 {
            return Err(WordsError::Config("pool_capacity must be at least 1".into()));
        }
        if self.database.max_connections == 0 {
            return Err(WordsError::Config("max_connections must be at least 1".into()));
        }
        Ok(())
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| WordsError::Config(format!("{key}={raw:?}: {e}")))
}
