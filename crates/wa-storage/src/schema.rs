//! Table layout and record validation shared by every backend.

use crate::error::{Result, StoreError};

/// Longest word a game record accepts, matching the `VARCHAR(20)` column.
pub const MAX_WORD_CHARS: usize = 20;

pub const CREATE_WORDLE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS wordle (
    id UUID NOT NULL PRIMARY KEY,
    word VARCHAR(20) NOT NULL,
    created_on TIMESTAMPTZ NOT NULL
)
"#;

/// Trim and check a word before it is stored.
pub fn validate_word(word: &str) -> Result<&str> {
    let word = word.trim();
    if word.is_empty() {
        return Err(StoreError::InvalidWord("word is required".into()));
    }
    let chars = word.chars().count();
    if chars > MAX_WORD_CHARS {
        return Err(StoreError::InvalidWord(format!(
            "word has {chars} characters, at most {MAX_WORD_CHARS} allowed"
        )));
    }
    Ok(word)
}
