//! Newline-delimited word list loading.

use std::io::Read;
use std::path::Path;
use wa_core::error::{Result, WordsError};
use wa_core::WordEntry;

/// Load the corpus file at `path`.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<WordEntry>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| WordsError::io(path, e))?;
    let words = read_corpus(file).map_err(|e| match e {
        WordsError::Io { source, .. } => WordsError::io(path, source),
        other => other,
    })?;
    tracing::info!(path = %path.display(), words = words.len(), "loaded word corpus");
    Ok(words)
}

/// Read a corpus from any byte source.
///
/// One word per line, kept in file order with its original case. Lines that
/// are blank after trimming are dropped, including the empty tail left by a
/// final newline.
pub fn read_corpus<R: Read>(mut reader: R) -> Result<Vec<WordEntry>> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .map_err(|e| WordsError::io("<reader>", e))?;

    Ok(raw
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}
