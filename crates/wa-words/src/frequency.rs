//! Comma-separated `word,count` frequency table loading.

use std::io::Read;
use std::path::Path;
use wa_core::error::{Result, WordsError};
use wa_core::{FrequencyRecord, ParseFailurePolicy};

#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyOptions {
    /// Skip the first row instead of treating it as data.
    pub has_header: bool,
    pub on_parse_failure: ParseFailurePolicy,
}

impl FrequencyOptions {
    pub fn new(has_header: bool, on_parse_failure: ParseFailurePolicy) -> Self {
        Self { has_header, on_parse_failure }
    }
}

/// Load the frequency table at `path`, keeping file order.
pub fn load_frequencies(
    path: impl AsRef<Path>,
    options: FrequencyOptions,
) -> Result<Vec<FrequencyRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| WordsError::io(path, e))?;
    let records = read_frequencies(file, options).map_err(|e| match e {
        WordsError::Io { source, .. } => WordsError::io(path, source),
        other => other,
    })?;
    tracing::info!(
        path = %path.display(),
        records = records.len(),
        policy = %options.on_parse_failure,
        "loaded frequency table"
    );
    Ok(records)
}

/// Parse a frequency table from any byte source.
///
/// Column 0 is the word, column 1 a decimal count. Extra columns are ignored.
pub fn read_frequencies<R: Read>(
    reader: R,
    options: FrequencyOptions,
) -> Result<Vec<FrequencyRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(options.has_header)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut coerced = 0usize;
    let mut skipped = 0usize;

    // Byte records: a field that is not UTF-8 is malformed data, not a reader error.
    for row in rdr.byte_records() {
        let row = row.map_err(csv_error)?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let word = String::from_utf8_lossy(row.get(0).unwrap_or_default());
        if word.trim().is_empty() {
            match options.on_parse_failure {
                ParseFailurePolicy::CoerceToZero => {
                    tracing::debug!(line, "skipping frequency row with empty word");
                    skipped += 1;
                    continue;
                }
                ParseFailurePolicy::Reject => {
                    return Err(WordsError::MalformedRecord {
                        line,
                        reason: "empty word column".into(),
                    });
                }
            }
        }

        let count = match parse_count(row.get(1)) {
            Ok(count) => count,
            Err(reason) => match options.on_parse_failure {
                ParseFailurePolicy::CoerceToZero => {
                    tracing::debug!(line, word = %word, %reason, "coercing frequency count to 0");
                    coerced += 1;
                    0
                }
                ParseFailurePolicy::Reject => {
                    return Err(WordsError::MalformedRecord { line, reason });
                }
            },
        };

        records.push(FrequencyRecord::new(word, count));
    }

    if coerced > 0 || skipped > 0 {
        tracing::warn!(coerced, skipped, "lenient parsing changed malformed frequency rows");
    }
    Ok(records)
}

fn parse_count(field: Option<&[u8]>) -> std::result::Result<u64, String> {
    let bytes = field.ok_or_else(|| "missing count column".to_string())?;
    let raw = std::str::from_utf8(bytes)
        .map_err(|_| format!("count {:?} is not valid UTF-8", String::from_utf8_lossy(bytes)))?;
    raw.trim()
        .parse::<u64>()
        .map_err(|e| format!("count {raw:?}: {e}"))
}

fn csv_error(err: csv::Error) -> WordsError {
    if err.is_io_error() {
        WordsError::io("<reader>", std::io::Error::from(err))
    } else {
        WordsError::Csv(err)
    }
}
