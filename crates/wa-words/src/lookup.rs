use wa_core::WordEntry;

/// Exact, case-sensitive corpus membership. Returns the stored entry.
pub fn lookup<'a>(word: &str, corpus: &'a [WordEntry]) -> Option<&'a WordEntry> {
    corpus.iter().find(|entry| entry.as_str() == word)
}
