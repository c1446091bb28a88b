//! Frequency-biased random word selection.
//!
//! A word is drawn uniformly from the `capacity` most frequent words that
//! pass the optional length filter. A small capacity keeps results to very
//! common words; a large one approaches a uniform pick over the table.

use crate::ranker::RankedFrequencyList;
use rand::Rng;

/// The bounded, rank-ordered set of words a selection draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool<'a> {
    words: Vec<&'a str>,
}

impl<'a> CandidatePool<'a> {
    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick one entry uniformly at random. `None` when the pool is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'a str> {
        if self.words.is_empty() {
            return None;
        }
        Some(self.words[rng.gen_range(0..self.words.len())])
    }
}

/// Character length, counted in Unicode scalar values.
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Walk the ranked list from the top, collecting words whose length matches
/// `length` (or every word when `None`) until `capacity` are found.
pub fn candidate_pool<'a>(
    ranked: &'a RankedFrequencyList,
    length: Option<usize>,
    capacity: usize,
) -> CandidatePool<'a> {
    let words = ranked
        .words()
        .filter(|w| length.map_or(true, |len| char_len(w) == len))
        .take(capacity)
        .collect();
    CandidatePool { words }
}

/// Select a random word from the candidate pool. Only real matches are ever
/// returned; when nothing matches the result is `None`.
pub fn select<'a, R: Rng + ?Sized>(
    ranked: &'a RankedFrequencyList,
    length: Option<usize>,
    capacity: usize,
    rng: &mut R,
) -> Option<&'a str> {
    let pool = candidate_pool(ranked, length, capacity);
    let picked = pool.choose(rng);
    tracing::debug!(?length, capacity, pool = pool.len(), ?picked, "selected random word");
    picked
}
