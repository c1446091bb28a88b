//! The immutable word state shared by every request.

use crate::corpus::load_corpus;
use crate::frequency::{load_frequencies, FrequencyOptions};
use crate::lookup::lookup;
use crate::ranker::{rank, RankedFrequencyList};
use crate::selector::{candidate_pool, select, CandidatePool};
use rand::Rng;
use wa_core::config::{DataConfig, SelectorConfig};
use wa_core::error::{Result, WordsError};
use wa_core::{FrequencyRecord, WordEntry};

/// Corpus plus ranked frequency table, built once at startup and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct WordContext {
    corpus: Vec<WordEntry>,
    ranked: RankedFrequencyList,
    pool_capacity: usize,
}

impl WordContext {
    /// Build from already-loaded data. Fails only on a zero pool capacity.
    pub fn new(
        corpus: Vec<WordEntry>,
        frequencies: Vec<FrequencyRecord>,
        pool_capacity: usize,
    ) -> Result<Self> {
        if pool_capacity == 0 {
            return Err(WordsError::Config("pool_capacity must be at least 1".into()));
        }
        Ok(Self {
            corpus,
            ranked: rank(frequencies),
            pool_capacity,
        })
    }

    /// Load both data files and rank the frequency table.
    ///
    /// Any I/O failure is returned to the caller; nothing here exits the
    /// process.
    pub fn load(data: &DataConfig, selector: &SelectorConfig) -> Result<Self> {
        let corpus = load_corpus(&data.words_path)?;
        let options = FrequencyOptions::new(data.frequency_has_header, data.on_parse_failure);
        let frequencies = load_frequencies(&data.frequency_path, options)?;
        let ctx = Self::new(corpus, frequencies, selector.pool_capacity)?;
        tracing::info!(
            words = ctx.corpus.len(),
            ranked = ctx.ranked.len(),
            pool_capacity = ctx.pool_capacity,
            "word context ready"
        );
        Ok(ctx)
    }

    pub fn pool_capacity(&self) -> usize {
        self.pool_capacity
    }

    pub fn ranked(&self) -> &RankedFrequencyList {
        &self.ranked
    }

    /// The full corpus in file order.
    pub fn list_all(&self) -> &[WordEntry] {
        &self.corpus
    }

    pub fn lookup(&self, word: &str) -> Option<&WordEntry> {
        lookup(word, &self.corpus)
    }

    /// Like [`lookup`](Self::lookup), but a miss is a [`WordsError::NotFound`].
    pub fn require(&self, word: &str) -> Result<&WordEntry> {
        self.lookup(word).ok_or_else(|| WordsError::NotFound { word: word.to_string() })
    }

    pub fn candidate_pool(&self, length: Option<usize>) -> CandidatePool<'_> {
        candidate_pool(&self.ranked, length, self.pool_capacity)
    }

    /// Random word, biased toward frequent ones, with the given character
    /// length if any.
    pub fn select<R: Rng + ?Sized>(&self, length: Option<usize>, rng: &mut R) -> Option<&str> {
        select(&self.ranked, length, self.pool_capacity, rng)
    }

    /// [`select`](Self::select) using the thread-local RNG.
    pub fn select_random(&self, length: Option<usize>) -> Option<&str> {
        self.select(length, &mut rand::thread_rng())
    }
}
