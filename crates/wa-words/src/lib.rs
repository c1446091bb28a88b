//! Word corpus, frequency ranking and frequency-biased random selection.

pub mod context;
pub mod corpus;
pub mod frequency;
pub mod lookup;
pub mod ranker;
pub mod selector;

pub use context::WordContext;
pub use corpus::{load_corpus, read_corpus};
pub use frequency::{load_frequencies, read_frequencies, FrequencyOptions};
pub use lookup::lookup;
pub use ranker::{rank, RankedFrequencyList};
pub use selector::{candidate_pool, char_len, select, CandidatePool};
