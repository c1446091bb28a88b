//! Descending-by-count ranking of the frequency table.

use std::ops::Deref;
use wa_core::FrequencyRecord;

/// Frequency records ordered most-frequent first. Equal counts keep their
/// input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedFrequencyList {
    records: Vec<FrequencyRecord>,
}

impl RankedFrequencyList {
    /// Ranked words, most frequent first.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.word.as_str())
    }
}

impl Deref for RankedFrequencyList {
    type Target = [FrequencyRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

/// Rank records by count, highest first.
pub fn rank(mut records: Vec<FrequencyRecord>) -> RankedFrequencyList {
    // sort_by is stable, so ties stay in file order
    records.sort_by(|a, b| b.count.cmp(&a.count));
    RankedFrequencyList { records }
}
