use crate::index::types::InvertedIndex;
use std::fmt;

/// How many of the most frequent words a summary keeps
pub const DEFAULT_TOP_TERMS: usize = 5;

/// Summary of an inverted index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    pub record_count: u32,
    pub term_count: usize,
    /// Sum of all posting set sizes
    pub posting_count: u64,
    /// Most frequent words with their document frequency, highest first
    pub top_terms: Vec<(String, u64)>,
}

impl IndexStats {
    pub fn from_index(index: &InvertedIndex) -> Self {
        Self::with_top_terms(index, DEFAULT_TOP_TERMS)
    }

    pub fn with_top_terms(index: &InvertedIndex, limit: usize) -> Self {
        let mut terms: Vec<(String, u64)> = index
            .terms()
            .map(|(word, docs)| (word.to_string(), docs.len()))
            .collect();

        let posting_count = terms.iter().map(|(_, freq)| freq).sum();

        // Frequency descending, ties alphabetical so output is stable
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        terms.truncate(limit);

        Self {
            record_count: index.record_count(),
            term_count: index.term_count(),
            posting_count,
            top_terms: terms,
        }
    }
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records, {} terms, {} postings",
            self.record_count, self.term_count, self.posting_count
        )?;
        if !self.top_terms.is_empty() {
            let top: Vec<String> = self
                .top_terms
                .iter()
                .map(|(word, freq)| format!("{:?}={}", word, freq))
                .collect();
            write!(f, "; top: {}", top.join(", "))?;
        }
        Ok(())
    }
}
