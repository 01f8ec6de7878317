use crate::index::types::{InvertedIndex, RecordId};
use crate::utils::tokenizer::{split_words, SplitMode};
use tracing::debug;

/// Build an inverted index using literal single-space splitting.
pub fn build_index<S: AsRef<str>>(records: &[S]) -> InvertedIndex {
    build_index_with(records, SplitMode::Space)
}

/// Build an inverted index over `records`, splitting each one with `mode`.
///
/// Every word of record `i` maps to a posting set containing `i`. In
/// [`SplitMode::Space`] the empty word is indexed like any other word when a
/// record has leading, trailing or repeated spaces.
///
/// Record positions are `u32`; a list longer than `u32::MAX` records is not
/// supported.
pub fn build_index_with<S: AsRef<str>>(records: &[S], mode: SplitMode) -> InvertedIndex {
    let record_count = RecordId::try_from(records.len()).unwrap_or(RecordId::MAX);
    let mut index = InvertedIndex::new(record_count);

    for (id, record) in (0..record_count).zip(records) {
        for word in split_words(record.as_ref(), mode) {
            index.insert(word, id);
        }
    }

    debug!(
        records = record_count,
        terms = index.term_count(),
        ?mode,
        "built inverted index"
    );

    index
}
