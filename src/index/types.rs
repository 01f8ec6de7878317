use ahash::AHashMap;
use roaring::RoaringBitmap;

/// Zero-based position of a record in the loaded record list
pub type RecordId = u32;

/// Inverted index: lowercased word -> positions of the records containing it.
///
/// The index remembers how many records it was built from, which defines the
/// universe `{0, .., record_count - 1}` that ALL and NONE queries start from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvertedIndex {
    postings: AHashMap<String, RoaringBitmap>,
    record_count: u32,
}

impl InvertedIndex {
    pub fn new(record_count: u32) -> Self {
        Self {
            postings: AHashMap::new(),
            record_count,
        }
    }

    /// Record that `word` occurs in record `id`
    pub fn insert(&mut self, word: String, id: RecordId) {
        self.postings.entry(word).or_default().insert(id);
    }

    /// Postings for a word, if the word was ever seen
    pub fn get(&self, word: &str) -> Option<&RoaringBitmap> {
        self.postings.get(word)
    }

    /// Postings for a word; an unseen word has no documents
    pub fn docs(&self, word: &str) -> RoaringBitmap {
        self.get(word).cloned().unwrap_or_default()
    }

    /// Number of records the index was built from
    pub fn record_count(&self) -> u32 {
        self.record_count
    }

    /// Number of distinct words
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Every valid record position
    pub fn universe(&self) -> RoaringBitmap {
        universe(self.record_count)
    }

    /// Iterate over (word, postings) pairs in arbitrary order
    pub fn terms(&self) -> impl Iterator<Item = (&str, &RoaringBitmap)> {
        self.postings.iter().map(|(word, docs)| (word.as_str(), docs))
    }
}

/// The set `{0, .., count - 1}`
pub fn universe(count: u32) -> RoaringBitmap {
    let mut all = RoaringBitmap::new();
    all.insert_range(0..count);
    all
}
