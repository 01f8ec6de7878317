use crate::index::types::{universe, InvertedIndex, RecordId};
use crate::query::parser::Query;
use crate::query::strategy::{MatchStrategy, ParsedStrategy};
use roaring::RoaringBitmap;
use tracing::debug;

/// Evaluate a query against an index.
///
/// The result is always a subset of `{0, .., total_records - 1}`. An
/// unrecognized strategy matches nothing.
pub fn evaluate(
    strategy: &ParsedStrategy,
    query: &Query,
    index: &InvertedIndex,
    total_records: RecordId,
) -> RoaringBitmap {
    match strategy {
        ParsedStrategy::Valid(strategy) => evaluate_strategy(*strategy, query, index, total_records),
        ParsedStrategy::Unrecognized(name) => {
            debug!(strategy = %name, "unrecognized strategy matches nothing");
            RoaringBitmap::new()
        }
    }
}

/// Evaluate a query with a known strategy
pub fn evaluate_strategy(
    strategy: MatchStrategy,
    query: &Query,
    index: &InvertedIndex,
    total_records: RecordId,
) -> RoaringBitmap {
    let all = universe(total_records);

    match strategy {
        MatchStrategy::All => {
            // An empty query keeps the whole universe
            let mut result = all;
            for word in query.words() {
                match index.get(word) {
                    Some(docs) => result &= docs,
                    None => result.clear(),
                }
                if result.is_empty() {
                    break;
                }
            }
            result
        }
        MatchStrategy::Any => {
            let mut result = union_of(query, index);
            result &= &all;
            result
        }
        MatchStrategy::None => {
            let mut result = all;
            result -= &union_of(query, index);
            result
        }
    }
}

/// Union of the posting sets of every query word
fn union_of(query: &Query, index: &InvertedIndex) -> RoaringBitmap {
    let mut union = RoaringBitmap::new();
    for docs in query.words().filter_map(|word| index.get(word)) {
        union |= docs;
    }
    union
}

/// Map matching positions back to their records, in ascending position order.
/// Positions with no record are skipped.
pub fn project<'r, S: AsRef<str>>(ids: &RoaringBitmap, records: &'r [S]) -> Vec<&'r str> {
    ids.iter()
        .filter_map(|id| records.get(id as usize))
        .map(AsRef::as_ref)
        .collect()
}

/// Query executor over an index and the records it was built from
pub struct QueryExecutor<'i, 'r, S> {
    index: &'i InvertedIndex,
    records: &'r [S],
}

impl<'i, 'r, S: AsRef<str>> QueryExecutor<'i, 'r, S> {
    pub fn new(index: &'i InvertedIndex, records: &'r [S]) -> Self {
        Self { index, records }
    }

    /// Matching record positions
    pub fn matches(&self, strategy: &ParsedStrategy, query: &Query) -> RoaringBitmap {
        let total = RecordId::try_from(self.records.len()).unwrap_or(RecordId::MAX);
        evaluate(strategy, query, self.index, total)
    }

    /// Matching records in file order
    pub fn search(&self, strategy: &ParsedStrategy, query: &Query) -> Vec<&'r str> {
        let ids = self.matches(strategy, query);
        debug!(
            strategy = ?strategy,
            words = query.words.len(),
            matches = ids.len(),
            "query evaluated"
        );
        project(&ids, self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build::build_index;

    fn books() -> Vec<String> {
        ["The Great Gatsby", "Great Expectations", "War and Peace"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn run(strategy: MatchStrategy, words: &[&str]) -> Vec<u32> {
        let records = books();
        let index = build_index(&records);
        let query = Query::from_words(words.iter().copied());
        evaluate(&strategy.into(), &query, &index, records.len() as u32)
            .iter()
            .collect()
    }

    #[test]
    fn test_all_single_word() {
        assert_eq!(run(MatchStrategy::All, &["great"]), vec![0, 1]);
    }

    #[test]
    fn test_all_intersects() {
        assert_eq!(run(MatchStrategy::All, &["great", "gatsby"]), vec![0]);
        assert!(run(MatchStrategy::All, &["great", "war"]).is_empty());
    }

    #[test]
    fn test_all_missing_word() {
        assert!(run(MatchStrategy::All, &["nonexistentword"]).is_empty());
        assert!(run(MatchStrategy::All, &["nonexistentword", "great"]).is_empty());
    }

    #[test]
    fn test_all_empty_query_is_universe() {
        assert_eq!(run(MatchStrategy::All, &[]), vec![0, 1, 2]);
    }

    #[test]
    fn test_any_unions() {
        assert_eq!(run(MatchStrategy::Any, &["great", "war"]), vec![0, 1, 2]);
        assert_eq!(run(MatchStrategy::Any, &["peace", "missing"]), vec![2]);
    }

    #[test]
    fn test_any_empty_query_is_empty() {
        assert!(run(MatchStrategy::Any, &[]).is_empty());
    }

    #[test]
    fn test_none_subtracts() {
        assert_eq!(run(MatchStrategy::None, &["great"]), vec![2]);
        assert!(run(MatchStrategy::None, &["great", "war"]).is_empty());
        assert_eq!(run(MatchStrategy::None, &["missing"]), vec![0, 1, 2]);
    }

    #[test]
    fn test_none_empty_query_is_universe() {
        assert_eq!(run(MatchStrategy::None, &[]), vec![0, 1, 2]);
    }

    #[test]
    fn test_unrecognized_matches_nothing() {
        let records = books();
        let index = build_index(&records);
        let strategy = ParsedStrategy::Unrecognized("XYZ".to_string());

        for words in [vec![], vec!["great"], vec!["missing"]] {
            let query = Query::from_words(words);
            assert!(evaluate(&strategy, &query, &index, 3).is_empty());
        }
    }

    #[test]
    fn test_result_bounded_by_total_records() {
        let records = books();
        let index = build_index(&records);
        let query = Query::from_words(["great", "war"]);

        // Index knows about record 2, but the caller only has two records
        let any: Vec<u32> = evaluate(&MatchStrategy::Any.into(), &query, &index, 2)
            .iter()
            .collect();
        assert_eq!(any, vec![0, 1]);
    }

    #[test]
    fn test_project_preserves_record_order() {
        let records = books();
        let mut ids = RoaringBitmap::new();
        ids.insert(2);
        ids.insert(0);
        ids.insert(7);
        assert_eq!(project(&ids, &records), vec!["The Great Gatsby", "War and Peace"]);
    }

    #[test]
    fn test_executor_search() {
        let records = books();
        let index = build_index(&records);
        let executor = QueryExecutor::new(&index, &records);

        let results = executor.search(&MatchStrategy::None.into(), &Query::from_words(["great"]));
        assert_eq!(results, vec!["War and Peace"]);
    }
}
