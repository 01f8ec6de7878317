#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linedex::index::{build_index, universe};
use linedex::query::{evaluate, MatchStrategy, Query};

#[derive(Debug, Arbitrary)]
struct Input {
    records: Vec<String>,
    words: Vec<String>,
    total_records: u16,
}

fuzz_target!(|input: Input| {
    let index = build_index(&input.records);
    let query = Query::from_words(input.words.iter().map(|w| w.to_lowercase()));

    // Results stay inside the caller's universe even when it disagrees with the index
    let total = u32::from(input.total_records);
    let all = universe(total);
    for strategy in MatchStrategy::VARIANTS {
        let result = evaluate(&strategy.into(), &query, &index, total);
        assert!(result.is_subset(&all));
    }
});
