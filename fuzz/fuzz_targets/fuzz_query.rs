#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Query and strategy parsing must accept any line without panicking
    let query = linedex::query::parse_query(data);
    assert!(query.words.iter().all(|w| !w.is_empty()));
    let _ = linedex::query::parse_strategy(data);
});
