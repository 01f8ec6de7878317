pub mod executor;
pub mod parser;
pub mod strategy;

pub use executor::{evaluate, evaluate_strategy, project, QueryExecutor};
pub use parser::{parse_query, parse_query_with, Query};
pub use strategy::{parse_strategy, MatchStrategy, ParsedStrategy, UnknownStrategy};
