//! # linedex - line-oriented search
//!
//! linedex loads a text file where every line is a record (for example
//! "title author" lines of a book list), builds an in-memory inverted index
//! from lowercased words to the records containing them, and answers
//! set-based queries from an interactive menu.
//!
//! ## Architecture
//!
//! - [`index`] - Inverted index construction and statistics
//! - [`query`] - Query parsing, matching strategies and evaluation
//! - [`records`] - Loading records from a data file
//! - [`engine`] - Records plus their (cached or rebuilt) index
//! - [`repl`] - The interactive menu loop
//! - [`output`] - Terminal formatting
//! - [`utils`] - Word splitting and configuration
//!
//! ## Quick Start
//!
//! ```
//! use linedex::index::build_index;
//! use linedex::query::{parse_query, parse_strategy, QueryExecutor};
//!
//! let records = vec![
//!     "The Great Gatsby".to_string(),
//!     "Great Expectations".to_string(),
//!     "War and Peace".to_string(),
//! ];
//! let index = build_index(&records);
//!
//! let executor = QueryExecutor::new(&index, &records);
//! let results = executor.search(&parse_strategy("ALL"), &parse_query("great"));
//! assert_eq!(results, vec!["The Great Gatsby", "Great Expectations"]);
//! ```
//!
//! ## Matching strategies
//!
//! | Strategy | Result | Empty query |
//! |---|---|---|
//! | `ALL` | records containing every word | every record |
//! | `ANY` | records containing at least one word | nothing |
//! | `NONE` | records containing none of the words | every record |
//!
//! Any other strategy name matches nothing.

pub mod engine;
pub mod index;
pub mod output;
pub mod query;
pub mod records;
pub mod repl;
pub mod utils;
