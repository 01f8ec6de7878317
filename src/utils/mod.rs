//! Utility functions shared by the indexer, the query parser and the CLI.
//!
//! - [`tokenizer`] - Splitting text into lowercased words
//! - [`app_data`] - User configuration file (`config.json`)
//!
//! ```
//! use linedex::utils::{split_words, SplitMode};
//!
//! let words = split_words("War and  Peace", SplitMode::Space);
//! assert_eq!(words, vec!["war", "and", "", "peace"]);
//! ```

pub mod app_data;
pub mod tokenizer;

pub use app_data::*;
pub use tokenizer::*;
