pub mod build;
pub mod stats;
pub mod types;

pub use build::{build_index, build_index_with};
pub use stats::IndexStats;
pub use types::*;
