use crate::index::{build_index_with, IndexStats, InvertedIndex};
use crate::query::{parse_query_with, ParsedStrategy, Query, QueryExecutor};
use crate::records::RecordSet;
use crate::utils::{AppConfig, SplitMode};
use std::borrow::Cow;
use tracing::info;

/// Engine options derived from [`AppConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    pub split_mode: SplitMode,
    /// Build the index once up front; otherwise rebuild it for every search
    pub cache_index: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            split_mode: SplitMode::Space,
            cache_index: true,
        }
    }
}

impl From<&AppConfig> for EngineOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            split_mode: config.split_mode,
            cache_index: config.cache_index,
        }
    }
}

/// Loaded records plus the inverted index built from them
pub struct SearchEngine {
    records: RecordSet,
    options: EngineOptions,
    cached: Option<InvertedIndex>,
}

impl SearchEngine {
    pub fn new(records: RecordSet, options: EngineOptions) -> Self {
        let cached = options.cache_index.then(|| {
            let index = build_index_with(records.as_slice(), options.split_mode);
            info!(stats = %IndexStats::from_index(&index), "index ready");
            index
        });

        Self {
            records,
            options,
            cached,
        }
    }

    pub fn records(&self) -> &[String] {
        self.records.as_slice()
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// The index searches run against; built on demand when not cached
    pub fn index(&self) -> Cow<'_, InvertedIndex> {
        match &self.cached {
            Some(index) => Cow::Borrowed(index),
            None => Cow::Owned(build_index_with(self.records(), self.options.split_mode)),
        }
    }

    /// Parse user text into a query using the engine's split mode
    pub fn parse_query(&self, input: &str) -> Query {
        parse_query_with(input, self.options.split_mode)
    }

    /// Records matching `query` under `strategy`, in file order
    pub fn search(&self, strategy: &ParsedStrategy, query: &Query) -> Vec<&str> {
        let index = self.index();
        QueryExecutor::new(&index, self.records()).search(strategy, query)
    }
}
