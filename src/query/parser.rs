use crate::utils::tokenizer::{tokenize_query, SplitMode};

/// Parsed search query: distinct, non-empty, lowercased words in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub words: Vec<String>,
}

impl Query {
    /// Build a query from words that are already lowercased
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Parse a query string typed by the user, splitting on single spaces
pub fn parse_query(input: &str) -> Query {
    parse_query_with(input, SplitMode::Space)
}

/// Parse a query string with an explicit split mode
pub fn parse_query_with(input: &str, mode: SplitMode) -> Query {
    let line = input.trim_end_matches(['\n', '\r']);
    Query {
        words: tokenize_query(line, mode),
    }
}
