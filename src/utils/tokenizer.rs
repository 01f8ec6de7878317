use serde::{Deserialize, Serialize};

/// How a line of text is cut into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Split on every single space character.
    /// Runs of spaces and leading/trailing spaces yield empty words.
    #[default]
    Space,
    /// Split on runs of Unicode whitespace; never yields empty words.
    Whitespace,
}

/// Split `text` into lowercased words according to `mode`.
///
/// Word order and duplicates are preserved.
pub fn split_words(text: &str, mode: SplitMode) -> Vec<String> {
    match mode {
        SplitMode::Space => text.split(' ').map(str::to_lowercase).collect(),
        SplitMode::Whitespace => text.split_whitespace().map(str::to_lowercase).collect(),
    }
}

/// Split query text into distinct, non-empty lowercased words.
/// The first occurrence of a repeated word keeps its position.
pub fn tokenize_query(text: &str, mode: SplitMode) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();

    for word in split_words(text, mode) {
        if word.is_empty() || words.contains(&word) {
            continue;
        }
        words.push(word);
    }

    words
}
