use std::fmt;
use std::str::FromStr;

/// How per-word posting sets are combined into one result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStrategy {
    /// Every query word must be present
    All,
    /// At least one query word must be present
    Any,
    /// No query word may be present
    None,
}

impl MatchStrategy {
    pub const VARIANTS: [MatchStrategy; 3] =
        [MatchStrategy::All, MatchStrategy::Any, MatchStrategy::None];

    pub fn name(self) -> &'static str {
        match self {
            MatchStrategy::All => "ALL",
            MatchStrategy::Any => "ANY",
            MatchStrategy::None => "NONE",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for text that names no strategy
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown matching strategy: {0:?}")]
pub struct UnknownStrategy(pub String);

impl FromStr for MatchStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatchStrategy::VARIANTS
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Outcome of reading a strategy from user input.
///
/// An unrecognized name is not an error: searching with it matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedStrategy {
    Valid(MatchStrategy),
    Unrecognized(String),
}

impl ParsedStrategy {
    pub fn strategy(&self) -> Option<MatchStrategy> {
        match self {
            ParsedStrategy::Valid(strategy) => Some(*strategy),
            ParsedStrategy::Unrecognized(_) => None,
        }
    }
}

impl From<MatchStrategy> for ParsedStrategy {
    fn from(strategy: MatchStrategy) -> Self {
        ParsedStrategy::Valid(strategy)
    }
}

/// Parse a strategy name typed by the user.
///
/// Only the line terminator is stripped; the rest must be exactly `ALL`,
/// `ANY` or `NONE` in any letter case.
pub fn parse_strategy(input: &str) -> ParsedStrategy {
    let name = input.trim_end_matches(['\n', '\r']);
    match name.parse::<MatchStrategy>() {
        Ok(strategy) => ParsedStrategy::Valid(strategy),
        Err(UnknownStrategy(name)) => ParsedStrategy::Unrecognized(name),
    }
}
