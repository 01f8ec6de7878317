//! Loading the record list from a data file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// The data file could not be turned into records
#[derive(Debug, Error)]
#[error("cannot read data source {}: {source}", .path.display())]
pub struct DataSourceError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Ordered, immutable list of records; a record's id is its position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    lines: Vec<String>,
}

impl RecordSet {
    /// Read a data file, one record per line.
    ///
    /// Invalid UTF-8 is replaced rather than rejected. `\n`, `\r\n` and a bare
    /// `\r` all end a line, and a final line terminator does not produce an
    /// empty record.
    pub fn load(path: &Path) -> Result<Self, DataSourceError> {
        let bytes = fs::read(path).map_err(|source| DataSourceError {
            path: path.to_path_buf(),
            source,
        })?;

        let text = String::from_utf8_lossy(&bytes);
        let records = Self::from_lines(split_lines(&text));
        debug!(path = %path.display(), records = records.len(), "loaded records");
        Ok(records)
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Split text at `\n`, `\r\n` or `\r`
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some(end) = rest.find(['\n', '\r']) else {
            lines.push(rest);
            break;
        };
        lines.push(&rest[..end]);

        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
    }

    lines
}
