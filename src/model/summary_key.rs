//! Persistence key for per-book summary expansion.

use std::fmt;

/// Literal prefix of every summary key.
pub const SUMMARY_KEY_PREFIX: &str = "SummaryExpanded.";

/// Composite key `"SummaryExpanded.{title}|{author}"`.
///
/// The same string is used as the in-memory map key and as the persistence
/// key. Embedded `|` characters are not escaped, so a title containing one
/// produces a key that no longer parses back into a pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SummaryKey(String);

impl SummaryKey {
    /// Build the key for a (title, author) pair. Both may be empty.
    pub fn new(title: &str, author: &str) -> Self {
        Self(format!("{SUMMARY_KEY_PREFIX}{title}|{author}"))
    }

    /// Wrap an arbitrary string, e.g. a key coming back from a view.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract `(title, author)`.
    ///
    /// Strips the literal prefix when present, then splits on `|`. Returns
    /// `None` unless there are exactly two parts.
    pub fn parse(&self) -> Option<(&str, &str)> {
        let body = self.0.strip_prefix(SUMMARY_KEY_PREFIX).unwrap_or(&self.0);
        let mut parts = body.split('|');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(title), Some(author), None) => Some((title, author)),
            _ => None,
        }
    }
}

impl fmt::Display for SummaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SummaryKey {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for SummaryKey {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}
