//! Per-book summary expansion persistence.
//!
//! Flags are stored under [`SummaryKey`](crate::model::SummaryKey) strings
//! (`"SummaryExpanded.{title}|{author}"`). Implementations must tolerate
//! concurrent reads and writes of independent keys; there is no grouping
//! across books and the last write wins.

mod file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use file::FileSummaryStore;
pub use memory::{sample_summary_flags, MemorySummaryStore};

/// Errors raised by a summary store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to access summary store '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse summary store '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize summary store: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Key-value store for "is the summary of this book expanded".
pub trait SummaryPersistence: Send + Sync {
    /// Stored flag for the pair, `false` when never saved.
    fn load_summary_expanded(&self, title: &str, author: &str) -> Result<bool, PersistenceError>;

    fn save_summary_expanded(
        &self,
        expanded: bool,
        title: &str,
        author: &str,
    ) -> Result<(), PersistenceError>;
}
