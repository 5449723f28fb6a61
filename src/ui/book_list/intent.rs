//! Intents for the book list screen.

use thiserror::Error;

use crate::model::{Book, SummaryKey};
use crate::ui::mvi::Intent;

/// Error carried by a failed fetch.
///
/// Every repository failure is flattened into this one kind; callers that
/// need the underlying cause must inspect it before the effect wraps it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookListError {
    #[error("encoding error: {0}")]
    Encoding(String),
}

/// Intents that can be dispatched to the book list reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum BookListIntent {
    /// User interaction.
    View(BookListViewIntent),

    /// Kicks off async work.
    Async(BookListAsyncIntent),

    /// Effect results; never sent by a view directly.
    Inner(BookListInnerIntent),
}

impl Intent for BookListIntent {}

#[derive(Debug, Clone, PartialEq)]
pub enum BookListViewIntent {
    /// Expand/collapse the summary stored under `key`.
    SummaryToggleTapped { key: SummaryKey },

    /// Series button pressed. Signed so callers can pass raw offsets.
    SeriesSelected { index: isize },

    ErrorDismissed,

    /// External link tapped; stored verbatim.
    TapUrl { url: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookListAsyncIntent {
    FetchBook,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookListInnerIntent {
    BookListResponse(Result<Vec<Book>, BookListError>),

    /// Persisted flag for one book, read after a successful fetch.
    SummaryStateLoaded { key: SummaryKey, is_expanded: bool },
}

impl From<BookListViewIntent> for BookListIntent {
    fn from(intent: BookListViewIntent) -> Self {
        Self::View(intent)
    }
}

impl From<BookListAsyncIntent> for BookListIntent {
    fn from(intent: BookListAsyncIntent) -> Self {
        Self::Async(intent)
    }
}

impl From<BookListInnerIntent> for BookListIntent {
    fn from(intent: BookListInnerIntent) -> Self {
        Self::Inner(intent)
    }
}
