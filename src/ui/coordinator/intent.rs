use super::stack::StackIntent;
use super::state::PathState;
use crate::ui::book_list::BookListIntent;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum CoordinatorIntent {
    /// The flow became visible; triggers the initial fetch.
    OnAppear,

    /// Navigation stack operations.
    Path(StackIntent<PathState, PathIntent>),

    /// Forwarded verbatim to the root book list.
    BookList(BookListIntent),
}

impl Intent for CoordinatorIntent {}

/// Intent for one pushed screen; the variant must match its [`PathState`].
#[derive(Debug, Clone, PartialEq)]
pub enum PathIntent {
    BookList(BookListIntent),
}

impl From<BookListIntent> for CoordinatorIntent {
    fn from(intent: BookListIntent) -> Self {
        Self::BookList(intent)
    }
}
