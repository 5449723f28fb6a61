//! State for the book list screen.

use std::collections::HashMap;

use crate::model::{Book, BookDisplayData, SummaryKey};
use crate::ui::mvi::UiState;

/// Book list screen state.
///
/// `books` is empty until a fetch succeeds. `selected_index` is only
/// meaningful while it is below `books.len()`; the derived accessors return
/// `None` otherwise.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookListState {
    pub books: Vec<Book>,
    pub selected_index: usize,
    /// Absent keys mean "collapsed".
    pub expanded_summary: HashMap<SummaryKey, bool>,
    /// True only while a fetch is in flight.
    pub is_loading: bool,
    pub error_message: Option<String>,
    /// Last tapped external link.
    pub url: String,
}

impl UiState for BookListState {}

impl BookListState {
    pub fn selected_book(&self) -> Option<&Book> {
        self.books.get(self.selected_index)
    }

    pub fn current_summary_key(&self) -> Option<SummaryKey> {
        self.selected_book().map(Book::summary_key)
    }

    pub fn is_summary_expanded(&self, key: &SummaryKey) -> bool {
        self.expanded_summary.get(key).copied().unwrap_or(false)
    }

    pub fn is_current_summary_expanded(&self) -> bool {
        self.current_summary_key()
            .is_some_and(|key| self.is_summary_expanded(&key))
    }

    pub fn display_data(&self) -> Option<BookDisplayData> {
        let book = self.selected_book()?;
        Some(BookDisplayData {
            book: book.clone(),
            series_number: self.selected_index + 1,
            total_series: self.books.len(),
            is_summary_expanded: self.is_summary_expanded(&book.summary_key()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::default_books;

    #[test]
    fn default_is_empty_and_idle() {
        let state = BookListState::default();
        assert!(state.books.is_empty());
        assert_eq!(state.selected_index, 0);
        assert!(!state.is_loading);
        assert_eq!(state.error_message, None);
        assert!(state.selected_book().is_none());
        assert!(state.display_data().is_none());
        assert!(!state.is_current_summary_expanded());
    }

    #[test]
    fn display_data_is_one_based() {
        let state = BookListState {
            books: default_books(),
            selected_index: 2,
            ..Default::default()
        };
        let data = state.display_data().unwrap();
        assert_eq!(data.book.title, "스위프트 프로그래밍");
        assert_eq!(data.series_number, 3);
        assert_eq!(data.total_series, 5);
        assert!(!data.is_summary_expanded);
    }

    #[test]
    fn current_summary_follows_selection() {
        let mut state = BookListState {
            books: default_books(),
            ..Default::default()
        };
        state
            .expanded_summary
            .insert(SummaryKey::new("이펙티브 자바", "조슈아 블로크"), true);

        assert!(!state.is_current_summary_expanded());
        state.selected_index = 1;
        assert!(state.is_current_summary_expanded());
        assert_eq!(
            state.current_summary_key().unwrap().as_str(),
            "SummaryExpanded.이펙티브 자바|조슈아 블로크"
        );
    }

    #[test]
    fn stale_index_yields_no_selection() {
        let state = BookListState {
            books: default_books(),
            selected_index: 9,
            ..Default::default()
        };
        assert!(state.selected_book().is_none());
        assert!(state.current_summary_key().is_none());
    }
}
