use super::stack::StackState;
use crate::ui::book_list::BookListState;
use crate::ui::mvi::UiState;

/// Coordinator state: the root book list plus anything pushed on top.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoordinatorState {
    pub path: StackState<PathState>,
    pub book_list: BookListState,
}

impl UiState for CoordinatorState {}

/// Screens that can be pushed onto the coordinator's path.
#[derive(Debug, Clone, PartialEq)]
pub enum PathState {
    BookList(BookListState),
}

impl Default for PathState {
    fn default() -> Self {
        PathState::BookList(BookListState::default())
    }
}
