use crate::model::Book;
use crate::ui::book_list::effect::BookListEffect;
use crate::ui::book_list::intent::{
    BookListAsyncIntent, BookListInnerIntent, BookListIntent, BookListViewIntent,
};
use crate::ui::book_list::state::BookListState;
use crate::ui::mvi::{Effects, Reducer};

pub struct BookListReducer;

impl Reducer for BookListReducer {
    type State = BookListState;
    type Intent = BookListIntent;
    type Effect = BookListEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Effects<Self::Effect>) {
        match intent {
            BookListIntent::View(intent) => Self::handle_view_intent(state, intent),
            BookListIntent::Async(intent) => Self::handle_async_intent(state, intent),
            BookListIntent::Inner(intent) => Self::handle_inner_intent(state, intent),
        }
    }
}

impl BookListReducer {
    fn handle_view_intent(
        mut state: BookListState,
        intent: BookListViewIntent,
    ) -> (BookListState, Effects<BookListEffect>) {
        match intent {
            BookListViewIntent::SummaryToggleTapped { key } => {
                let expanded = !state.is_summary_expanded(&key);
                let effects = match key.parse() {
                    Some((title, author)) => Effects::one(BookListEffect::SaveSummaryExpanded {
                        title: title.to_string(),
                        author: author.to_string(),
                        expanded,
                    }),
                    None => {
                        tracing::warn!(key = %key, "Malformed summary key, not persisting");
                        Effects::none()
                    }
                };
                tracing::debug!(key = %key, expanded, "Summary toggled");
                state.expanded_summary.insert(key, expanded);
                (state, effects)
            }
            BookListViewIntent::SeriesSelected { index } => {
                match usize::try_from(index) {
                    Ok(index) if index < state.books.len() => {
                        state.selected_index = index;
                    }
                    _ => {
                        tracing::debug!(index, len = state.books.len(), "Selection out of range");
                    }
                }
                (state, Effects::none())
            }
            BookListViewIntent::ErrorDismissed => {
                state.error_message = None;
                (state, Effects::none())
            }
            BookListViewIntent::TapUrl { url } => {
                state.url = url;
                (state, Effects::none())
            }
        }
    }

    fn handle_async_intent(
        mut state: BookListState,
        intent: BookListAsyncIntent,
    ) -> (BookListState, Effects<BookListEffect>) {
        match intent {
            BookListAsyncIntent::FetchBook => {
                state.is_loading = true;
                (state, Effects::one(BookListEffect::FetchBooks))
            }
        }
    }

    fn handle_inner_intent(
        mut state: BookListState,
        intent: BookListInnerIntent,
    ) -> (BookListState, Effects<BookListEffect>) {
        match intent {
            BookListInnerIntent::BookListResponse(Ok(books)) => {
                tracing::debug!(count = books.len(), "Book list loaded");
                let effects = Effects::batch(books.iter().map(load_summary_effect));
                state.is_loading = false;
                state.books = books;
                state.error_message = None;
                state.selected_index = 0;
                (state, effects)
            }
            BookListInnerIntent::BookListResponse(Err(err)) => {
                tracing::debug!(error = %err, "Book list fetch failed");
                state.is_loading = false;
                state.error_message = Some(format!("failed to load books: {err}"));
                state.books.clear();
                state.selected_index = 0;
                state.expanded_summary.clear();
                (state, Effects::none())
            }
            BookListInnerIntent::SummaryStateLoaded { key, is_expanded } => {
                state.expanded_summary.insert(key, is_expanded);
                (state, Effects::none())
            }
        }
    }
}

fn load_summary_effect(book: &Book) -> BookListEffect {
    BookListEffect::LoadSummaryExpanded {
        title: book.title.clone(),
        author: book.author.clone(),
    }
}
