use super::effect::{CoordinatorEffect, PathEffect};
use super::intent::{CoordinatorIntent, PathIntent};
use super::stack::{StackElementId, StackIntent};
use super::state::{CoordinatorState, PathState};
use crate::ui::book_list::{BookListAsyncIntent, BookListIntent, BookListReducer};
use crate::ui::mvi::{Effects, Reducer};

pub struct CoordinatorReducer;

impl Reducer for CoordinatorReducer {
    type State = CoordinatorState;
    type Intent = CoordinatorIntent;
    type Effect = CoordinatorEffect;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Effects<Self::Effect>) {
        match intent {
            CoordinatorIntent::OnAppear => {
                tracing::debug!("Book coordinator appeared");
                let fetch = BookListIntent::Async(BookListAsyncIntent::FetchBook);
                (
                    state,
                    Effects::one(CoordinatorEffect::Send(CoordinatorIntent::BookList(fetch))),
                )
            }
            CoordinatorIntent::Path(intent) => Self::handle_path_intent(state, intent),
            CoordinatorIntent::BookList(intent) => {
                let (book_list, effects) = BookListReducer::reduce(state.book_list, intent);
                state.book_list = book_list;
                (state, effects.map(CoordinatorEffect::BookList))
            }
        }
    }
}

impl CoordinatorReducer {
    fn handle_path_intent(
        mut state: CoordinatorState,
        intent: StackIntent<PathState, PathIntent>,
    ) -> (CoordinatorState, Effects<CoordinatorEffect>) {
        match intent {
            StackIntent::Push { id, state: element } => {
                if state.path.push(id, element) {
                    tracing::debug!(%id, depth = state.path.len(), "Pushed screen");
                } else {
                    tracing::warn!(%id, "Ignoring push with duplicate stack id");
                }
                (state, Effects::none())
            }
            StackIntent::PopFrom { id } => {
                if state.path.pop_from(id) {
                    tracing::debug!(%id, depth = state.path.len(), "Popped screens");
                }
                (state, Effects::none())
            }
            StackIntent::Element { id, intent } => {
                let Some(element) = state.path.get_mut(id) else {
                    tracing::debug!(%id, "Dropping intent for a screen no longer on the stack");
                    return (state, Effects::none());
                };
                let (next, effects) = PathReducer::reduce(std::mem::take(element), intent);
                *element = next;
                let effects = effects.map(|effect| CoordinatorEffect::Path { id, effect });
                (state, effects)
            }
        }
    }
}

/// Reduces intents for a single pushed screen.
pub struct PathReducer;

impl PathReducer {
    pub fn reduce(state: PathState, intent: PathIntent) -> (PathState, Effects<PathEffect>) {
        match (state, intent) {
            (PathState::BookList(book_list), PathIntent::BookList(intent)) => {
                let (book_list, effects) = BookListReducer::reduce(book_list, intent);
                (
                    PathState::BookList(book_list),
                    effects.map(PathEffect::BookList),
                )
            }
        }
    }
}

/// Convenience for pushing a fresh book list on top of `state`'s path.
pub fn push_book_list(state: &CoordinatorState) -> CoordinatorIntent {
    let id: StackElementId = state.path.next_id();
    CoordinatorIntent::Path(StackIntent::Push {
        id,
        state: PathState::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::default_books;
    use crate::ui::book_list::{BookListEffect, BookListInnerIntent, BookListViewIntent};

    #[test]
    fn on_appear_sends_fetch_without_touching_state() {
        let (state, effects) =
            CoordinatorReducer::reduce(CoordinatorState::default(), CoordinatorIntent::OnAppear);

        assert_eq!(state, CoordinatorState::default());
        assert_eq!(
            effects.as_slice(),
            &[CoordinatorEffect::Send(CoordinatorIntent::BookList(
                BookListAsyncIntent::FetchBook.into()
            ))]
        );
    }

    #[test]
    fn book_list_effects_are_wrapped() {
        let (state, effects) = CoordinatorReducer::reduce(
            CoordinatorState::default(),
            BookListIntent::from(BookListAsyncIntent::FetchBook).into(),
        );

        assert!(state.book_list.is_loading);
        assert_eq!(
            effects.as_slice(),
            &[CoordinatorEffect::BookList(BookListEffect::FetchBooks)]
        );
    }

    #[test]
    fn element_intents_reach_only_that_screen() {
        let state = CoordinatorState::default();
        let (state, _) = CoordinatorReducer::reduce(state.clone(), push_book_list(&state));
        let id = StackElementId(0);

        let response = BookListInnerIntent::BookListResponse(Ok(default_books()));
        let (state, effects) = CoordinatorReducer::reduce(
            state,
            CoordinatorIntent::Path(StackIntent::Element {
                id,
                intent: PathIntent::BookList(response.into()),
            }),
        );

        let Some(PathState::BookList(pushed)) = state.path.get(id) else {
            panic!("pushed screen missing");
        };
        assert_eq!(pushed.books.len(), 5);
        assert!(state.book_list.books.is_empty());
        assert_eq!(effects.len(), 5);
        for effect in effects.as_slice() {
            let CoordinatorEffect::Path { id: effect_id, .. } = effect else {
                panic!("untagged effect {effect:?}");
            };
            assert_eq!(*effect_id, id);
        }
    }

    #[test]
    fn element_intent_after_pop_is_dropped() {
        let mut state = CoordinatorState::default();
        state.path.push(StackElementId(3), PathState::default());
        let (state, _) = CoordinatorReducer::reduce(
            state,
            CoordinatorIntent::Path(StackIntent::PopFrom {
                id: StackElementId(3),
            }),
        );

        let (after, effects) = CoordinatorReducer::reduce(
            state.clone(),
            CoordinatorIntent::Path(StackIntent::Element {
                id: StackElementId(3),
                intent: PathIntent::BookList(
                    BookListViewIntent::SeriesSelected { index: 1 }.into(),
                ),
            }),
        );

        assert_eq!(after, state);
        assert!(effects.is_empty());
    }

    #[test]
    fn duplicate_push_is_ignored() {
        let mut state = CoordinatorState::default();
        state.path.push(StackElementId(0), PathState::default());

        let loaded = PathState::BookList(crate::ui::book_list::BookListState {
            books: default_books(),
            ..Default::default()
        });
        let (state, _) = CoordinatorReducer::reduce(
            state,
            CoordinatorIntent::Path(StackIntent::Push {
                id: StackElementId(0),
                state: loaded,
            }),
        );

        assert_eq!(state.path.len(), 1);
        assert_eq!(state.path.get(StackElementId(0)), Some(&PathState::default()));
    }
}
