mod common;

use bookseries::ui::book_list::{BookListAsyncIntent, BookListEffect, BookListViewIntent};
use bookseries::ui::coordinator::{
    CoordinatorEffect, CoordinatorIntent, CoordinatorReducer, CoordinatorState, PathEffect,
    PathIntent, PathState, StackElementId, StackIntent,
};
use bookseries::ui::mvi::Reducer;
use common::reduce_all;

fn push(id: u64) -> CoordinatorIntent {
    CoordinatorIntent::Path(StackIntent::Push {
        id: StackElementId(id),
        state: PathState::default(),
    })
}

fn pop_from(id: u64) -> CoordinatorIntent {
    CoordinatorIntent::Path(StackIntent::PopFrom {
        id: StackElementId(id),
    })
}

#[test]
fn push_then_pop_keeps_lower_elements() {
    let state = reduce_all::<CoordinatorReducer>(vec![push(0), push(1)]);
    assert_eq!(state.path.len(), 2);
    assert_eq!(state.path.ids(), vec![StackElementId(0), StackElementId(1)]);

    let (state, effects) = CoordinatorReducer::reduce(state, pop_from(1));
    assert_eq!(state.path.ids(), vec![StackElementId(0)]);
    assert!(effects.is_empty());
}

#[test]
fn pop_from_bottom_clears_stack() {
    let state = reduce_all::<CoordinatorReducer>(vec![push(0), push(1), push(2), pop_from(0)]);
    assert!(state.path.is_empty());
}

#[test]
fn pop_unknown_id_is_noop() {
    let state = reduce_all::<CoordinatorReducer>(vec![push(0)]);
    let (next, _) = CoordinatorReducer::reduce(state.clone(), pop_from(42));
    assert_eq!(next, state);
}

#[test]
fn stack_does_not_touch_root_list() {
    let state = reduce_all::<CoordinatorReducer>(vec![
        push(0),
        CoordinatorIntent::BookList(BookListViewIntent::TapUrl { url: "root".into() }.into()),
    ]);
    assert_eq!(state.book_list.url, "root");

    let Some(PathState::BookList(pushed)) = state.path.get(StackElementId(0)) else {
        panic!("pushed screen missing");
    };
    assert_eq!(pushed.url, "");
}

#[test]
fn element_effects_are_tagged_with_id() {
    let state = reduce_all::<CoordinatorReducer>(vec![push(0), push(7)]);
    let (state, effects) = CoordinatorReducer::reduce(
        state,
        CoordinatorIntent::Path(StackIntent::Element {
            id: StackElementId(7),
            intent: PathIntent::BookList(BookListAsyncIntent::FetchBook.into()),
        }),
    );

    assert_eq!(
        effects.as_slice(),
        &[CoordinatorEffect::Path {
            id: StackElementId(7),
            effect: PathEffect::BookList(BookListEffect::FetchBooks),
        }]
    );
    assert_eq!(
        state.path.get(StackElementId(7)),
        Some(&PathState::BookList(bookseries::ui::book_list::BookListState {
            is_loading: true,
            ..Default::default()
        }))
    );
    assert!(!state.book_list.is_loading);
}

#[test]
fn on_appear_holds_no_fetch_state() {
    let (state, effects) =
        CoordinatorReducer::reduce(CoordinatorState::default(), CoordinatorIntent::OnAppear);
    assert!(!state.book_list.is_loading);
    assert_eq!(effects.len(), 1);
}

#[test]
fn push_after_max_id_takes_smallest_free_id() {
    let state = reduce_all::<CoordinatorReducer>(vec![push(0), push(u64::MAX)]);
    let next = bookseries::ui::coordinator::push_book_list(&state);
    let (state, _) = CoordinatorReducer::reduce(state, next);

    let ids: Vec<StackElementId> = state.path.iter().map(|(id, _)| id).collect();
    assert_eq!(
        ids,
        vec![StackElementId(0), StackElementId(u64::MAX), StackElementId(1)]
    );
}
