//! Book series coordinator.
//!
//! Owns the root book list and a navigation stack of pushed screens. Intents
//! for the root are delegated to [`BookListReducer`](crate::ui::book_list::BookListReducer);
//! intents for a pushed screen travel as `StackIntent::Element` and their
//! effect results are routed back to the same element id.

mod effect;
mod intent;
mod reducer;
mod stack;
mod state;

pub use effect::{CoordinatorEffect, PathEffect};
pub use intent::{CoordinatorIntent, PathIntent};
pub use reducer::{push_book_list, CoordinatorReducer, PathReducer};
pub use stack::{StackElementId, StackIntent, StackState};
pub use state::{CoordinatorState, PathState};
