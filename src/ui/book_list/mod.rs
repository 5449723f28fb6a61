//! Book list feature module.
//!
//! Shows one book of the series at a time, lets the user page through the
//! series, and remembers per book whether its summary is expanded.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Screen state and derived display data
//! - `intent.rs` - View, async and effect-result intents
//! - `reducer.rs` - State transitions
//! - `effect.rs` - Repository and persistence work

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::BookListEffect;
pub use intent::{
    BookListAsyncIntent, BookListError, BookListInnerIntent, BookListIntent, BookListViewIntent,
};
pub use reducer::BookListReducer;
pub use state::BookListState;
