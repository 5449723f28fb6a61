//! Domain values shared by the repositories and the state machines.

mod book;
mod display;
mod summary_key;
pub mod text;

pub use book::Book;
pub use display::BookDisplayData;
pub use summary_key::{SummaryKey, SUMMARY_KEY_PREFIX};
