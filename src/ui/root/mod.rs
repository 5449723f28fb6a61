//! Top-level application flow.
//!
//! The root state is a sum type so further flows can be added as variants.

mod reducer;

pub use reducer::{AppEffect, AppIntent, AppReducer, AppState, AppViewIntent};
