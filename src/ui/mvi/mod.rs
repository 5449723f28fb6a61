//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │
//!    │          └──→ Effects ──→ Store (async tasks)
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Effects**: Descriptions of async work whose results come back as intents

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::Effects;
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
