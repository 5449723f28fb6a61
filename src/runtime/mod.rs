//! Effect runner.
//!
//! ```text
//! send(intent) ──→ Reducer ──→ new state
//!                     │
//!                     └──→ Effects ──spawn──→ tasks ──IntentSender──┐
//!                                                                   │
//!  next() ←──────────────── intent channel ←────────────────────────┘
//! ```

mod environment;
mod sender;
mod store;

use std::future::Future;
use std::pin::Pin;

pub use environment::Environment;
pub use sender::IntentSender;
pub use store::Store;

/// Boxed future returned by [`Effect::run`].
pub type EffectFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Interpreter for an effect description.
///
/// Implementations perform the I/O the description names and report results
/// through `send`; they never see state.
pub trait Effect: Send + 'static {
    type Intent: Send + 'static;

    fn run(self, env: Environment, send: IntentSender<Self::Intent>) -> EffectFuture;
}
