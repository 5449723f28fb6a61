//! Single-writer store that reduces intents and runs their effects.

use std::marker::PhantomData;

use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinSet};

use super::{Effect, Environment, IntentSender};
use crate::ui::mvi::Reducer;

enum Step<I> {
    Intent(I),
    Finished(Result<(), JoinError>),
}

/// Owns the state of reducer `R` and interprets its effects.
///
/// Exactly one intent is reduced at a time. Effects run as independent
/// tokio tasks and report back only through the intent channel, so their
/// completions may interleave but never race on state.
pub struct Store<R: Reducer> {
    state: R::State,
    env: Environment,
    tx: mpsc::UnboundedSender<R::Intent>,
    rx: mpsc::UnboundedReceiver<R::Intent>,
    tasks: JoinSet<()>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R> Store<R>
where
    R: Reducer,
    R::Effect: Effect<Intent = R::Intent>,
{
    pub fn new(state: R::State, env: Environment) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state,
            env,
            tx,
            rx,
            tasks: JoinSet::new(),
            _reducer: PhantomData,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    pub fn into_state(self) -> R::State {
        self.state
    }

    /// Handle for producers outside the store (views, timers, tests).
    pub fn sender(&self) -> IntentSender<R::Intent> {
        IntentSender::new(self.tx.clone())
    }

    /// Number of effect tasks still running.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Reduce `intent` now and spawn the effects it returns.
    ///
    /// Must be called from within a tokio runtime. Returns the number of
    /// effects spawned.
    pub fn send(&mut self, intent: R::Intent) -> usize {
        tracing::trace!(?intent, "Reducing intent");

        let state = std::mem::take(&mut self.state);
        let (state, effects) = R::reduce(state, intent);
        self.state = state;

        let spawned = effects.len();
        for effect in effects {
            tracing::trace!(?effect, "Spawning effect");
            self.tasks.spawn(effect.run(self.env.clone(), self.sender()));
        }
        spawned
    }

    /// Process one queued intent or one finished effect.
    ///
    /// Returns `false` when nothing is queued and no effect is in flight.
    pub async fn next(&mut self) -> bool {
        if let Ok(intent) = self.rx.try_recv() {
            self.send(intent);
            return true;
        }
        if self.tasks.is_empty() {
            return false;
        }

        let step = tokio::select! {
            biased;
            Some(intent) = self.rx.recv() => Step::Intent(intent),
            Some(result) = self.tasks.join_next() => Step::Finished(result),
        };

        match step {
            Step::Intent(intent) => {
                self.send(intent);
            }
            Step::Finished(Err(err)) => {
                tracing::warn!(error = %err, "Effect task failed");
            }
            Step::Finished(Ok(())) => {}
        }
        true
    }

    /// Drive the store until every effect (and the intents they sent) is done.
    pub async fn run_until_idle(&mut self) {
        while self.next().await {}
    }
}

impl<R> std::fmt::Debug for Store<R>
where
    R: Reducer,
    R::State: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("in_flight", &self.tasks.len())
            .finish()
    }
}
