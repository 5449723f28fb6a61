use std::sync::Arc;

use tokio::sync::mpsc;

/// Cloneable handle that feeds intents back into a store.
///
/// Effects receive one of these instead of touching state. Child effects get
/// a [`map`](IntentSender::map)ped sender so their intents arrive wrapped in
/// the parent's intent type.
pub struct IntentSender<I> {
    inner: Arc<dyn Fn(I) -> bool + Send + Sync>,
}

impl<I> Clone for IntentSender<I> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I: Send + 'static> IntentSender<I> {
    pub fn new(tx: mpsc::UnboundedSender<I>) -> Self {
        Self {
            inner: Arc::new(move |intent| tx.send(intent).is_ok()),
        }
    }

    /// Enqueue an intent. Returns `false` if the store is gone.
    pub fn send(&self, intent: I) -> bool {
        (self.inner)(intent)
    }

    /// Sender for a child intent type, wrapping each intent with `f`.
    pub fn map<J, F>(&self, f: F) -> IntentSender<J>
    where
        J: Send + 'static,
        F: Fn(J) -> I + Send + Sync + 'static,
    {
        let inner = Arc::clone(&self.inner);
        IntentSender {
            inner: Arc::new(move |intent| inner(f(intent))),
        }
    }
}

impl<I> std::fmt::Debug for IntentSender<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentSender").finish_non_exhaustive()
    }
}
