//! Effect lists returned by reducers.

/// Ordered list of effect descriptions produced by one reduce call.
///
/// Effects are plain data so reducers stay testable without a runtime.
/// The store spawns each entry as an independent task; list order is the
/// spawn order, not a completion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Effects<E>(Vec<E>);

impl<E> Effects<E> {
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn one(effect: E) -> Self {
        Self(vec![effect])
    }

    pub fn batch(effects: impl IntoIterator<Item = E>) -> Self {
        Self(effects.into_iter().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.0
    }

    /// Wrap every effect, e.g. to tag a child's effects for its parent.
    pub fn map<F, T>(self, f: F) -> Effects<T>
    where
        F: FnMut(E) -> T,
    {
        Effects(self.0.into_iter().map(f).collect())
    }
}

impl<E> Default for Effects<E> {
    fn default() -> Self {
        Self::none()
    }
}

impl<E> IntoIterator for Effects<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
