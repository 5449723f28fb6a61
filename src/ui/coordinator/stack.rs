//! Navigation stack keyed by element id.

use std::fmt;

/// Identity of one pushed screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StackElementId(pub u64);

impl fmt::Display for StackElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered stack of screen states, bottom first.
///
/// Ids are unique within one stack.
#[derive(Debug, Clone, PartialEq)]
pub struct StackState<S> {
    elements: Vec<(StackElementId, S)>,
}

impl<S> Default for StackState<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StackState<S> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, id: StackElementId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: StackElementId) -> Option<&S> {
        self.elements
            .iter()
            .find(|(element_id, _)| *element_id == id)
            .map(|(_, state)| state)
    }

    pub fn get_mut(&mut self, id: StackElementId) -> Option<&mut S> {
        self.elements
            .iter_mut()
            .find(|(element_id, _)| *element_id == id)
            .map(|(_, state)| state)
    }

    /// Ids in push order.
    pub fn ids(&self) -> Vec<StackElementId> {
        self.elements.iter().map(|(id, _)| *id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StackElementId, &S)> {
        self.elements.iter().map(|(id, state)| (*id, state))
    }

    /// Push on top. Returns `false` and leaves the stack untouched when `id`
    /// is already present.
    pub fn push(&mut self, id: StackElementId, state: S) -> bool {
        if self.contains(id) {
            return false;
        }
        self.elements.push((id, state));
        true
    }

    /// Remove `id` and everything above it. Returns `false` for unknown ids.
    pub fn pop_from(&mut self, id: StackElementId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.elements.truncate(index);
                true
            }
            None => false,
        }
    }

    /// Smallest id greater than every id currently on the stack.
    ///
    /// Once `u64::MAX` is taken, falls back to the smallest free id.
    pub fn next_id(&self) -> StackElementId {
        let Some(max) = self.elements.iter().map(|(id, _)| id.0).max() else {
            return StackElementId(0);
        };
        match max.checked_add(1) {
            Some(next) => StackElementId(next),
            None => (0..)
                .map(StackElementId)
                .find(|id| !self.contains(*id))
                .unwrap_or(StackElementId(0)),
        }
    }

    fn position(&self, id: StackElementId) -> Option<usize> {
        self.elements
            .iter()
            .position(|(element_id, _)| *element_id == id)
    }
}

/// Stack operations, generic over element state `S` and element intent `I`.
#[derive(Debug, Clone, PartialEq)]
pub enum StackIntent<S, I> {
    Push { id: StackElementId, state: S },
    PopFrom { id: StackElementId },
    /// Deliver `intent` to the element at `id`.
    Element { id: StackElementId, intent: I },
}
