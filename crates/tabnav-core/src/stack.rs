//! Per-area navigation stack.
//!
//! The root screen of an area is implicit and never stored, so an empty stack means
//! "showing the root". Every operation is total: over-long pops clamp and missing
//! targets are no-ops. Mutations that change the stack return the [`StackEvent`] that
//! describes them; `None` means nothing changed.

use serde::{Deserialize, Serialize};

/// One change applied to a navigation stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StackEvent<R> {
    Pushed { route: R },
    Popped { count: usize },
    PoppedTo { route: R },
    PoppedToRoot,
}

impl<R> StackEvent<R> {
    pub fn op(&self) -> &'static str {
        match self {
            StackEvent::Pushed { .. } => "pushed",
            StackEvent::Popped { .. } => "popped",
            StackEvent::PoppedTo { .. } => "popped_to",
            StackEvent::PoppedToRoot => "popped_to_root",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavStack<R> {
    entries: Vec<R>,
}

impl<R> Default for NavStack<R> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<R: Clone + PartialEq> NavStack<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries from bottom (first pushed) to top.
    pub fn entries(&self) -> &[R] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top(&self) -> Option<&R> {
        self.entries.last()
    }

    pub fn push(&mut self, route: R) -> StackEvent<R> {
        self.entries.push(route.clone());
        StackEvent::Pushed { route }
    }

    /// Remove up to `count` entries from the top.
    pub fn pop(&mut self, count: usize) -> Option<StackEvent<R>> {
        let count = count.min(self.entries.len());
        if count == 0 {
            return None;
        }
        self.entries.truncate(self.entries.len() - count);
        Some(StackEvent::Popped { count })
    }

    /// Pop until the last occurrence of `route` is on top.
    pub fn pop_to(&mut self, route: &R) -> Option<StackEvent<R>> {
        let index = self.entries.iter().rposition(|entry| entry == route)?;
        if index + 1 == self.entries.len() {
            return None;
        }
        self.entries.truncate(index + 1);
        Some(StackEvent::PoppedTo {
            route: route.clone(),
        })
    }

    pub fn pop_to_root(&mut self) -> Option<StackEvent<R>> {
        if self.entries.is_empty() {
            return None;
        }
        self.entries.clear();
        Some(StackEvent::PoppedToRoot)
    }

    /// Empty the stack without reporting it. Returns how many entries were removed.
    pub(crate) fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }
}
