//! Bounded undo history.

use std::{collections::VecDeque, num::NonZero};

/// A bounded stack of snapshots supporting undo.
///
/// Pushing beyond capacity discards the *oldest* entry (FIFO eviction), so
/// the newest snapshots are always retained. Undo pops the newest entry;
/// there is no redo.
///
/// The element type is whatever the caller snapshots; the stack never
/// aliases live state (entries are moved in and moved out).
///
/// # Examples
///
/// ```
/// use cagelace_game::History;
///
/// let mut history: History<i32> = History::new();
/// history.push(1);
/// history.push(2);
/// assert_eq!(history.undo(), Some(2));
/// assert_eq!(history.undo(), Some(1));
/// assert_eq!(history.undo(), None);
/// ```
#[derive(Debug, Clone)]
pub struct History<T> {
    stack: VecDeque<T>,
    capacity: NonZero<usize>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> History<T> {
    /// Default number of retained snapshots.
    pub const DEFAULT_CAPACITY: NonZero<usize> = NonZero::new(100).unwrap();

    /// Creates an empty history with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty history retaining at most `capacity` snapshots.
    #[must_use]
    pub fn with_capacity(capacity: NonZero<usize>) -> Self {
        Self {
            stack: VecDeque::new(),
            capacity,
        }
    }

    /// Returns the maximum number of retained snapshots.
    #[must_use]
    pub const fn capacity(&self) -> NonZero<usize> {
        self.capacity
    }

    /// Returns the number of snapshots currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Returns `true` if an undo would succeed.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Pushes a snapshot, evicting the oldest when at capacity.
    pub fn push(&mut self, snapshot: T) {
        if self.stack.len() == self.capacity.get() {
            log::debug!("history at capacity {}, evicting oldest", self.capacity);
            self.stack.pop_front();
        }
        self.stack.push_back(snapshot);
    }

    /// Pops and returns the most recent snapshot, or `None` when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> Option<T> {
        self.stack.pop_back()
    }

    /// Discards all snapshots.
    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_is_lifo() {
        let mut history = History::new();
        history.push(1);
        history.push(2);
        history.push(3);

        assert_eq!(history.undo(), Some(3));
        assert_eq!(history.undo(), Some(2));
        assert_eq!(history.undo(), Some(1));
        assert_eq!(history.undo(), None);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_eviction_is_fifo() {
        let mut history = History::with_capacity(NonZero::new(3).unwrap());
        for i in 1..=5 {
            history.push(i);
        }
        assert_eq!(history.len(), 3);

        // The two oldest entries (1, 2) were discarded
        assert_eq!(history.undo(), Some(5));
        assert_eq!(history.undo(), Some(4));
        assert_eq!(history.undo(), Some(3));
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn test_default_capacity() {
        let mut history = History::new();
        assert_eq!(history.capacity().get(), 100);

        for i in 0..150 {
            history.push(i);
        }
        assert_eq!(history.len(), 100);

        // Undoing all the way down lands on snapshot 50, not the first one
        let mut last = None;
        while let Some(snapshot) = history.undo() {
            last = Some(snapshot);
        }
        assert_eq!(last, Some(50));
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.push("a");
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.undo(), None);
    }
}
