//! Bounded last-in-first-out store of colony snapshots backing undo.

use std::collections::VecDeque;

use colony_life_core::HistoryError;

/// Number of snapshots retained when no explicit capacity is given.
pub const DEFAULT_CAPACITY: usize = 10;

/// Capacity-limited stack of owned snapshots, most recently pushed first.
///
/// Pushing moves a snapshot into the stack; popping moves the most recent
/// snapshot back out to the caller. When a push would exceed the capacity the
/// least recently pushed entry is dropped by the stack itself and can never
/// be reached by a later pop.
#[derive(Clone, Debug)]
pub struct GridStack<T> {
    capacity: usize,
    entries: VecDeque<T>,
}

impl<T> GridStack<T> {
    /// Creates an empty stack with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty stack retaining at most `capacity` snapshots.
    ///
    /// A capacity of zero is treated as one so a push always retains the
    /// snapshot it was given.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: VecDeque::new(),
        }
    }

    /// Inserts `snapshot` as the new most recent entry, evicting the oldest
    /// retained entry if the stack would otherwise exceed its capacity.
    pub fn push(&mut self, snapshot: T) {
        self.entries.push_front(snapshot);
        if self.entries.len() > self.capacity {
            let _ = self.entries.pop_back();
        }
    }

    /// Removes and returns the most recently pushed entry.
    pub fn pop(&mut self) -> Result<T, HistoryError> {
        self.entries.pop_front().ok_or(HistoryError::Empty)
    }

    /// Number of snapshots currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the stack holds zero snapshots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every retained snapshot.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for GridStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
