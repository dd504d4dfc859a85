// Combo history: the ordered, bounded list of combo frames

use super::bits::InputBit;
use super::set::InputSet;
use std::collections::VecDeque;

/// Default number of combo frames kept before the oldest is dropped
pub const DEFAULT_HISTORY_CAPACITY: usize = 32;

/// Ordered sequence (oldest to newest) of nonzero input sets
///
/// Only the recorder mutates it. No stored entry ever has an empty
/// coalesced bitmask.
#[derive(Debug, Clone)]
pub struct ComboHistory {
    entries: VecDeque<InputSet>,
    capacity: usize,
}

impl ComboHistory {
    /// Create an empty history bounded to `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of combo frames
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the history is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of combo frames kept
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get a combo frame, oldest first
    pub fn get(&self, index: usize) -> Option<&InputSet> {
        self.entries.get(index)
    }

    /// The newest combo frame
    pub fn last(&self) -> Option<&InputSet> {
        self.entries.back()
    }

    /// Iterate over combo frames, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &InputSet> {
        self.entries.iter()
    }

    /// Coalesced bitmask of each combo frame, oldest first
    pub fn bits(&self) -> impl Iterator<Item = InputBit> + '_ {
        self.entries.iter().map(InputSet::bits)
    }

    /// Check the trailing `query.len()` frames against `query` position by position
    ///
    /// An empty query, or one longer than the history, never matches.
    pub fn matches_tail<F>(&self, query: &[InputBit], matches: F) -> bool
    where
        F: Fn(InputBit, InputBit) -> bool,
    {
        if query.is_empty() || query.len() > self.entries.len() {
            return false;
        }

        let offset = self.entries.len() - query.len();
        self.entries
            .iter()
            .skip(offset)
            .zip(query)
            .all(|(entry, &wanted)| matches(entry.bits(), wanted))
    }

    /// Append a combo frame, dropping the oldest one when full
    pub(crate) fn push(&mut self, set: InputSet) {
        debug_assert!(!set.bits().is_empty());

        self.entries.push_back(set);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Replace the newest combo frame, or append if there is none
    pub(crate) fn replace_last(&mut self, set: InputSet) {
        match self.entries.back_mut() {
            Some(last) => *last = set,
            None => self.push(set),
        }
    }

    /// Drop every combo frame
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ComboHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
