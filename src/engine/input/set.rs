// Per-source input records and the per-frame input set

use super::bits::{InputBit, InputSource};
use glam::Vec2;

/// "As of this source, these bits are asserted right now."
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input {
    pub source: InputSource,
    pub bits: InputBit,
    /// Pointer position in window coordinates, for pointer sources
    pub pointer: Option<Vec2>,
}

impl Input {
    /// Create an input without payload
    pub fn new(source: InputSource, bits: InputBit) -> Self {
        Self {
            source,
            bits,
            pointer: None,
        }
    }

    /// Create an input carrying a pointer position
    pub fn with_pointer(source: InputSource, bits: InputBit, pointer: Vec2) -> Self {
        Self {
            source,
            bits,
            pointer: Some(pointer),
        }
    }
}

/// The most recent input of every source within one frame
///
/// Stored as a fixed array indexed by source, so coalescing is O(1) and
/// iteration order is always the source order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSet {
    slots: [Option<Input>; InputSource::COUNT],
}

impl InputSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an input, replacing any earlier input from the same source
    pub fn insert(&mut self, input: Input) {
        self.slots[input.source.index()] = Some(input);
    }

    /// Get the input recorded for a source
    pub fn get(&self, source: InputSource) -> Option<&Input> {
        self.slots[source.index()].as_ref()
    }

    /// Iterate over recorded inputs in source order
    pub fn iter(&self) -> impl Iterator<Item = &Input> {
        self.slots.iter().flatten()
    }

    /// Number of sources that recorded something
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check if no source recorded anything
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Coalesced bitmask: the OR of every recorded input's bits
    pub fn bits(&self) -> InputBit {
        self.iter()
            .fold(InputBit::empty(), |acc, input| acc | input.bits)
    }

    /// Remove everything
    pub fn clear(&mut self) {
        self.slots = [None; InputSource::COUNT];
    }
}
