// Logical action bits and hardware provenance tags

use super::InputError;
use bitflags::bitflags;
use std::str::FromStr;

bitflags! {
    /// Logical actions asserted by a source during one frame.
    ///
    /// Every flag is a distinct power of two so that inputs from several
    /// sources can be merged with a plain bitwise OR.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InputBit: u16 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const UP = 1 << 2;
        const DOWN = 1 << 3;
        const ACTION = 1 << 4;
        const MENU = 1 << 5;
        const PICK = 1 << 6;
        const POINT = 1 << 7;
    }
}

/// Parses flag names joined by `|` or `+`, e.g. `"down+right"` or `"UP | ACTION"`
impl FromStr for InputBit {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = InputBit::empty();
        for name in s.split(['|', '+']) {
            let name = name.trim();
            let bit = InputBit::from_name(&name.to_ascii_uppercase())
                .ok_or_else(|| InputError::UnknownBit(name.to_string()))?;
            bits |= bit;
        }
        Ok(bits)
    }
}

/// Where an input came from
///
/// Dense and small so per-frame input sets can be plain arrays indexed by
/// [`InputSource::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum InputSource {
    Keyboard,
    PointerPick,
    PointerPoint,
    Gamepad,
    VirtualJoystick,
}

impl InputSource {
    /// Number of distinct sources
    pub const COUNT: usize = 5;

    /// All sources in index order
    pub const ALL: [InputSource; Self::COUNT] = [
        InputSource::Keyboard,
        InputSource::PointerPick,
        InputSource::PointerPoint,
        InputSource::Gamepad,
        InputSource::VirtualJoystick,
    ];

    /// Slot of this source inside an input set
    pub const fn index(self) -> usize {
        self as usize
    }
}
