// Per-player input state: hardware level state feeding one combo recorder

use super::binding::Binding;
use super::bits::{InputBit, InputSource};
use super::config::RecorderConfig;
use super::recorder::Recorder;
use super::set::Input;
use gilrs::Axis;
use glam::Vec2;
use std::collections::HashMap;

/// Represents the input state for a single player
///
/// Tracks which bound controls are held on every channel and, once per
/// frame, turns that into at most one [`Input`] per source for the recorder.
///
/// Keyboard, pointer pick and gamepad are level-triggered: a held control
/// asserts its bit on every frame. Pointer point is edge-triggered: `POINT`
/// is only asserted on frames where the cursor moved. Dragging with the pick
/// button held therefore alternates between `PICK | POINT` and `PICK`, and
/// each alternation is a new combo frame.
#[derive(Debug)]
pub struct PlayerInput {
    /// Player ID (0-3 for up to 4 players)
    player_id: usize,

    /// Bound controls currently held, with the bit each one asserts
    held: HashMap<Binding, InputBit>,

    /// Left stick deflection, y up
    stick: Vec2,

    /// Last known cursor position in window coordinates
    cursor: Option<Vec2>,

    /// Whether the cursor moved since the last update
    cursor_moved: bool,

    /// Combo recognition over the coalesced per-frame bits
    recorder: Recorder,
}

impl PlayerInput {
    /// Create a new player input state
    pub fn new(player_id: usize, config: RecorderConfig) -> Self {
        Self {
            player_id,
            held: HashMap::new(),
            stick: Vec2::ZERO,
            cursor: None,
            cursor_moved: false,
            recorder: Recorder::with_config(config),
        }
    }

    /// Get the player ID
    pub fn player_id(&self) -> usize {
        self.player_id
    }

    /// The combo recorder driven by this player's input
    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }

    /// Check if a bit was part of the latest frame's coalesced input
    pub fn is_held(&self, bit: InputBit) -> bool {
        self.recorder.current_bits().contains(bit)
    }

    /// Check if a combo (exact bitmask per step) completed on the latest update
    pub fn triggered(&self, combo: &[InputBit]) -> bool {
        self.recorder.triggered(combo)
    }

    /// Last known cursor position, if the cursor entered the window
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Record an input from an external adapter (e.g. a touch joystick)
    /// for the current frame
    pub fn record(&mut self, input: Input) {
        self.recorder.record(input);
    }

    /// Register a control press
    pub(crate) fn press(&mut self, binding: Binding, bit: InputBit) {
        self.held.insert(binding, bit);
    }

    /// Register a control release
    pub(crate) fn release(&mut self, binding: Binding) {
        self.held.remove(&binding);
    }

    /// Release every control of one source (e.g. on gamepad disconnect)
    pub(crate) fn release_source(&mut self, source: InputSource) {
        self.held.retain(|binding, _| binding.source() != source);
        if source == InputSource::Gamepad {
            self.stick = Vec2::ZERO;
        }
    }

    /// Register an analog axis change; only the left stick is used
    pub(crate) fn set_axis(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::LeftStickX => self.stick.x = value,
            Axis::LeftStickY => self.stick.y = value,
            _ => {}
        }
    }

    /// Register a cursor move
    pub(crate) fn move_cursor(&mut self, position: Vec2) {
        self.cursor = Some(position);
        self.cursor_moved = true;
    }

    /// Bits asserted by held controls of one source
    pub fn source_bits(&self, source: InputSource) -> InputBit {
        self.held
            .iter()
            .filter(|(binding, _)| binding.source() == source)
            .fold(InputBit::empty(), |acc, (_, bit)| acc | *bit)
    }

    /// Direction bits from the left stick
    pub fn stick_bits(&self, threshold: f32) -> InputBit {
        let mut bits = InputBit::empty();
        if self.stick.x <= -threshold {
            bits |= InputBit::LEFT;
        }
        if self.stick.x >= threshold {
            bits |= InputBit::RIGHT;
        }
        if self.stick.y >= threshold {
            bits |= InputBit::UP;
        }
        if self.stick.y <= -threshold {
            bits |= InputBit::DOWN;
        }
        bits
    }

    /// Feed this frame's per-source inputs to the recorder and advance it
    /// Call this once per frame after processing all events
    pub(crate) fn update(&mut self, elapsed_ms: f64, axis_threshold: f32) {
        let keyboard = self.source_bits(InputSource::Keyboard);
        if !keyboard.is_empty() {
            self.recorder
                .record(Input::new(InputSource::Keyboard, keyboard));
        }

        let pick = self.source_bits(InputSource::PointerPick);
        if !pick.is_empty() {
            let input = match self.cursor {
                Some(position) => Input::with_pointer(InputSource::PointerPick, pick, position),
                None => Input::new(InputSource::PointerPick, pick),
            };
            self.recorder.record(input);
        }

        if self.cursor_moved {
            if let Some(position) = self.cursor {
                self.recorder.record(Input::with_pointer(
                    InputSource::PointerPoint,
                    InputBit::POINT,
                    position,
                ));
            }
            self.cursor_moved = false;
        }

        let gamepad = self.source_bits(InputSource::Gamepad) | self.stick_bits(axis_threshold);
        if !gamepad.is_empty() {
            self.recorder.record(Input::new(InputSource::Gamepad, gamepad));
        }

        self.recorder.update(elapsed_ms);
    }

    /// Release every held control and center the stick
    ///
    /// The recorder is left alone: the next update sees no input and its
    /// usual hold or expiry rule applies.
    pub fn reset(&mut self) {
        self.held.clear();
        self.stick = Vec2::ZERO;
        self.cursor_moved = false;
    }

    /// Get all bits currently held across sources, before the next update
    pub fn get_held_bits(&self, axis_threshold: f32) -> InputBit {
        self.held
            .values()
            .fold(self.stick_bits(axis_threshold), |acc, bit| acc | *bit)
    }

    /// Get directional input from the latest frame as a vector (-1.0 to 1.0)
    pub fn get_direction(&self) -> Vec2 {
        let bits = self.recorder.current_bits();
        let mut direction = Vec2::ZERO;

        if bits.contains(InputBit::LEFT) {
            direction.x -= 1.0;
        }
        if bits.contains(InputBit::RIGHT) {
            direction.x += 1.0;
        }
        if bits.contains(InputBit::DOWN) {
            direction.y -= 1.0;
        }
        if bits.contains(InputBit::UP) {
            direction.y += 1.0;
        }

        direction
    }
}
