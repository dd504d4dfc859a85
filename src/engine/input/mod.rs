// Input handling system
//
// This module turns raw keyboard, mouse and gamepad input into one bitmask
// per frame and recognizes timed sequences of those bitmasks (combos).
//
// ## Architecture
//
// - `bits`: Logical action bits and input source tags
// - `set`: Per-source input records and the per-frame input set
// - `history`: Bounded list of combo frames
// - `recorder`: Per-frame coalescing and combo timing
// - `binding`: Physical controls and default bindings
// - `config`: Recorder timing and per-player remapping
// - `player`: Per-player hardware state feeding one recorder
// - `manager`: Routes winit/gilrs events to players
// - `combo`: Named combos checked every frame
//
// ## Usage Example
//
// ```rust
// use combo_input::engine::input::{InputBit, InputManager};
//
// let mut input_manager = InputManager::new(2);
//
// // In your event loop, process keyboard events
// input_manager.process_keyboard_event(&key_event);
//
// // Once per frame, after all events
// input_manager.update(elapsed_ms);
//
// if let Some(player) = input_manager.player(0) {
//     if player.triggered(&[InputBit::RIGHT, InputBit::RIGHT]) {
//         // Player 0 just double-tapped right
//     }
// }
// ```

pub mod binding;
pub mod bits;
pub mod combo;
pub mod config;
pub mod history;
pub mod manager;
pub mod player;
pub mod recorder;
pub mod set;

// Re-export commonly used types
pub use binding::Binding;
pub use bits::{InputBit, InputSource};
pub use combo::{default_combos, Combo, ComboBook, MatchMode};
pub use config::{InputConfig, InputConfigManager, RecorderConfig};
pub use history::ComboHistory;
pub use manager::InputManager;
pub use player::PlayerInput;
pub use recorder::Recorder;
pub use set::{Input, InputSet};

/// Input configuration and parsing errors
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Combo window must be a positive number of milliseconds, got {0}")]
    InvalidWindow(f64),

    #[error("Combo history must keep at least one frame")]
    InvalidHistoryCapacity,

    #[error("Axis threshold must be between 0 and 1, got {0}")]
    InvalidAxisThreshold(f32),

    #[error("Unknown input bit: {0:?}")]
    UnknownBit(String),

    #[error("Combo {0:?} needs at least one step and no empty steps")]
    EmptyCombo(String),
}
