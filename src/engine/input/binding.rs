// Hardware controls and their default action bits

use super::bits::{InputBit, InputSource};
use gilrs::Button;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// A physical control that can be bound to an input bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    Key(KeyCode),
    Mouse(MouseButton),
    Button(Button),
}

impl Binding {
    /// Create a keyboard binding
    pub fn key(code: KeyCode) -> Self {
        Self::Key(code)
    }

    /// Create a mouse button binding
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }

    /// Create a gamepad button binding
    pub fn button(button: Button) -> Self {
        Self::Button(button)
    }

    /// The source this control reports through
    pub fn source(&self) -> InputSource {
        match self {
            Binding::Key(_) => InputSource::Keyboard,
            Binding::Mouse(_) => InputSource::PointerPick,
            Binding::Button(_) => InputSource::Gamepad,
        }
    }
}

/// Default gamepad bindings, shared by every player
pub fn default_gamepad_bindings() -> Vec<(Binding, InputBit)> {
    vec![
        (Binding::button(Button::DPadLeft), InputBit::LEFT),
        (Binding::button(Button::DPadRight), InputBit::RIGHT),
        (Binding::button(Button::DPadUp), InputBit::UP),
        (Binding::button(Button::DPadDown), InputBit::DOWN),
        (Binding::button(Button::South), InputBit::ACTION),
        (Binding::button(Button::East), InputBit::PICK),
    ]
}

/// Default keyboard/mouse bindings for Player 1, plus the gamepad defaults
pub fn default_p1_bindings() -> Vec<(Binding, InputBit)> {
    let mut bindings = vec![
        // Directions (arrows and WASD)
        (Binding::key(KeyCode::ArrowLeft), InputBit::LEFT),
        (Binding::key(KeyCode::ArrowRight), InputBit::RIGHT),
        (Binding::key(KeyCode::ArrowUp), InputBit::UP),
        (Binding::key(KeyCode::ArrowDown), InputBit::DOWN),
        (Binding::key(KeyCode::KeyA), InputBit::LEFT),
        (Binding::key(KeyCode::KeyD), InputBit::RIGHT),
        (Binding::key(KeyCode::KeyW), InputBit::UP),
        (Binding::key(KeyCode::KeyS), InputBit::DOWN),
        // Action
        (Binding::key(KeyCode::Space), InputBit::ACTION),
        (Binding::key(KeyCode::KeyJ), InputBit::ACTION),
        // Pointer
        (Binding::mouse(MouseButton::Left), InputBit::PICK),
    ];
    bindings.extend(default_gamepad_bindings());
    bindings
}

/// Global bindings (not player-specific)
pub fn global_bindings() -> Vec<(Binding, InputBit)> {
    vec![
        (Binding::key(KeyCode::Escape), InputBit::MENU),
        (Binding::button(Button::Start), InputBit::MENU),
    ]
}
