// Input manager - routes hardware events to players and drives their recorders

use super::binding::Binding;
use super::bits::{InputBit, InputSource};
use super::config::InputConfigManager;
use super::player::PlayerInput;
use gilrs::EventType;
use glam::Vec2;
use std::collections::HashMap;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Main input manager that coordinates all input for all players
pub struct InputManager {
    /// Configuration manager for all players
    config: InputConfigManager,

    /// Input state for each player
    players: Vec<PlayerInput>,

    /// Which player each connected gamepad drives, keyed by gilrs pad index
    gamepads: HashMap<usize, usize>,
}

impl InputManager {
    /// Create a new input manager with default bindings
    pub fn new(max_players: usize) -> Self {
        Self::with_config(InputConfigManager::new(max_players))
    }

    /// Create an input manager from an existing configuration
    pub fn with_config(config: InputConfigManager) -> Self {
        let recorder = config.recorder_config();
        let players = (0..config.num_players())
            .map(|player_id| PlayerInput::new(player_id, recorder))
            .collect();

        Self {
            config,
            players,
            gamepads: HashMap::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            // Key repeats carry no new information for a level-held key
            if event.repeat && event.state == ElementState::Pressed {
                return;
            }
            self.process_binding(Binding::key(key_code), event.state.is_pressed());
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(&mut self, state: ElementState, button: MouseButton) {
        self.process_binding(Binding::mouse(button), state.is_pressed());
    }

    /// Process a cursor move from winit
    /// Only players with pointer bindings track the cursor
    pub fn process_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        let position = Vec2::new(position.x as f32, position.y as f32);
        for player in &mut self.players {
            let uses_pointer = self
                .config
                .get_config(player.player_id())
                .is_some_and(|config| config.uses_source(InputSource::PointerPick));
            if uses_pointer {
                player.move_cursor(position);
            }
        }
    }

    /// Process a gilrs gamepad event
    pub fn process_gamepad_event(&mut self, event: &gilrs::Event) {
        let pad = usize::from(event.id);
        if matches!(event.event, EventType::Disconnected) {
            self.disconnect_gamepad(pad);
            return;
        }

        let Some(player_id) = self.assign_gamepad(pad) else {
            return;
        };

        match event.event {
            EventType::ButtonPressed(button, _) => {
                self.apply_binding(player_id, Binding::button(button), true);
            }
            EventType::ButtonReleased(button, _) => {
                self.apply_binding(player_id, Binding::button(button), false);
            }
            EventType::AxisChanged(axis, value, _) => {
                if let Some(player) = self.players.get_mut(player_id) {
                    player.set_axis(axis, value);
                }
            }
            _ => {}
        }
    }

    /// Press or release a control for every player that binds it
    pub fn process_binding(&mut self, binding: Binding, pressed: bool) {
        for player_id in 0..self.players.len() {
            self.apply_binding(player_id, binding, pressed);
        }
    }

    /// Press or release a control for one player, if bound
    pub(crate) fn apply_binding(&mut self, player_id: usize, binding: Binding, pressed: bool) {
        if let Some(player) = self.players.get_mut(player_id) {
            if pressed {
                if let Some(bit) = self.config.get_bit(player_id, binding) {
                    player.press(binding, bit);
                }
            } else {
                player.release(binding);
            }
        }
    }

    /// Player driven by a gamepad, assigning the lowest free player on first use
    /// Returns `None` when every player already has a gamepad
    pub(crate) fn assign_gamepad(&mut self, pad: usize) -> Option<usize> {
        if let Some(&player_id) = self.gamepads.get(&pad) {
            return Some(player_id);
        }

        let player_id = (0..self.players.len())
            .find(|candidate| !self.gamepads.values().any(|taken| taken == candidate))?;
        self.gamepads.insert(pad, player_id);
        log::info!("Gamepad {} assigned to player {}", pad, player_id);
        Some(player_id)
    }

    /// Free a gamepad's player slot and release everything the pad was holding
    pub(crate) fn disconnect_gamepad(&mut self, pad: usize) -> Option<usize> {
        let player_id = self.gamepads.remove(&pad)?;
        log::info!("Gamepad {} disconnected from player {}", pad, player_id);
        if let Some(player) = self.players.get_mut(player_id) {
            player.release_source(InputSource::Gamepad);
        }
        Some(player_id)
    }

    /// Advance every player's recorder by one frame
    /// Call this once per frame after processing all events
    pub fn update(&mut self, elapsed_ms: f64) {
        for player in &mut self.players {
            let threshold = self.config.axis_threshold(player.player_id());
            player.update(elapsed_ms, threshold);
        }
    }

    /// Get input state for a specific player
    pub fn player(&self, player_id: usize) -> Option<&PlayerInput> {
        self.players.get(player_id)
    }

    /// Get mutable input state for a specific player
    pub fn player_mut(&mut self, player_id: usize) -> Option<&mut PlayerInput> {
        self.players.get_mut(player_id)
    }

    /// Iterate over all players
    pub fn players(&self) -> impl Iterator<Item = &PlayerInput> {
        self.players.iter()
    }

    /// Get the configuration manager
    pub fn config(&self) -> &InputConfigManager {
        &self.config
    }

    /// Get mutable configuration manager
    pub fn config_mut(&mut self) -> &mut InputConfigManager {
        &mut self.config
    }

    /// Check if any player completed a combo this frame
    pub fn any_player_triggered(&self, combo: &[InputBit]) -> bool {
        self.players.iter().any(|p| p.triggered(combo))
    }

    /// Check if any player is holding a bit
    pub fn any_player_held(&self, bit: InputBit) -> bool {
        self.players.iter().any(|p| p.is_held(bit))
    }

    /// Get a list of all players who completed a combo this frame
    pub fn get_players_who_triggered(&self, combo: &[InputBit]) -> Vec<usize> {
        self.players
            .iter()
            .filter(|p| p.triggered(combo))
            .map(|p| p.player_id())
            .collect()
    }

    /// Release every held control for all players (e.g. on focus loss)
    /// Combos in progress are kept and expire on their own
    pub fn reset_all(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
    }

    /// Get the number of players
    pub fn num_players(&self) -> usize {
        self.players.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(4)
    }
}
