// Input configuration: recorder timing and binding tables

use super::binding::{self, Binding};
use super::bits::{InputBit, InputSource};
use super::history::DEFAULT_HISTORY_CAPACITY;
use super::InputError;
use std::collections::HashMap;

/// Default combo window in milliseconds
pub const DEFAULT_MAX_INTERVAL_MS: f64 = 256.0;

/// Default stick deflection needed to assert a direction
pub const DEFAULT_AXIS_THRESHOLD: f32 = 0.5;

/// Timing and memory limits of a recorder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecorderConfig {
    /// Longest gap between combo-advancing inputs before the combo resets
    max_interval_ms: f64,

    /// Number of combo frames kept
    history_capacity: usize,
}

impl RecorderConfig {
    /// Create a validated configuration
    pub fn new(max_interval_ms: f64, history_capacity: usize) -> Result<Self, InputError> {
        if !max_interval_ms.is_finite() || max_interval_ms <= 0.0 {
            return Err(InputError::InvalidWindow(max_interval_ms));
        }
        if history_capacity == 0 {
            return Err(InputError::InvalidHistoryCapacity);
        }

        Ok(Self {
            max_interval_ms,
            history_capacity,
        })
    }

    /// Replace the combo window, keeping the capacity
    pub fn with_max_interval(self, max_interval_ms: f64) -> Result<Self, InputError> {
        Self::new(max_interval_ms, self.history_capacity)
    }

    /// Replace the capacity, keeping the combo window
    pub fn with_history_capacity(self, history_capacity: usize) -> Result<Self, InputError> {
        Self::new(self.max_interval_ms, history_capacity)
    }

    pub fn max_interval_ms(&self) -> f64 {
        self.max_interval_ms
    }

    pub fn history_capacity(&self) -> usize {
        self.history_capacity
    }
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            max_interval_ms: DEFAULT_MAX_INTERVAL_MS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

/// Input configuration for a single player
/// Maps physical controls to input bits
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Player ID this config is for
    player_id: usize,

    /// Mapping from controls to bits
    bindings: HashMap<Binding, InputBit>,

    /// Stick deflection (0..1) that asserts a direction bit
    axis_threshold: f32,
}

impl InputConfig {
    /// Create a new, empty input configuration
    pub fn new(player_id: usize) -> Self {
        Self {
            player_id,
            bindings: HashMap::new(),
            axis_threshold: DEFAULT_AXIS_THRESHOLD,
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(player_id: usize, bindings: Vec<(Binding, InputBit)>) -> Self {
        let mut config = Self::new(player_id);
        for (binding, bit) in bindings {
            config.bind(binding, bit);
        }
        config
    }

    /// Get the player ID
    pub fn player_id(&self) -> usize {
        self.player_id
    }

    /// Bind a control to a bit, replacing any previous bit for that control
    /// A control asserts exactly one bit; several controls may share a bit
    pub fn bind(&mut self, binding: Binding, bit: InputBit) {
        self.bindings.insert(binding, bit);
    }

    /// Unbind a control
    pub fn unbind_binding(&mut self, binding: Binding) {
        self.bindings.remove(&binding);
    }

    /// Get the bit bound to a control
    pub fn get_bit(&self, binding: Binding) -> Option<InputBit> {
        self.bindings.get(&binding).copied()
    }

    /// Check if a control is bound
    pub fn is_bound(&self, binding: Binding) -> bool {
        self.bindings.contains_key(&binding)
    }

    /// Check if any control of a source is bound
    pub fn uses_source(&self, source: InputSource) -> bool {
        self.bindings.keys().any(|binding| binding.source() == source)
    }

    pub fn axis_threshold(&self) -> f32 {
        self.axis_threshold
    }

    /// Set the stick deflection that asserts a direction
    pub fn set_axis_threshold(&mut self, threshold: f32) -> Result<(), InputError> {
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(InputError::InvalidAxisThreshold(threshold));
        }
        self.axis_threshold = threshold;
        Ok(())
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Reset to default bindings for this player
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        self.axis_threshold = DEFAULT_AXIS_THRESHOLD;
        let defaults = match self.player_id {
            0 => binding::default_p1_bindings(),
            _ => binding::default_gamepad_bindings(),
        };
        for (binding, bit) in defaults {
            self.bind(binding, bit);
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Manager for all player input configurations
#[derive(Debug)]
pub struct InputConfigManager {
    /// Configurations for each player
    configs: Vec<InputConfig>,

    /// Global bindings (not player-specific)
    global_config: InputConfig,

    /// Timing shared by every player's recorder
    recorder: RecorderConfig,
}

impl InputConfigManager {
    /// Create a new config manager with default configurations
    pub fn new(max_players: usize) -> Self {
        Self::with_recorder(max_players, RecorderConfig::default())
    }

    /// Create a config manager with custom recorder timing
    pub fn with_recorder(max_players: usize, recorder: RecorderConfig) -> Self {
        let configs = (0..max_players)
            .map(|player_id| {
                let mut config = InputConfig::new(player_id);
                config.reset_to_defaults();
                config
            })
            .collect();

        let global_config = InputConfig::from_bindings(usize::MAX, binding::global_bindings());

        Self {
            configs,
            global_config,
            recorder,
        }
    }

    /// Get a player's configuration
    pub fn get_config(&self, player_id: usize) -> Option<&InputConfig> {
        self.configs.get(player_id)
    }

    /// Get a mutable reference to a player's configuration
    pub fn get_config_mut(&mut self, player_id: usize) -> Option<&mut InputConfig> {
        self.configs.get_mut(player_id)
    }

    /// Get the global configuration
    pub fn global_config(&self) -> &InputConfig {
        &self.global_config
    }

    /// Get mutable reference to global configuration
    pub fn global_config_mut(&mut self) -> &mut InputConfig {
        &mut self.global_config
    }

    /// Number of players with a configuration
    pub fn num_players(&self) -> usize {
        self.configs.len()
    }

    /// Recorder timing for new players
    pub fn recorder_config(&self) -> RecorderConfig {
        self.recorder
    }

    /// Get the bit for a given control and player
    /// Checks player-specific bindings first, then global bindings
    pub fn get_bit(&self, player_id: usize, binding: Binding) -> Option<InputBit> {
        self.get_config(player_id)
            .and_then(|config| config.get_bit(binding))
            .or_else(|| self.global_config.get_bit(binding))
    }

    /// Stick threshold for a player, falling back to the default
    pub fn axis_threshold(&self, player_id: usize) -> f32 {
        self.get_config(player_id)
            .map(InputConfig::axis_threshold)
            .unwrap_or(DEFAULT_AXIS_THRESHOLD)
    }

    /// Reset all configurations to defaults
    pub fn reset_all_to_defaults(&mut self) {
        for config in &mut self.configs {
            config.reset_to_defaults();
        }
        log::debug!("Input bindings reset to defaults");
    }
}

impl Default for InputConfigManager {
    fn default() -> Self {
        Self::new(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gilrs::Button;
    use winit::event::MouseButton;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_recorder_config_defaults() {
        let config = RecorderConfig::default();
        assert_eq!(config.max_interval_ms(), 256.0);
        assert_eq!(config.history_capacity(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn test_recorder_config_rejects_bad_window() {
        assert!(matches!(
            RecorderConfig::new(0.0, 8),
            Err(InputError::InvalidWindow(_))
        ));
        assert!(RecorderConfig::new(-5.0, 8).is_err());
        assert!(RecorderConfig::new(f64::NAN, 8).is_err());
        assert!(RecorderConfig::new(f64::INFINITY, 8).is_err());
    }

    #[test]
    fn test_recorder_config_rejects_zero_capacity() {
        assert!(matches!(
            RecorderConfig::new(256.0, 0),
            Err(InputError::InvalidHistoryCapacity)
        ));
    }

    #[test]
    fn test_recorder_config_builders() {
        let config = RecorderConfig::default()
            .with_max_interval(100.0)
            .and_then(|c| c.with_history_capacity(4))
            .unwrap();
        assert_eq!(config.max_interval_ms(), 100.0);
        assert_eq!(config.history_capacity(), 4);
    }

    #[test]
    fn test_bind_bit() {
        let mut config = InputConfig::new(0);
        let binding = Binding::key(KeyCode::KeyA);
        config.bind(binding, InputBit::LEFT);

        assert_eq!(config.get_bit(binding), Some(InputBit::LEFT));
    }

    #[test]
    fn test_unbind_binding() {
        let mut config = InputConfig::new(0);
        let binding = Binding::key(KeyCode::KeyA);
        config.bind(binding, InputBit::LEFT);
        config.unbind_binding(binding);

        assert_eq!(config.get_bit(binding), None);
        assert!(!config.is_bound(binding));
    }

    #[test]
    fn test_controls_share_a_bit() {
        let mut config = InputConfig::new(0);
        let key = Binding::key(KeyCode::KeyA);
        let pad = Binding::button(Button::DPadLeft);

        config.bind(key, InputBit::LEFT);
        config.bind(pad, InputBit::LEFT);
        config.unbind_binding(key);

        assert_eq!(config.get_bit(key), None);
        assert_eq!(config.get_bit(pad), Some(InputBit::LEFT));
        assert!(!config.uses_source(InputSource::Keyboard));
        assert!(config.uses_source(InputSource::Gamepad));
    }

    #[test]
    fn test_rebind_binding() {
        let mut config = InputConfig::new(0);
        let binding = Binding::key(KeyCode::KeyA);

        config.bind(binding, InputBit::LEFT);
        config.bind(binding, InputBit::RIGHT);

        assert_eq!(config.get_bit(binding), Some(InputBit::RIGHT));
    }

    #[test]
    fn test_is_bound() {
        let mut config = InputConfig::new(0);
        let binding = Binding::mouse(MouseButton::Right);

        assert!(!config.is_bound(binding));
        config.bind(binding, InputBit::POINT);
        assert!(config.is_bound(binding));
    }

    #[test]
    fn test_axis_threshold_validation() {
        let mut config = InputConfig::new(0);
        assert_eq!(config.axis_threshold(), DEFAULT_AXIS_THRESHOLD);

        assert!(config.set_axis_threshold(0.3).is_ok());
        assert_eq!(config.axis_threshold(), 0.3);

        assert!(matches!(
            config.set_axis_threshold(1.5),
            Err(InputError::InvalidAxisThreshold(_))
        ));
        assert!(config.set_axis_threshold(0.0).is_err());
        assert!(config.set_axis_threshold(f32::NAN).is_err());
        assert_eq!(config.axis_threshold(), 0.3);
    }

    #[test]
    fn test_clear() {
        let mut config = InputConfig::new(0);
        config.bind(Binding::key(KeyCode::KeyA), InputBit::LEFT);
        config.clear();

        assert!(!config.is_bound(Binding::key(KeyCode::KeyA)));
        assert!(!config.uses_source(InputSource::Keyboard));
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut config = InputConfig::new(0);
        config.bind(Binding::key(KeyCode::KeyZ), InputBit::LEFT);
        config.reset_to_defaults();

        assert!(!config.is_bound(Binding::key(KeyCode::KeyZ)));
        assert_eq!(config.get_bit(Binding::key(KeyCode::KeyA)), Some(InputBit::LEFT));
        assert_eq!(
            config.get_bit(Binding::mouse(MouseButton::Left)),
            Some(InputBit::PICK)
        );
    }

    #[test]
    fn test_other_players_get_gamepad_defaults_only() {
        let mut config = InputConfig::new(1);
        config.reset_to_defaults();

        assert!(config.is_bound(Binding::button(Button::South)));
        assert!(!config.is_bound(Binding::key(KeyCode::KeyA)));
        assert!(config.uses_source(InputSource::Gamepad));
        assert!(!config.uses_source(InputSource::PointerPick));
    }

    #[test]
    fn test_config_manager_creation() {
        let manager = InputConfigManager::new(4);
        assert!(manager.get_config(0).is_some());
        assert!(manager.get_config(3).is_some());
        assert!(manager.get_config(4).is_none());
        assert_eq!(manager.num_players(), 4);
        assert_eq!(manager.recorder_config(), RecorderConfig::default());
    }

    #[test]
    fn test_config_manager_get_bit() {
        let manager = InputConfigManager::new(4);
        let binding = Binding::key(KeyCode::KeyA);

        assert_eq!(manager.get_bit(0, binding), Some(InputBit::LEFT));
        assert_eq!(manager.get_bit(1, binding), None);
    }

    #[test]
    fn test_config_manager_global_bindings() {
        let manager = InputConfigManager::new(4);
        let menu_key = Binding::key(KeyCode::Escape);

        assert_eq!(manager.get_bit(0, menu_key), Some(InputBit::MENU));
        assert_eq!(manager.get_bit(1, menu_key), Some(InputBit::MENU));
        assert_eq!(manager.get_bit(7, menu_key), Some(InputBit::MENU));
    }

    #[test]
    fn test_config_manager_reset_all() {
        let mut manager = InputConfigManager::new(4);

        if let Some(config) = manager.get_config_mut(0) {
            config.clear();
        }

        manager.reset_all_to_defaults();

        assert_eq!(
            manager.get_bit(0, Binding::key(KeyCode::ArrowLeft)),
            Some(InputBit::LEFT)
        );
    }

    #[test]
    fn test_from_bindings() {
        let bindings = vec![
            (Binding::key(KeyCode::KeyA), InputBit::LEFT),
            (Binding::key(KeyCode::KeyD), InputBit::RIGHT),
        ];

        let config = InputConfig::from_bindings(0, bindings);
        assert_eq!(config.get_bit(Binding::key(KeyCode::KeyA)), Some(InputBit::LEFT));
        assert_eq!(config.get_bit(Binding::key(KeyCode::KeyD)), Some(InputBit::RIGHT));
        assert!(!config.is_bound(Binding::key(KeyCode::KeyW)));
    }
}
