// Named combos and a book of combos to check every frame

use super::bits::InputBit;
use super::recorder::Recorder;
use super::InputError;
use std::cmp::Reverse;

/// How each step of a combo is compared with a combo frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The frame's bitmask must equal the step
    Exact,
    /// The frame's bitmask must contain the step; other held bits are ignored
    Superset,
}

/// A named sequence of steps, e.g. a dash or a special move
#[derive(Debug, Clone, PartialEq)]
pub struct Combo {
    name: String,
    steps: Vec<InputBit>,
    mode: MatchMode,
}

impl Combo {
    /// Create a combo; every step must assert at least one bit
    pub fn new(
        name: impl Into<String>,
        steps: Vec<InputBit>,
        mode: MatchMode,
    ) -> Result<Self, InputError> {
        let name = name.into();
        if steps.is_empty() || steps.iter().any(|step| step.is_empty()) {
            return Err(InputError::EmptyCombo(name));
        }
        Ok(Self { name, steps, mode })
    }

    /// Parse a comma-separated list of steps, e.g. `"DOWN, DOWN+RIGHT, RIGHT"`
    pub fn parse(name: impl Into<String>, steps: &str, mode: MatchMode) -> Result<Self, InputError> {
        let steps = steps
            .split(',')
            .map(str::parse)
            .collect::<Result<Vec<InputBit>, _>>()?;
        Self::new(name, steps, mode)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[InputBit] {
        &self.steps
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Check if the combo completed on the recorder's latest update
    pub fn is_triggered(&self, recorder: &Recorder) -> bool {
        match self.mode {
            MatchMode::Exact => recorder.triggered(&self.steps),
            MatchMode::Superset => recorder.set_triggered(&self.steps),
        }
    }

    /// Check if the combo is currently represented, held or not
    pub fn is_matching(&self, recorder: &Recorder) -> bool {
        match self.mode {
            MatchMode::Exact => recorder.equal(&self.steps),
            MatchMode::Superset => recorder.set(&self.steps),
        }
    }
}

/// A set of combos, kept longest first
#[derive(Debug, Clone, Default)]
pub struct ComboBook {
    combos: Vec<Combo>,
}

impl ComboBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a combo, keeping longer combos ahead of shorter ones
    pub fn register(&mut self, combo: Combo) {
        log::debug!("Registered combo '{}' ({} steps)", combo.name, combo.steps.len());
        self.combos.push(combo);
        self.combos.sort_by_key(|combo| Reverse(combo.steps.len()));
    }

    /// Combos completed on the recorder's latest update, longest first
    pub fn triggered<'a>(&'a self, recorder: &Recorder) -> Vec<&'a Combo> {
        self.combos
            .iter()
            .filter(|combo| combo.is_triggered(recorder))
            .collect()
    }

    /// The longest combo completed on the recorder's latest update
    pub fn first_triggered<'a>(&'a self, recorder: &Recorder) -> Option<&'a Combo> {
        self.combos.iter().find(|combo| combo.is_triggered(recorder))
    }

    /// Combos currently represented in the recorder's history, longest first
    pub fn matching<'a>(&'a self, recorder: &Recorder) -> Vec<&'a Combo> {
        self.combos
            .iter()
            .filter(|combo| combo.is_matching(recorder))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&Combo> {
        self.combos.iter().find(|combo| combo.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combo> {
        self.combos.iter()
    }

    pub fn len(&self) -> usize {
        self.combos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }
}

/// Combos used by the demo
pub fn default_combos() -> Result<ComboBook, InputError> {
    let mut book = ComboBook::new();
    book.register(Combo::parse("dash-left", "LEFT, LEFT", MatchMode::Exact)?);
    book.register(Combo::parse("dash-right", "RIGHT, RIGHT", MatchMode::Exact)?);
    book.register(Combo::parse(
        "fireball",
        "DOWN, DOWN+RIGHT, RIGHT+ACTION",
        MatchMode::Superset,
    )?);
    book.register(Combo::parse("super-jump", "DOWN, UP", MatchMode::Exact)?);
    book.register(Combo::parse("menu", "MENU", MatchMode::Superset)?);
    book.register(Combo::parse("pick", "PICK", MatchMode::Superset)?);
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::bits::InputSource;
    use crate::engine::input::set::Input;

    fn press(recorder: &mut Recorder, bits: InputBit) {
        recorder.record(Input::new(InputSource::Keyboard, bits));
        recorder.update(16.0);
    }

    fn idle(recorder: &mut Recorder) {
        recorder.update(16.0);
    }

    #[test]
    fn test_combo_parse() {
        let combo = Combo::parse("fireball", "DOWN, down+right , RIGHT|ACTION", MatchMode::Exact)
            .unwrap();
        assert_eq!(combo.name(), "fireball");
        assert_eq!(
            combo.steps(),
            &[
                InputBit::DOWN,
                InputBit::DOWN | InputBit::RIGHT,
                InputBit::RIGHT | InputBit::ACTION
            ]
        );
        assert_eq!(combo.mode(), MatchMode::Exact);
    }

    #[test]
    fn test_combo_parse_unknown_step() {
        let err = Combo::parse("bad", "DOWN, KICK", MatchMode::Exact).unwrap_err();
        assert!(matches!(err, InputError::UnknownBit(ref name) if name == "KICK"));
    }

    #[test]
    fn test_combo_rejects_empty_steps() {
        assert!(matches!(
            Combo::new("none", vec![], MatchMode::Exact),
            Err(InputError::EmptyCombo(_))
        ));
        assert!(Combo::new("zero", vec![InputBit::UP, InputBit::empty()], MatchMode::Exact).is_err());
    }

    #[test]
    fn test_exact_combo_triggers_once() {
        let combo = Combo::parse("dash", "RIGHT, RIGHT", MatchMode::Exact).unwrap();
        let mut recorder = Recorder::new();

        press(&mut recorder, InputBit::RIGHT);
        assert!(!combo.is_triggered(&recorder));
        idle(&mut recorder);
        press(&mut recorder, InputBit::RIGHT);
        assert!(combo.is_triggered(&recorder));

        press(&mut recorder, InputBit::RIGHT);
        assert!(!combo.is_triggered(&recorder));
        assert!(combo.is_matching(&recorder));
    }

    #[test]
    fn test_superset_combo_ignores_extra_bits() {
        let combo = Combo::parse("fireball", "DOWN, DOWN+RIGHT, RIGHT+ACTION", MatchMode::Superset)
            .unwrap();
        let mut recorder = Recorder::new();

        press(&mut recorder, InputBit::DOWN | InputBit::PICK);
        press(&mut recorder, InputBit::DOWN | InputBit::RIGHT | InputBit::PICK);
        press(&mut recorder, InputBit::RIGHT | InputBit::ACTION | InputBit::PICK);

        assert!(combo.is_triggered(&recorder));
    }

    #[test]
    fn test_book_orders_longest_first() {
        let book = default_combos().unwrap();
        let lengths: Vec<usize> = book.iter().map(|combo| combo.steps().len()).collect();

        let mut sorted = lengths.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
        assert_eq!(book.len(), 6);
    }

    #[test]
    fn test_book_triggered() {
        let book = default_combos().unwrap();
        let mut recorder = Recorder::new();

        press(&mut recorder, InputBit::DOWN);
        press(&mut recorder, InputBit::UP);

        let names: Vec<&str> = book
            .triggered(&recorder)
            .into_iter()
            .map(Combo::name)
            .collect();
        assert_eq!(names, vec!["super-jump"]);
        assert_eq!(
            book.first_triggered(&recorder).map(Combo::name),
            Some("super-jump")
        );
    }

    #[test]
    fn test_book_prefers_longest_match() {
        let book = default_combos().unwrap();
        let mut recorder = Recorder::new();

        press(&mut recorder, InputBit::DOWN);
        press(&mut recorder, InputBit::DOWN | InputBit::RIGHT);
        press(&mut recorder, InputBit::RIGHT | InputBit::ACTION);

        assert_eq!(
            book.first_triggered(&recorder).map(Combo::name),
            Some("fireball")
        );
    }

    #[test]
    fn test_book_matching_after_hold() {
        let book = default_combos().unwrap();
        let mut recorder = Recorder::new();

        press(&mut recorder, InputBit::MENU);
        press(&mut recorder, InputBit::MENU);

        assert!(book.triggered(&recorder).is_empty());
        let names: Vec<&str> = book.matching(&recorder).into_iter().map(Combo::name).collect();
        assert_eq!(names, vec!["menu"]);
    }

    #[test]
    fn test_book_get() {
        let book = default_combos().unwrap();
        assert!(book.get("dash-left").is_some());
        assert!(book.get("hadouken").is_none());
        assert!(!book.is_empty());
    }
}
