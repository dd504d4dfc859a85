// Combo recorder: coalesces per-source input each frame and tracks combos

use super::bits::InputBit;
use super::config::RecorderConfig;
use super::history::ComboHistory;
use super::set::{Input, InputSet};

/// Per-frame input coalescing and timed combo recognition
///
/// Each frame, adapters call [`Recorder::record`] zero or more times, then the
/// game loop calls [`Recorder::update`] exactly once. Game code then asks
/// [`Recorder::equal`], [`Recorder::set`], [`Recorder::triggered`] or
/// [`Recorder::set_triggered`] whether a combo is represented.
///
/// A combo is a run of distinct, nonzero coalesced bitmasks where no gap
/// between combo-advancing inputs reaches the configured window.
#[derive(Debug, Clone)]
pub struct Recorder {
    config: RecorderConfig,

    /// Milliseconds since the trailing combo frame last changed
    timer: f64,

    /// Inputs recorded during the current frame
    pending: InputSet,

    /// Inputs of the previous frame
    last_frame: InputSet,

    history: ComboHistory,
}

impl Recorder {
    /// Create a recorder with the default 256 ms window
    pub fn new() -> Self {
        Self::with_config(RecorderConfig::default())
    }

    /// Create a recorder with custom timing
    pub fn with_config(config: RecorderConfig) -> Self {
        Self {
            config,
            timer: 0.0,
            pending: InputSet::new(),
            last_frame: InputSet::new(),
            history: ComboHistory::new(config.history_capacity()),
        }
    }

    /// Record the current state of one source for this frame
    /// A later call for the same source in the same frame wins
    pub fn record(&mut self, input: Input) {
        self.pending.insert(input);
    }

    /// Advance one frame
    ///
    /// Must be called exactly once per frame, after every [`Recorder::record`]
    /// call for that frame. `elapsed_ms` is the wall-clock time since the
    /// previous call and must be finite and non-negative.
    pub fn update(&mut self, elapsed_ms: f64) {
        debug_assert!(elapsed_ms.is_finite() && elapsed_ms >= 0.0);

        let bits = self.pending.bits();
        let last_bits = self.last_frame.bits();
        let interval = self.timer + elapsed_ms;

        if interval >= self.config.max_interval_ms() && (bits.is_empty() || bits != last_bits) {
            if !self.history.is_empty() {
                log::trace!(
                    "Combo of {} frames expired after {:.1} ms",
                    self.history.len(),
                    interval
                );
            }
            self.timer = 0.0;
            self.history.clear();
            if !bits.is_empty() {
                self.history.push(self.pending);
            }
        } else if !bits.is_empty() && bits != last_bits {
            self.timer = 0.0;
            self.history.push(self.pending);
            log::trace!("Combo frame {:?} ({} frames)", bits, self.history.len());
        } else {
            self.timer = interval;
            // Same mask still held: refresh payloads without extending the combo
            if !bits.is_empty() {
                self.history.replace_last(self.pending);
            }
        }

        self.last_frame = std::mem::take(&mut self.pending);
    }

    /// Check if the trailing combo frames exactly equal `query`
    pub fn equal(&self, query: &[InputBit]) -> bool {
        self.history.matches_tail(query, |have, want| have == want)
    }

    /// Check if the trailing combo frames contain `query`, position by position
    /// Unrelated bits held at the same time are allowed
    pub fn set(&self, query: &[InputBit]) -> bool {
        self.history.matches_tail(query, |have, want| have.contains(want))
    }

    /// Like [`Recorder::equal`], but only on the frame the match was produced
    pub fn triggered(&self, query: &[InputBit]) -> bool {
        self.just_changed() && self.equal(query)
    }

    /// Like [`Recorder::set`], but only on the frame the match was produced
    pub fn set_triggered(&self, query: &[InputBit]) -> bool {
        self.just_changed() && self.set(query)
    }

    /// Combo frames recorded so far, oldest first
    pub fn history(&self) -> &ComboHistory {
        &self.history
    }

    /// Milliseconds since the trailing combo frame last changed
    pub fn timer(&self) -> f64 {
        self.timer
    }

    /// Inputs seen by the latest update
    pub fn last_frame_input(&self) -> &InputSet {
        &self.last_frame
    }

    /// Coalesced bitmask seen by the latest update
    pub fn current_bits(&self) -> InputBit {
        self.last_frame.bits()
    }

    pub fn config(&self) -> &RecorderConfig {
        &self.config
    }

    fn just_changed(&self) -> bool {
        self.timer == 0.0
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}
