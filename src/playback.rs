//! Trace playback control.
//!
//! A [`PlaybackController`] steps through a finished [`SimulationResult`]
//! at a configurable cadence. The split of responsibilities is strict:
//! the engine produced the result once and it is never mutated here; the
//! controller owns all mutable "current step" state. The caller owns the
//! actual timer and calls [`advance`](PlaybackController::advance) once
//! per tick while [`is_playing`](PlaybackController::is_playing) holds.

use std::time::Duration;

use crate::common::config::{
    DEFAULT_PLAYBACK_INTERVAL, MAX_PLAYBACK_INTERVAL, MIN_PLAYBACK_INTERVAL,
};
use crate::sim::{SimulationResult, SimulationStep};

/// Replays a finished trace one step at a time, in recorded order.
#[derive(Debug, Clone)]
pub struct PlaybackController {
    result: SimulationResult,

    /// Index of the step most recently delivered, or None before the
    /// first step (and after a reset).
    position: Option<usize>,

    playing: bool,

    /// Caller-chosen cadence, clamped to the configured bounds.
    interval: Duration,
}

impl PlaybackController {
    /// Create a controller positioned before the first step, paused.
    pub fn new(result: SimulationResult) -> Self {
        Self {
            result,
            position: None,
            playing: false,
            interval: DEFAULT_PLAYBACK_INTERVAL,
        }
    }

    // ========================================================================
    // Transport controls
    // ========================================================================

    /// Start playback.
    ///
    /// If the trace already ran to the end, rewinds to the start first.
    /// An empty trace never enters the playing state.
    pub fn play(&mut self) {
        if self.is_finished() {
            self.reset();
        }
        self.playing = !self.result.is_empty();
    }

    /// Stop without losing position.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Discard playback position and state.
    ///
    /// The underlying result is untouched; only the cursor resets.
    pub fn reset(&mut self) {
        self.position = None;
        self.playing = false;
    }

    /// Deliver the next step in recorded order.
    ///
    /// Returns `None` once the end of the trace is reached, stopping
    /// playback cleanly. Delivering the final step also stops playback,
    /// so a driving timer can simply stop ticking when
    /// [`is_playing`](Self::is_playing) goes false.
    pub fn advance(&mut self) -> Option<&SimulationStep> {
        let next = self.position.map_or(0, |p| p + 1);

        if next >= self.result.len() {
            self.playing = false;
            return None;
        }

        self.position = Some(next);
        if next + 1 == self.result.len() {
            self.playing = false;
        }

        self.result.steps().get(next)
    }

    // ========================================================================
    // Cadence
    // ========================================================================

    /// Set the playback interval, clamped to the configured bounds.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.clamp(MIN_PLAYBACK_INTERVAL, MAX_PLAYBACK_INTERVAL);
    }

    /// Current playback interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // ========================================================================
    // State queries
    // ========================================================================

    /// Check if playback is running.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Index of the step most recently delivered.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// The step most recently delivered.
    pub fn current_step(&self) -> Option<&SimulationStep> {
        self.position.and_then(|p| self.result.steps().get(p))
    }

    /// True once the final step has been delivered.
    ///
    /// An empty trace counts as finished.
    pub fn is_finished(&self) -> bool {
        match self.position {
            Some(p) => p + 1 == self.result.len(),
            None => self.result.is_empty(),
        }
    }

    /// The trace being replayed.
    pub fn result(&self) -> &SimulationResult {
        &self.result
    }
}
