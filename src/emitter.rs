//! Debounce state machine that turns stabilized labels into committed words.
//!
//! A stabilized label only becomes a word when it clears two gates: the
//! global cooldown since the previous commit, and novelty against the word
//! currently held. A long enough run of no-hand frames forgets the held word
//! so the same sign can be repeated after a pause.

use crate::gesture::GestureLabel;
use std::time::{Duration, Instant};

/// Tunables for the per-frame recognition pipeline.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Stabilization window capacity, in frames.
    pub window_size: usize,
    /// Minimum spacing between commits.
    pub cooldown: Duration,
    /// Consecutive no-hand frames after which the held word is forgotten.
    pub silence_frames: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_size: 10,
            cooldown: Duration::from_millis(1200),
            silence_frames: 40,
        }
    }
}

/// A word committed to the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEvent {
    pub label: GestureLabel,
    pub at: Instant,
}

/// Per-session debounce state.
///
/// Conceptually two states: idle (no held word) and holding. Either way the
/// cooldown timestamp survives silence resets and transcript clears, so a
/// pause never shortens the minimum spacing between commits.
#[derive(Debug)]
pub struct WordEmitter {
    cooldown: Duration,
    silence_frames: u32,
    held_word: Option<GestureLabel>,
    last_commit: Option<Instant>,
    silence_run: u32,
}

impl WordEmitter {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            cooldown: config.cooldown,
            silence_frames: config.silence_frames,
            held_word: None,
            last_commit: None,
            silence_run: 0,
        }
    }

    /// A frame with a visible hand ends any silence run, whether or not the
    /// pose classified.
    pub fn on_hand_frame(&mut self) {
        self.silence_run = 0;
    }

    /// A frame with no hand (or a malformed sample). Returns true on the
    /// frame the silence run crosses the threshold and the held word is
    /// dropped.
    pub fn on_no_hand_frame(&mut self) -> bool {
        self.silence_run = self.silence_run.saturating_add(1);
        if self.silence_run > self.silence_frames && self.held_word.is_some() {
            self.held_word = None;
            return true;
        }
        false
    }

    /// Evaluate a stabilized vote. Commits iff the cooldown has elapsed (or
    /// nothing was ever committed) and the vote differs from the held word
    /// (or no word is held).
    pub fn on_vote(&mut self, vote: GestureLabel, now: Instant) -> Option<WordEvent> {
        let cooled = self
            .last_commit
            .map_or(true, |at| now.duration_since(at) > self.cooldown);
        let novel = self.held_word.map_or(true, |held| held != vote);
        if !(cooled && novel) {
            return None;
        }
        self.held_word = Some(vote);
        self.last_commit = Some(now);
        Some(WordEvent { label: vote, at: now })
    }

    /// Forget the held word without touching the cooldown timer. Used by the
    /// external transcript clear.
    pub fn forget_word(&mut self) {
        self.held_word = None;
    }

    /// Full reset back to the initial idle state, for capture deactivation.
    pub fn reset(&mut self) {
        self.held_word = None;
        self.last_commit = None;
        self.silence_run = 0;
    }

    pub fn held_word(&self) -> Option<GestureLabel> {
        self.held_word
    }

    pub fn silence_run(&self) -> u32 {
        self.silence_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::GestureLabel::{Hello, Yes};

    fn emitter() -> WordEmitter {
        WordEmitter::new(&EngineConfig::default())
    }

    fn t(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn first_vote_commits_immediately() {
        let mut em = emitter();
        let now = Instant::now();
        let event = em.on_vote(Yes, now).expect("first vote should commit");
        assert_eq!(event.label, Yes);
        assert_eq!(event.at, now);
    }

    #[test]
    fn same_word_blocked_until_silence_reset() {
        let mut em = emitter();
        let start = Instant::now();
        assert!(em.on_vote(Yes, start).is_some());
        // Held word blocks repeats even long after the cooldown.
        assert!(em.on_vote(Yes, t(start, 5_000)).is_none());

        for _ in 0..41 {
            em.on_no_hand_frame();
        }
        assert_eq!(em.held_word(), None);
        assert!(em.on_vote(Yes, t(start, 6_000)).is_some());
    }

    #[test]
    fn different_word_blocked_inside_cooldown() {
        let mut em = emitter();
        let start = Instant::now();
        assert!(em.on_vote(Yes, start).is_some());
        assert!(em.on_vote(Hello, t(start, 800)).is_none());
        assert!(em.on_vote(Hello, t(start, 1_201)).is_some());
    }

    #[test]
    fn silence_reset_does_not_shorten_cooldown() {
        let mut em = emitter();
        let start = Instant::now();
        assert!(em.on_vote(Yes, start).is_some());
        for _ in 0..41 {
            em.on_no_hand_frame();
        }
        // Word forgotten, but the commit timestamp still gates the repeat.
        assert!(em.on_vote(Yes, t(start, 500)).is_none());
        assert!(em.on_vote(Yes, t(start, 1_300)).is_some());
    }

    #[test]
    fn silence_run_needs_more_than_threshold_frames() {
        let mut em = emitter();
        let start = Instant::now();
        assert!(em.on_vote(Yes, start).is_some());
        for _ in 0..40 {
            assert!(!em.on_no_hand_frame());
        }
        assert_eq!(em.held_word(), Some(Yes));
        assert!(em.on_no_hand_frame());
        assert_eq!(em.held_word(), None);
    }

    #[test]
    fn hand_frame_restarts_the_silence_run() {
        let mut em = emitter();
        let start = Instant::now();
        assert!(em.on_vote(Yes, start).is_some());
        for _ in 0..30 {
            em.on_no_hand_frame();
        }
        em.on_hand_frame();
        for _ in 0..30 {
            em.on_no_hand_frame();
        }
        // Two interrupted runs of 30 never cross the threshold of 40.
        assert_eq!(em.held_word(), Some(Yes));
    }

    #[test]
    fn forget_word_keeps_the_cooldown_timer() {
        let mut em = emitter();
        let start = Instant::now();
        assert!(em.on_vote(Yes, start).is_some());
        em.forget_word();
        assert!(em.on_vote(Yes, t(start, 100)).is_none());
        assert!(em.on_vote(Yes, t(start, 1_300)).is_some());
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut em = emitter();
        let start = Instant::now();
        assert!(em.on_vote(Yes, start).is_some());
        em.on_no_hand_frame();
        em.reset();
        assert_eq!(em.held_word(), None);
        assert_eq!(em.silence_run(), 0);
        // A fresh session commits immediately again.
        assert!(em.on_vote(Yes, t(start, 1)).is_some());
    }
}
