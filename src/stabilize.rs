//! Temporal stabilization of instantaneous gesture labels.
//!
//! A single noisy frame should never reach the transcript, so instantaneous
//! labels are majority-voted over a short sliding window before the emitter
//! sees them. Frames without a classified hand never enter the window; the
//! silence path in the emitter handles those.

use crate::gesture::GestureLabel;
use std::collections::VecDeque;

/// Sliding window of the most recent instantaneous labels.
#[derive(Debug)]
pub struct StabilizationBuffer {
    window: VecDeque<GestureLabel>,
    window_size: usize,
}

impl StabilizationBuffer {
    pub fn new(window_size: usize) -> Self {
        let window_size = window_size.max(1);
        Self {
            window: VecDeque::with_capacity(window_size),
            window_size,
        }
    }

    /// Append one instantaneous label, evicting the oldest past capacity.
    pub fn push(&mut self, label: GestureLabel) {
        self.window.push_back(label);
        if self.window.len() > self.window_size {
            self.window.pop_front();
        }
    }

    /// Majority label of the current window, once at least half the window
    /// is populated.
    ///
    /// Ties resolve to the tied label that was pushed most recently, so the
    /// vote is deterministic for any push order.
    pub fn vote(&self) -> Option<GestureLabel> {
        if self.window.len() < self.min_votes() {
            return None;
        }
        let mut best: Option<(GestureLabel, usize)> = None;
        for &label in &self.window {
            let count = self.window.iter().filter(|&&l| l == label).count();
            // Walking oldest to newest and replacing on ties leaves the most
            // recently seen of the tied labels as the winner.
            if best.map_or(true, |(_, best_count)| count >= best_count) {
                best = Some((label, count));
            }
        }
        best.map(|(label, _)| label)
    }

    /// Entries required before `vote` produces a result.
    pub fn min_votes(&self) -> usize {
        (self.window_size / 2).max(1)
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn clear(&mut self) {
        self.window.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::GestureLabel::{One, Three, Two, Yes};

    #[test]
    fn no_vote_until_half_capacity() {
        let mut buf = StabilizationBuffer::new(10);
        for _ in 0..4 {
            buf.push(Yes);
            assert_eq!(buf.vote(), None);
        }
        buf.push(Yes);
        assert_eq!(buf.vote(), Some(Yes));
    }

    #[test]
    fn window_never_exceeds_capacity() {
        let mut buf = StabilizationBuffer::new(10);
        for _ in 0..50 {
            buf.push(One);
        }
        assert_eq!(buf.len(), 10);
    }

    #[test]
    fn eviction_drops_oldest_entries() {
        let mut buf = StabilizationBuffer::new(4);
        for _ in 0..4 {
            buf.push(One);
        }
        for _ in 0..3 {
            buf.push(Two);
        }
        // Window is now [One, Two, Two, Two].
        assert_eq!(buf.vote(), Some(Two));
    }

    #[test]
    fn majority_wins_over_interleaved_minority() {
        let mut buf = StabilizationBuffer::new(10);
        // Six Ones and four Twos interleaved inside one window.
        for i in 0..10 {
            buf.push(if i % 2 == 0 || i >= 8 { One } else { Two });
        }
        assert_eq!(buf.vote(), Some(One));
    }

    #[test]
    fn ties_resolve_to_most_recently_pushed() {
        let mut buf = StabilizationBuffer::new(10);
        for _ in 0..3 {
            buf.push(One);
        }
        for _ in 0..3 {
            buf.push(Two);
        }
        assert_eq!(buf.vote(), Some(Two));

        // Reinforcing the older label flips the tie the other way.
        let mut buf = StabilizationBuffer::new(10);
        for _ in 0..3 {
            buf.push(Two);
        }
        for _ in 0..3 {
            buf.push(Three);
        }
        buf.push(Two);
        buf.push(Three);
        // Four each; Three was pushed last.
        assert_eq!(buf.vote(), Some(Three));
    }

    #[test]
    fn clear_forgets_all_history() {
        let mut buf = StabilizationBuffer::new(10);
        for _ in 0..10 {
            buf.push(Yes);
        }
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.vote(), None);
    }
}
