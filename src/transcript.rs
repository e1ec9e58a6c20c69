//! Append-only log of committed words.

use crate::emitter::WordEvent;
use crate::gesture::GestureLabel;

/// The session transcript. Events are appended exactly once per commit and
/// only ever removed by the explicit external clear.
#[derive(Debug, Default)]
pub struct Transcript {
    events: Vec<WordEvent>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: WordEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[WordEvent] {
        &self.events
    }

    pub fn labels(&self) -> impl Iterator<Item = GestureLabel> + '_ {
        self.events.iter().map(|event| event.label)
    }

    /// The transcript joined into a display sentence.
    pub fn sentence(&self) -> String {
        self.events
            .iter()
            .map(|event| event.label.label())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::GestureLabel::{Hello, ThankYou};
    use std::time::Instant;

    #[test]
    fn sentence_joins_labels_in_commit_order() {
        let mut transcript = Transcript::new();
        let now = Instant::now();
        transcript.push(WordEvent { label: Hello, at: now });
        transcript.push(WordEvent {
            label: ThankYou,
            at: now,
        });
        assert_eq!(transcript.sentence(), "Hello Thank You");
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn clear_empties_the_log() {
        let mut transcript = Transcript::new();
        transcript.push(WordEvent {
            label: Hello,
            at: Instant::now(),
        });
        transcript.clear();
        assert!(transcript.is_empty());
        assert_eq!(transcript.sentence(), "");
    }
}
