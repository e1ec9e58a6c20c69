//! Per-frame orchestration: classify, stabilize, debounce, deliver.
//!
//! The engine is invoked synchronously once per incoming frame by the
//! external capture driver; no two invocations overlap and emissions happen
//! at most once per frame, in frame order. Bad per-frame data degrades to
//! "no detection this frame", never an error.

use crate::emitter::{EngineConfig, WordEmitter, WordEvent};
use crate::gesture::{self, GestureLabel};
use crate::landmarks::{self, LandmarkPoint};
use crate::speech::SpeechSink;
use crate::{log_debug, log_debug_content};
use crate::stabilize::StabilizationBuffer;
use crate::transcript::Transcript;
use std::time::Instant;

/// What one processed frame produced.
///
/// `live` is the continuously-updated stabilized label for the overlay
/// consumer; `committed` is set on the (rare) frames where a word cleared
/// the debounce gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameUpdate {
    pub live: Option<GestureLabel>,
    pub committed: Option<WordEvent>,
}

impl FrameUpdate {
    fn quiet(live: Option<GestureLabel>) -> Self {
        Self {
            live,
            committed: None,
        }
    }
}

/// Session counters for the end-of-session metrics line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineMetrics {
    pub frames: u64,
    pub classified: u64,
    pub committed: u64,
    pub silence_resets: u64,
}

/// The recognition pipeline: owns the stabilization window, the debounce
/// state, the transcript, and the speech sink.
pub struct RecognitionEngine {
    config: EngineConfig,
    buffer: StabilizationBuffer,
    emitter: WordEmitter,
    transcript: Transcript,
    speech: Box<dyn SpeechSink>,
    live: Option<GestureLabel>,
    active: bool,
    metrics: EngineMetrics,
}

impl RecognitionEngine {
    /// Engines start active so a bare frame pipe works without an explicit
    /// activate command.
    pub fn new(config: EngineConfig, speech: Box<dyn SpeechSink>) -> Self {
        Self {
            buffer: StabilizationBuffer::new(config.window_size),
            emitter: WordEmitter::new(&config),
            transcript: Transcript::new(),
            speech,
            live: None,
            active: true,
            config,
            metrics: EngineMetrics::default(),
        }
    }

    /// Process one frame in arrival order.
    pub fn process_frame(&mut self, sample: Option<&[LandmarkPoint]>, now: Instant) -> FrameUpdate {
        if !self.active {
            // Frames racing a deactivation are dropped, not processed.
            return FrameUpdate::quiet(None);
        }
        self.metrics.frames += 1;

        let Some(hand) = landmarks::well_formed(sample) else {
            // Silence path: malformed samples count the same as no hand.
            if self.emitter.on_no_hand_frame() {
                self.metrics.silence_resets += 1;
                log_debug("silence threshold crossed; held word forgotten");
            }
            self.live = None;
            return FrameUpdate::quiet(None);
        };

        self.emitter.on_hand_frame();
        let Some(instantaneous) = gesture::classify_hand(hand) else {
            // A visible but unrecognized pose blanks the overlay without
            // touching the stabilization window.
            self.live = None;
            return FrameUpdate::quiet(None);
        };
        self.metrics.classified += 1;
        self.buffer.push(instantaneous);

        let Some(vote) = self.buffer.vote() else {
            // Window still warming up; the overlay keeps its previous value.
            return FrameUpdate::quiet(self.live);
        };
        self.live = Some(vote);

        let committed = self.emitter.on_vote(vote, now);
        if let Some(event) = committed {
            self.metrics.committed += 1;
            self.transcript.push(event);
            self.speech.speak(event.label);
            // The word text is user content and stays behind the content gate.
            log_debug("word committed");
            log_debug_content(&format!("word committed: {}", event.label));
        }
        FrameUpdate {
            live: self.live,
            committed,
        }
    }

    /// Begin (or resume) a capture session from a clean slate.
    pub fn activate(&mut self) {
        self.reset_pipeline();
        self.active = true;
    }

    /// End the capture session. The transcript survives; all per-frame state
    /// is reset so a later activation starts clean.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.reset_pipeline();
    }

    /// Empty the transcript and forget the held word. The stabilization
    /// window and the cooldown timer are deliberately left alone.
    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
        self.emitter.forget_word();
    }

    fn reset_pipeline(&mut self) {
        self.buffer.clear();
        self.emitter.reset();
        self.live = None;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn live_label(&self) -> Option<GestureLabel> {
        self.live
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn speech_sink_name(&self) -> &'static str {
        self.speech.name()
    }

    pub fn metrics(&self) -> EngineMetrics {
        self.metrics
    }

    /// Pipe-delimited counters for the debug log, written on session end.
    pub fn log_metrics(&self) {
        let m = self.metrics;
        log_debug(&format!(
            "frame_metrics|frames={}|classified={}|committed={}|silence_resets={}",
            m.frames, m.classified, m.committed, m.silence_resets
        ));
    }
}
