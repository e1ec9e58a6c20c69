pub mod config;
pub mod emitter;
pub mod engine;
pub mod gesture;
pub mod ipc;
pub mod landmarks;
pub mod speech;
pub mod stabilize;
mod telemetry;
pub mod transcript;

mod app;

pub use app::{
    crash_log_path, init_logging, log_debug, log_debug_content, log_file_path, log_panic,
};
pub use emitter::{EngineConfig, WordEmitter, WordEvent};
pub use engine::{EngineMetrics, FrameUpdate, RecognitionEngine};
pub use gesture::{classify, GestureLabel, GESTURES};
pub use landmarks::{LandmarkPoint, LANDMARK_COUNT};
pub use speech::{CommandSpeech, NullSpeech, SpeechSink};
pub use stabilize::StabilizationBuffer;
pub use transcript::Transcript;
