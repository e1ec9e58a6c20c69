//! Command-line parsing and validation helpers.

mod defaults;
mod validation;

use crate::emitter::EngineConfig;
use clap::Parser;
use std::time::Duration;

pub use defaults::{
    DEFAULT_COOLDOWN_MS, DEFAULT_SILENCE_FRAMES, DEFAULT_SPEAK_CMD, DEFAULT_WINDOW_SIZE,
    MAX_COOLDOWN_MS, MAX_SILENCE_FRAMES, MAX_WINDOW_SIZE, MIN_WINDOW_SIZE,
};

/// CLI options for the signwords engine. Validated values keep the speech
/// subprocess safe and the pipeline tunables sane.
#[derive(Debug, Parser, Clone)]
#[command(about = "signwords gesture-to-word engine", author, version)]
pub struct AppConfig {
    /// Stabilization window size (frames)
    #[arg(long = "window-size", default_value_t = DEFAULT_WINDOW_SIZE)]
    pub window_size: usize,

    /// Minimum spacing between committed words (milliseconds)
    #[arg(long = "cooldown-ms", default_value_t = DEFAULT_COOLDOWN_MS)]
    pub cooldown_ms: u64,

    /// Consecutive no-hand frames before the held word is forgotten
    #[arg(long = "silence-frames", default_value_t = DEFAULT_SILENCE_FRAMES)]
    pub silence_frames: u32,

    /// External TTS command run once per committed word
    #[arg(long = "speak-cmd", env = "SIGNWORDS_SPEAK_CMD", default_value = DEFAULT_SPEAK_CMD)]
    pub speak_cmd: String,

    /// Disable speech output entirely
    #[arg(long = "no-speech", default_value_t = false)]
    pub no_speech: bool,

    /// Print the supported gesture vocabulary and exit
    #[arg(long = "list-gestures", default_value_t = false)]
    pub list_gestures: bool,

    /// Enable file logging (debug)
    #[arg(long = "logs", env = "SIGNWORDS_LOGS", default_value_t = false)]
    pub logs: bool,

    /// Disable all file logging (overrides --logs and log env vars)
    #[arg(long = "no-logs", env = "SIGNWORDS_NO_LOGS", default_value_t = false)]
    pub no_logs: bool,

    /// Allow logging committed-word content (debug log only)
    #[arg(
        long = "log-content",
        env = "SIGNWORDS_LOG_CONTENT",
        default_value_t = false
    )]
    pub log_content: bool,

    /// Enable verbose timing logs
    #[arg(long)]
    pub log_timings: bool,
}

impl AppConfig {
    /// Lower the validated CLI values into the engine tunables.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            window_size: self.window_size,
            cooldown: Duration::from_millis(self.cooldown_ms),
            silence_frames: self.silence_frames,
        }
    }
}
