//! Default tunables for the recognition pipeline.
//!
//! The window/cooldown/silence defaults assume a detector running at 15-30
//! frames per second: a 10-frame window absorbs single-frame
//! misclassifications, 1.2s spacing keeps repeated words readable, and 40
//! no-hand frames (roughly 1.5-2.5s) reads as a deliberate pause.

pub const DEFAULT_WINDOW_SIZE: usize = 10;
pub const DEFAULT_COOLDOWN_MS: u64 = 1_200;
pub const DEFAULT_SILENCE_FRAMES: u32 = 40;
pub const DEFAULT_SPEAK_CMD: &str = "espeak";

pub const MIN_WINDOW_SIZE: usize = 2;
pub const MAX_WINDOW_SIZE: usize = 64;
pub const MAX_COOLDOWN_MS: u64 = 60_000;
pub const MAX_SILENCE_FRAMES: u32 = 1_000;

/// Characters never allowed in the speak command so it is safe to exec
/// directly.
pub const FORBIDDEN_CMD_CHARS: &[char] = &[';', '|', '&', '$', '`', '<', '>', '\n', '\r'];
