//! JSON message types for the frame-driving session.
//!
//! Commands arrive on stdin, events leave on stdout, one JSON object per
//! line. The `"cmd"` / `"event"` tag fields discriminate the variants.

use crate::landmarks::LandmarkPoint;
use serde::{Deserialize, Serialize};

/// Commands received from the detector/UI process.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "cmd")]
pub enum SessionCommand {
    /// One detector frame: zero or one hand's landmark points.
    #[serde(rename = "frame")]
    Frame {
        #[serde(default)]
        landmarks: Option<Vec<LandmarkPoint>>,
    },

    /// Resume capture from a clean pipeline state
    #[serde(rename = "activate")]
    Activate,

    /// Stop capture and reset the pipeline
    #[serde(rename = "deactivate")]
    Deactivate,

    /// Clear the transcript and held word
    #[serde(rename = "clear")]
    Clear,

    /// Re-emit the capabilities event
    #[serde(rename = "get_capabilities")]
    GetCapabilities,
}

/// Events emitted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event")]
pub enum SessionEvent {
    /// Sent once on startup with the vocabulary and effective tunables
    #[serde(rename = "capabilities")]
    Capabilities {
        version: String,
        gestures: Vec<&'static str>,
        window_size: usize,
        cooldown_ms: u64,
        silence_frames: u32,
        speech: &'static str,
    },

    /// A word cleared the debounce gates and joined the transcript
    #[serde(rename = "word")]
    Word { label: &'static str, offset_ms: u64 },

    /// The live overlay label changed (absent label means blank)
    #[serde(rename = "live")]
    Live {
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<&'static str>,
    },

    /// Capture was activated or deactivated
    #[serde(rename = "state")]
    State { active: bool },

    /// The transcript was cleared
    #[serde(rename = "cleared")]
    Cleared,

    /// A command could not be handled
    #[serde(rename = "error")]
    Error { message: String, recoverable: bool },
}
