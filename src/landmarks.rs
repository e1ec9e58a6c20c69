//! Hand landmark geometry shared by the classifier.
//!
//! An external pose detector delivers, per frame, zero or one hand's 21
//! labeled 3D points. The x/y coordinates are normalized to the visible frame
//! and already mirrored to the on-screen selfie view, so x grows left to
//! right as displayed; z is a relative depth estimate.

use serde::{Deserialize, Serialize};

/// Points per hand. Anything else is a malformed sample.
pub const LANDMARK_COUNT: usize = 21;

// Landmark indices carry fixed anatomical meaning: 0 is the wrist, then four
// joints per finger from base to tip.
pub const WRIST: usize = 0;
pub const THUMB_MCP: usize = 2;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

/// One tracked point on the hand.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LandmarkPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl LandmarkPoint {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance in 3D.
    pub fn distance(&self, other: &LandmarkPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Validate a raw per-frame sample down to exactly 21 finite points.
///
/// Wrong point counts and non-finite coordinates are handled identically to
/// "no hand visible". Coordinates slightly outside 0..1 are accepted: the
/// detector produces those legitimately when the hand is partially off-frame.
pub fn well_formed(sample: Option<&[LandmarkPoint]>) -> Option<&[LandmarkPoint; LANDMARK_COUNT]> {
    let hand: &[LandmarkPoint; LANDMARK_COUNT] = sample?.try_into().ok()?;
    if hand.iter().all(LandmarkPoint::is_finite) {
        Some(hand)
    } else {
        None
    }
}
