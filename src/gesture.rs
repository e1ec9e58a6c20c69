//! Gesture vocabulary and the geometry rules that map one hand's landmarks
//! to an instantaneous label.
//!
//! The classifier is a fixed rule set over hand geometry, not a model: per
//! frame it derives which fingers are extended plus a thumb-to-index pinch
//! distance, then walks an ordered rule table. Rule order is part of the
//! contract because several conditions overlap (an open raised hand satisfies
//! both the Stop and Hello rules; the earlier rule wins).

use crate::landmarks::{
    self, LandmarkPoint, INDEX_MCP, INDEX_PIP, INDEX_TIP, LANDMARK_COUNT, MIDDLE_MCP, MIDDLE_PIP,
    MIDDLE_TIP, PINKY_MCP, PINKY_PIP, PINKY_TIP, RING_MCP, RING_PIP, RING_TIP, THUMB_MCP,
    THUMB_TIP, WRIST,
};
use std::fmt;

/// Closed set of word tokens the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureLabel {
    Ok,
    ILoveYou,
    Peace,
    Stop,
    One,
    Two,
    Three,
    Four,
    Hello,
    Good,
    Yes,
    Help,
    ThankYou,
}

/// Every supported gesture, in rule-priority order.
pub const GESTURES: [GestureLabel; 13] = [
    GestureLabel::Ok,
    GestureLabel::ILoveYou,
    GestureLabel::Peace,
    GestureLabel::Stop,
    GestureLabel::One,
    GestureLabel::Two,
    GestureLabel::Three,
    GestureLabel::Four,
    GestureLabel::Hello,
    GestureLabel::Good,
    GestureLabel::Yes,
    GestureLabel::Help,
    GestureLabel::ThankYou,
];

impl GestureLabel {
    /// Display token, as spoken and written to the transcript.
    pub fn label(self) -> &'static str {
        match self {
            GestureLabel::Ok => "OK",
            GestureLabel::ILoveYou => "I Love You",
            GestureLabel::Peace => "Peace",
            GestureLabel::Stop => "Stop",
            GestureLabel::One => "One",
            GestureLabel::Two => "Two",
            GestureLabel::Three => "Three",
            GestureLabel::Four => "Four",
            GestureLabel::Hello => "Hello",
            GestureLabel::Good => "Good",
            GestureLabel::Yes => "Yes",
            GestureLabel::Help => "Help",
            GestureLabel::ThankYou => "Thank You",
        }
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-frame geometry the rules are written against.
///
/// `ext` is ordered thumb, index, middle, ring, pinky.
#[derive(Debug, Clone, Copy)]
struct HandFeatures {
    ext: [bool; 5],
    extended_count: usize,
    pinch_dist: f32,
    palm_raised: bool,
}

impl HandFeatures {
    fn from_hand(lm: &[LandmarkPoint; LANDMARK_COUNT]) -> Self {
        // Thumb extension is handedness-aware: infer orientation from the
        // index-base vs pinky-base x positions, then compare thumb tip to the
        // thumb MCP joint in that direction.
        let thumb = if lm[INDEX_MCP].x > lm[PINKY_MCP].x {
            lm[THUMB_TIP].x > lm[THUMB_MCP].x
        } else {
            lm[THUMB_TIP].x < lm[THUMB_MCP].x
        };
        // Screen space has y = 0 at the top, so an extended finger has its
        // tip above the PIP joint.
        let ext = [
            thumb,
            lm[INDEX_TIP].y < lm[INDEX_PIP].y,
            lm[MIDDLE_TIP].y < lm[MIDDLE_PIP].y,
            lm[RING_TIP].y < lm[RING_PIP].y,
            lm[PINKY_TIP].y < lm[PINKY_PIP].y,
        ];
        Self {
            ext,
            extended_count: ext.iter().filter(|&&e| e).count(),
            pinch_dist: lm[THUMB_TIP].distance(&lm[INDEX_TIP]),
            palm_raised: lm[MIDDLE_MCP].y < lm[WRIST].y,
        }
    }
}

struct Rule {
    name: &'static str,
    label: GestureLabel,
    matches: fn(&HandFeatures) -> bool,
}

/// First match wins; do not reorder.
const RULES: [Rule; 13] = [
    Rule {
        name: "thumb_index_pinch",
        label: GestureLabel::Ok,
        matches: |f| f.pinch_dist < 0.05 && f.extended_count >= 3,
    },
    Rule {
        name: "thumb_index_pinky",
        label: GestureLabel::ILoveYou,
        matches: |f| f.ext[0] && f.ext[1] && f.ext[4] && !f.ext[2] && !f.ext[3],
    },
    Rule {
        name: "index_middle_only",
        label: GestureLabel::Peace,
        matches: |f| f.ext[1] && f.ext[2] && !f.ext[0] && !f.ext[3] && !f.ext[4],
    },
    Rule {
        name: "open_palm_raised",
        label: GestureLabel::Stop,
        matches: |f| f.extended_count == 5 && f.palm_raised,
    },
    Rule {
        name: "index_only",
        label: GestureLabel::One,
        matches: |f| f.ext[1] && !f.ext[2] && !f.ext[3] && !f.ext[4],
    },
    Rule {
        name: "index_middle",
        label: GestureLabel::Two,
        matches: |f| f.ext[1] && f.ext[2] && !f.ext[3] && !f.ext[4],
    },
    Rule {
        name: "three_fingers",
        label: GestureLabel::Three,
        matches: |f| !f.ext[0] && f.ext[1] && f.ext[2] && f.ext[3] && !f.ext[4],
    },
    Rule {
        name: "four_fingers",
        label: GestureLabel::Four,
        matches: |f| !f.ext[0] && f.ext[1] && f.ext[2] && f.ext[3] && f.ext[4],
    },
    Rule {
        name: "open_hand",
        label: GestureLabel::Hello,
        matches: |f| f.extended_count == 5,
    },
    Rule {
        name: "thumb_only",
        label: GestureLabel::Good,
        matches: |f| f.ext[0] && f.extended_count == 1,
    },
    Rule {
        name: "fist",
        label: GestureLabel::Yes,
        matches: |f| f.extended_count == 0,
    },
    Rule {
        name: "middle_ring_pinky",
        label: GestureLabel::Help,
        matches: |f| !f.ext[1] && f.ext[2] && f.ext[3] && f.ext[4],
    },
    Rule {
        name: "open_with_thumb",
        label: GestureLabel::ThankYou,
        matches: |f| f.extended_count >= 4 && f.ext[0],
    },
];

/// Map one frame's sample to an instantaneous label.
///
/// Pure and total: missing or malformed samples yield `None`, as does any
/// hand pose no rule recognizes.
pub fn classify(sample: Option<&[LandmarkPoint]>) -> Option<GestureLabel> {
    classify_hand(landmarks::well_formed(sample)?)
}

/// Classify an already-validated hand. Used by the engine after the silence
/// path has ruled out malformed frames.
pub(crate) fn classify_hand(lm: &[LandmarkPoint; LANDMARK_COUNT]) -> Option<GestureLabel> {
    let features = HandFeatures::from_hand(lm);
    let rule = RULES.iter().find(|rule| (rule.matches)(&features))?;
    tracing::trace!(rule = rule.name, label = rule.label.label(), "rule matched");
    Some(rule.label)
}
