//! Finger-extension gesture classifier.
//!
//! Pure function of the first detected hand. A digit counts as extended when
//! its tip sits above its reference joint in image space (smaller `y`): the
//! thumb against its IP joint, the other fingers against their MCP joints.

use crate::hand::*;
use std::fmt;

/// Placeholder shown before the first classification.
pub const SCANNING_LABEL: &str = "SCANNING...";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    NoHands,
    Fist,
    Pointing,
    Peace,
    OpenHand,
    ThumbsUp,
    Fingers(u8),
}

impl Gesture {
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gesture::NoHands => f.write_str("NO HANDS DETECTED"),
            Gesture::Fist => f.write_str("FIST"),
            Gesture::Pointing => f.write_str("POINTING"),
            Gesture::Peace => f.write_str("PEACE"),
            Gesture::OpenHand => f.write_str("OPEN HAND"),
            Gesture::ThumbsUp => f.write_str("THUMBS UP"),
            Gesture::Fingers(n) => write!(f, "{} FINGERS", n),
        }
    }
}

/// Extension state of the five digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerState {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerState {
    pub fn of(hand: &Hand) -> Self {
        let up = |tip: usize, joint: usize| hand.landmark(tip).y < hand.landmark(joint).y;
        Self {
            thumb: up(THUMB_TIP, THUMB_IP),
            index: up(INDEX_TIP, INDEX_MCP),
            middle: up(MIDDLE_TIP, MIDDLE_MCP),
            ring: up(RING_TIP, RING_MCP),
            pinky: up(PINKY_TIP, PINKY_MCP),
        }
    }

    pub fn extended_count(&self) -> u8 {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
            .iter()
            .filter(|up| **up)
            .count() as u8
    }
}

/// Classify the first hand; an empty list is `NoHands`.
pub fn classify(hands: &[Hand]) -> Gesture {
    match hands.first() {
        Some(hand) => classify_fingers(FingerState::of(hand)),
        None => Gesture::NoHands,
    }
}

/// First match wins, in this order.
pub fn classify_fingers(f: FingerState) -> Gesture {
    let k = f.extended_count();
    if k == 0 {
        return Gesture::Fist;
    }
    if k == 1 && f.index {
        return Gesture::Pointing;
    }
    if k == 2 && f.index && f.middle {
        return Gesture::Peace;
    }
    if k == 5 {
        return Gesture::OpenHand;
    }
    if f.thumb && f.index && !f.middle && !f.ring && !f.pinky {
        return Gesture::ThumbsUp;
    }
    Gesture::Fingers(k)
}
