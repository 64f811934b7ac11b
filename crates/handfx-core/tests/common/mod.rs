// Shared fixtures for the core integration tests.

#![allow(dead_code)]

use handfx_core::hand::*;
use handfx_core::{
    AudioNotifier, Cue, CursorEmitter, FingerState, FxConfig, FxError, Hand, HandDetector,
    Landmark, Surface,
};
use std::collections::VecDeque;

const JOINT_Y: f32 = 0.6;
const UP_Y: f32 = 0.2;
const DOWN_Y: f32 = 0.8;

/// Synthetic hand centred in the frame with the given digits extended.
pub fn hand_with(fingers: FingerState) -> Hand {
    let mut points = [Landmark::new(0.5, 0.5, 0.0); LANDMARKS_PER_HAND];
    let digits = [
        (fingers.thumb, THUMB_TIP, THUMB_IP),
        (fingers.index, INDEX_TIP, INDEX_MCP),
        (fingers.middle, MIDDLE_TIP, MIDDLE_MCP),
        (fingers.ring, RING_TIP, RING_MCP),
        (fingers.pinky, PINKY_TIP, PINKY_MCP),
    ];
    for (up, tip, joint) in digits {
        points[joint].y = JOINT_Y;
        points[tip].y = if up { UP_Y } else { DOWN_Y };
    }
    Hand::new(points)
}

pub fn fingers(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> FingerState {
    FingerState {
        thumb,
        index,
        middle,
        ring,
        pinky,
    }
}

pub fn open_hand() -> Hand {
    hand_with(fingers(true, true, true, true, true))
}

pub fn fist() -> Hand {
    hand_with(FingerState::default())
}

pub fn peace() -> Hand {
    hand_with(fingers(false, true, true, false, false))
}

/// Same shape as `hand`, moved so its index tip lands at `(x, y)`.
pub fn with_index_tip_at(hand: &Hand, x: f32, y: f32) -> Hand {
    let tip = *hand.index_tip();
    let (dx, dy) = (x - tip.x, y - tip.y);
    let mut points = *hand.landmarks();
    for p in points.iter_mut() {
        p.x += dx;
        p.y += dy;
    }
    Hand::new(points)
}

/// Replays a fixed sequence of detection results, then keeps returning
/// the last one.
pub struct ScriptedDetector {
    frames: VecDeque<Result<Vec<Hand>, FxError>>,
    last: Result<Vec<Hand>, FxError>,
    pub ready: bool,
    pub calls: usize,
}

impl ScriptedDetector {
    pub fn new(frames: Vec<Result<Vec<Hand>, FxError>>) -> Self {
        Self {
            frames: frames.into(),
            last: Ok(Vec::new()),
            ready: true,
            calls: 0,
        }
    }

    pub fn always(hands: Vec<Hand>) -> Self {
        Self::new(vec![Ok(hands)])
    }

    pub fn failing() -> Self {
        Self::new(vec![Err(FxError::DetectorUnavailable("model crashed".into()))])
    }
}

impl HandDetector for ScriptedDetector {
    fn ready(&self) -> bool {
        self.ready
    }

    fn detect(&mut self, _timestamp_ms: f64) -> Result<Vec<Hand>, FxError> {
        self.calls += 1;
        if let Some(next) = self.frames.pop_front() {
            self.last = next;
        }
        self.last.clone()
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub cues: Vec<Cue>,
}

impl RecordingNotifier {
    pub fn count(&self, pred: impl Fn(&Cue) -> bool) -> usize {
        self.cues.iter().filter(|c| pred(*c)).count()
    }

    pub fn gesture_changes(&self) -> usize {
        self.count(|c| matches!(c, Cue::GestureChange(_)))
    }
}

impl AudioNotifier for RecordingNotifier {
    fn play(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}

/// Emitter that only counts its updates and remembers the last anchor.
#[derive(Debug, Default)]
pub struct CountingEmitter {
    pub updates: usize,
    pub last_anchor: Option<glam::Vec2>,
}

impl CountingEmitter {
    pub fn make(_cfg: &FxConfig, _seed: u64) -> Self {
        Self::default()
    }
}

impl CursorEmitter for CountingEmitter {
    fn update(&mut self, _surface: &mut dyn Surface, anchor: glam::Vec2) {
        self.updates += 1;
        self.last_anchor = Some(anchor);
    }

    fn particle_count(&self) -> usize {
        self.updates
    }
}
