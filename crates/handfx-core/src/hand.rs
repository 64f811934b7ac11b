//! Hand landmark model as produced by the external vision detector.
//!
//! Coordinates are normalized to the capture frame (`[0, 1]` on both axes,
//! `y` growing downwards). A [`Hand`] always holds exactly
//! [`LANDMARKS_PER_HAND`] points, addressed by anatomical role.

use crate::error::FxError;
use glam::Vec2;
use smallvec::SmallVec;

pub const LANDMARKS_PER_HAND: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_TIP: usize = 20;

/// Palm centre used to place energy fields.
pub const PALM_CENTER: usize = MIDDLE_MCP;

/// Wrist plus the five fingertips; drawn larger by the overlays.
pub const IMPORTANT_LANDMARKS: [usize; 6] =
    [WRIST, THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Project onto a surface of the given pixel size.
    #[inline]
    pub fn to_px(&self, width: f32, height: f32) -> Vec2 {
        Vec2::new(self.x * width, self.y * height)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hand {
    landmarks: [Landmark; LANDMARKS_PER_HAND],
}

impl Hand {
    pub fn new(landmarks: [Landmark; LANDMARKS_PER_HAND]) -> Self {
        Self { landmarks }
    }

    /// Build a hand from a detector list, rejecting lists of the wrong length.
    pub fn from_landmarks(points: &[Landmark]) -> Result<Self, FxError> {
        let landmarks: [Landmark; LANDMARKS_PER_HAND] =
            points.try_into().map_err(|_| FxError::LandmarkCount {
                expected: LANDMARKS_PER_HAND,
                found: points.len(),
            })?;
        Ok(Self { landmarks })
    }

    #[inline]
    pub fn landmark(&self, index: usize) -> &Landmark {
        &self.landmarks[index]
    }

    #[inline]
    pub fn landmarks(&self) -> &[Landmark; LANDMARKS_PER_HAND] {
        &self.landmarks
    }

    pub fn index_tip(&self) -> &Landmark {
        &self.landmarks[INDEX_TIP]
    }

    pub fn palm_center(&self) -> &Landmark {
        &self.landmarks[PALM_CENTER]
    }
}

/// Pixel-space index-fingertip position of one tracked hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandAnchor {
    pub pos: Vec2,
    pub hand_index: usize,
}

pub type Anchors = SmallVec<[HandAnchor; 4]>;

/// Index-fingertip anchors of every hand, in detector order.
pub fn anchors_for(hands: &[Hand], width: f32, height: f32) -> Anchors {
    hands
        .iter()
        .enumerate()
        .map(|(hand_index, hand)| HandAnchor {
            pos: hand.index_tip().to_px(width, height),
            hand_index,
        })
        .collect()
}
