//! Fingertip input.
//!
//! The game only needs index-fingertip positions in viewport pixels.  Where
//! they come from (a hand-pose model, a mouse, a recorded script) is behind
//! [`PoseSource`], so the frame loop never knows which one it is driving.

use std::collections::VecDeque;

use glam::Vec2;

use crate::error::{Error, Result};

// ════════════════════════════════════════════════════════════════════════════
// Hand landmark indices (21-point hand model)
// ════════════════════════════════════════════════════════════════════════════

pub const HAND_LANDMARK_COUNT: usize = 21;
pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;

/// Pixel position of the index fingertip from normalised (0..1) landmarks.
///
/// Pixels are truncated to whole values.  With `mirror` the x axis is flipped
/// so the point matches a selfie-style display.  Returns `None` when the hand
/// has no index tip.
pub fn fingertip_from_landmarks(
    landmarks: &[Vec2],
    width: u32,
    height: u32,
    mirror: bool,
) -> Option<Vec2> {
    let tip = landmarks.get(INDEX_TIP)?;
    let nx = if mirror { 1.0 - tip.x } else { tip.x };
    Some(Vec2::new(
        (nx * width as f32).floor(),
        (tip.y * height as f32).floor(),
    ))
}

/// One fingertip per detected hand, in hand order.
pub fn fingertips_from_hands(
    hands: &[Vec<Vec2>],
    width: u32,
    height: u32,
    mirror: bool,
) -> Vec<Vec2> {
    hands
        .iter()
        .filter_map(|hand| fingertip_from_landmarks(hand, width, height, mirror))
        .collect()
}

// ════════════════════════════════════════════════════════════════════════════
// PoseSource
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can hand the frame loop this tick's fingertips.
pub trait PoseSource {
    /// Zero or more fingertips, or `Error::InputUnavailable` when the source
    /// has nothing for this tick.
    fn fingertips(&mut self) -> Result<Vec<Vec2>>;
}

/// Poll `source`, treating unavailable input as "no fingertips".
pub fn fingertips_or_empty<P: PoseSource + ?Sized>(source: &mut P) -> Vec<Vec2> {
    match source.fingertips() {
        Ok(points) => points,
        Err(err) => {
            log::warn!("{}; continuing with no fingertips", err);
            Vec::new()
        }
    }
}

/// Replays a prepared sequence, one entry per tick.  `None` entries and an
/// exhausted script both report `InputUnavailable`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPose {
    frames: VecDeque<Option<Vec<Vec2>>>,
}

impl ScriptedPose {
    pub fn new(frames: impl IntoIterator<Item = Option<Vec<Vec2>>>) -> Self {
        ScriptedPose {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl PoseSource for ScriptedPose {
    fn fingertips(&mut self) -> Result<Vec<Vec2>> {
        self.frames.pop_front().flatten().ok_or(Error::InputUnavailable)
    }
}
