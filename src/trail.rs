/// Bounded history of fingertip positions, drawn as a fading line.

use std::collections::VecDeque;

use glam::Vec2;

/// Thickness of the oldest segment before fading.
const MAX_THICKNESS: f32 = 10.0;

/// Ring buffer of the most recent fingertip positions, oldest first.
#[derive(Clone, Debug, PartialEq)]
pub struct FingerTrail {
    points: VecDeque<Vec2>,
    capacity: usize,
}

/// One line of the trail between two consecutive positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailSegment {
    pub from: Vec2,
    pub to: Vec2,
    pub thickness: u32,
}

impl FingerTrail {
    pub fn new(capacity: usize) -> Self {
        FingerTrail {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a position, evicting the oldest once full.
    pub fn push(&mut self, point: Vec2) {
        if self.capacity == 0 {
            return;
        }
        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    pub fn latest(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    /// Consecutive pairs from oldest to newest.  Segment `i` (1-based, named
    /// by its newer endpoint) is `max(1, 10 * (1 - i / len))` pixels thick.
    pub fn segments(&self) -> Vec<TrailSegment> {
        let n = self.points.len();
        (1..n)
            .map(|i| TrailSegment {
                from: self.points[i - 1],
                to: self.points[i],
                thickness: segment_thickness(i, n),
            })
            .collect()
    }
}

pub fn segment_thickness(index: usize, len: usize) -> u32 {
    if len == 0 {
        return 1;
    }
    let t = MAX_THICKNESS * (1.0 - index as f32 / len as f32);
    (t as u32).max(1)
}
