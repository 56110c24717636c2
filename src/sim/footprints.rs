//! Decorative footprint trail
//!
//! A bounded FIFO of world positions. Entries never expire on their own;
//! the oldest one is dropped once the trail grows past its capacity.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::FOOTPRINT_TRAIL_LENGTH;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootprintTrail {
    capacity: usize,
    points: VecDeque<Vec2>,
}

impl Default for FootprintTrail {
    fn default() -> Self {
        Self::with_capacity(FOOTPRINT_TRAIL_LENGTH)
    }
}

impl FootprintTrail {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            points: VecDeque::with_capacity(capacity + 1),
        }
    }

    /// Append a footprint, evicting the oldest if over capacity.
    /// Returns the evicted point, if any.
    pub fn push(&mut self, pos: Vec2) -> Option<Vec2> {
        self.points.push_back(pos);
        if self.points.len() > self.capacity {
            self.points.pop_front()
        } else {
            None
        }
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

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }

    pub fn oldest(&self) -> Option<Vec2> {
        self.points.front().copied()
    }

    pub fn newest(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
