//! Bounded position history used to draw the orbit path

use crate::physics::math::Vector;
use std::collections::VecDeque;

/// Default number of positions kept for drawing the path
pub const DEFAULT_TRAIL_CAPACITY: usize = 1000;

/// Bounded, chronologically ordered history of past positions.
///
/// Points are appended at the back; once the length exceeds the capacity the
/// oldest point is dropped from the front.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: VecDeque<Vector>,
    capacity: usize,
}

impl Trail {
    /// Creates a trail holding only `origin`. A capacity of zero is treated as one.
    pub fn new(origin: Vector, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut points = VecDeque::with_capacity(capacity + 1);
        points.push_back(origin);
        Self { points, capacity }
    }

    pub fn push(&mut self, position: Vector) {
        self.points.push_back(position);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Replaces the whole history with the single point `origin`
    pub fn reset_to(&mut self, origin: Vector) {
        self.points.clear();
        self.points.push_back(origin);
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

    pub fn oldest(&self) -> Option<Vector> {
        self.points.front().copied()
    }

    pub fn latest(&self) -> Option<Vector> {
        self.points.back().copied()
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Vector> + ExactSizeIterator + '_ {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a Trail {
    type Item = &'a Vector;
    type IntoIter = std::collections::vec_deque::Iter<'a, Vector>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
