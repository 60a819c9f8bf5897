use crate::math::vector_2d::magnitude;
use crate::math::{Point, Vector};

use super::Layer;

/// A straight line segment between two integer points.
///
/// Direction carries no meaning once stored; the corner solver flips
/// segments freely while working on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub width: i64,
    pub layer: Layer,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point, end: Point, width: i64, layer: Layer) -> Self {
        Self {
            start,
            end,
            width,
            layer,
        }
    }

    /// Vector from start to end.
    #[must_use]
    pub fn direction(&self) -> Vector {
        self.end - self.start
    }

    /// Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        magnitude(&self.direction())
    }

    /// Returns whether the segment has zero length.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Swaps start and end in place.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
    }

    /// Returns whether `p` is exactly one of the endpoints.
    #[must_use]
    pub fn has_endpoint(&self, p: &Point) -> bool {
        self.start == *p || self.end == *p
    }

    /// Returns the first endpoint this segment shares exactly with `other`.
    ///
    /// The start point is checked first, so a segment touching `other`
    /// at both ends reports its start.
    #[must_use]
    pub fn shared_endpoint(&self, other: &Segment) -> Option<Point> {
        if other.has_endpoint(&self.start) {
            Some(self.start)
        } else if other.has_endpoint(&self.end) {
            Some(self.end)
        } else {
            None
        }
    }
}
