use std::collections::HashMap;

use crate::geometry::Segment;
use crate::math::Point;

/// Two segments meeting at a shared endpoint.
///
/// `first < second` always holds; both index into the slice passed to
/// [`find_corners`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corner {
    pub first: usize,
    pub second: usize,
    pub point: Point,
}

/// Finds every pair of segments sharing an exact endpoint.
///
/// Pairs are reported in index order. A pair touching at both ends is
/// reported once, at the first segment's start point.
#[must_use]
pub fn find_corners(segments: &[Segment]) -> Vec<Corner> {
    let mut corners = Vec::new();
    for (i, a) in segments.iter().enumerate() {
        for (j, b) in segments.iter().enumerate().skip(i + 1) {
            if let Some(point) = a.shared_endpoint(b) {
                corners.push(Corner {
                    first: i,
                    second: j,
                    point,
                });
            }
        }
    }
    corners
}

/// Counts how many segment endpoints land on each point.
///
/// A well-formed outline has exactly two endpoints at every corner.
#[must_use]
pub fn endpoint_valence(segments: &[Segment]) -> HashMap<Point, usize> {
    let mut valence = HashMap::new();
    for s in segments {
        *valence.entry(s.start).or_insert(0) += 1;
        *valence.entry(s.end).or_insert(0) += 1;
    }
    valence
}
