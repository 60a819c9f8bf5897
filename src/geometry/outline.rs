use crate::math::Point;

use super::{Layer, Segment};

/// A closed ring of points.
///
/// The first point is repeated as the last one, so consecutive pairs
/// enumerate every edge of the ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    points: Vec<Point>,
}

impl Outline {
    /// Creates a closed outline from boundary points.
    ///
    /// The ring is closed by repeating the first point unless the caller
    /// already did so.
    #[must_use]
    pub fn new(mut points: Vec<Point>) -> Self {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if points.len() > 1 && first != last {
                points.push(first);
            }
        }
        Self { points }
    }

    /// Creates the outline of an axis-aligned rectangle from two opposite corners.
    ///
    /// Corners are visited as `start`, `(end.x, start.y)`, `end`, `(start.x, end.y)`.
    #[must_use]
    pub fn from_rect_corners(start: Point, end: Point) -> Self {
        Self::new(vec![
            start,
            Point::new(end.x, start.y),
            end,
            Point::new(start.x, end.y),
        ])
    }

    /// Returns the ring points, closing point included.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of edges in the ring.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Splits the ring into one segment per edge.
    #[must_use]
    pub fn to_segments(&self, width: i64, layer: Layer) -> Vec<Segment> {
        self.points
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1], width, layer))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closes_open_ring() {
        let outline = Outline::new(vec![Point::new(0, 0), Point::new(10, 0), Point::new(0, 10)]);
        assert_eq!(outline.points().len(), 4);
        assert_eq!(outline.points()[3], Point::new(0, 0));
        assert_eq!(outline.edge_count(), 3);
    }

    #[test]
    fn keeps_already_closed_ring() {
        let outline = Outline::new(vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(0, 10),
            Point::new(0, 0),
        ]);
        assert_eq!(outline.edge_count(), 3);
    }

    #[test]
    fn rectangle_winding() {
        let outline = Outline::from_rect_corners(Point::new(0, 0), Point::new(100, 50));
        assert_eq!(
            outline.points(),
            &[
                Point::new(0, 0),
                Point::new(100, 0),
                Point::new(100, 50),
                Point::new(0, 50),
                Point::new(0, 0),
            ]
        );
    }

    #[test]
    fn segments_chain_end_to_start() {
        let outline = Outline::from_rect_corners(Point::new(0, 0), Point::new(100, 50));
        let segments = outline.to_segments(150, Layer::EdgeCuts);
        assert_eq!(segments.len(), 4);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(segments[3].end, segments[0].start);
        assert!(segments.iter().all(|s| s.width == 150 && s.layer == Layer::EdgeCuts));
    }

    #[test]
    fn empty_outline_has_no_segments() {
        let outline = Outline::new(Vec::new());
        assert!(outline.to_segments(1, Layer::EdgeCuts).is_empty());
    }
}
