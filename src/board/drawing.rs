use crate::geometry::{Arc, Layer, Outline, Segment};
use crate::math::Point;

slotmap::new_key_type! {
    /// Unique identifier for a drawing in a drawing store.
    pub struct DrawingId;
}

/// Geometric kind of a drawing primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A straight line segment.
    Segment { start: Point, end: Point },
    /// An axis-aligned rectangle given by two opposite corners.
    Rect { start: Point, end: Point },
    /// A polygon owning one or more closed rings (outer boundary plus holes).
    Polygon { outlines: Vec<Outline> },
    /// A circular arc running counter-clockwise from `start` to `end`.
    Arc { center: Point, start: Point, end: Point },
    /// A full circle.
    Circle { center: Point, radius: i64 },
}

/// Where a drawing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Origin {
    /// Authored on the board.
    #[default]
    Board,
    /// Created by a fillet or chamfer.
    CornerTreatment,
}

/// A drawing primitive held by the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawing {
    pub shape: Shape,
    pub width: i64,
    pub layer: Layer,
    pub selected: bool,
    pub origin: Origin,
}

impl Drawing {
    /// Creates an unselected board-authored drawing.
    #[must_use]
    pub fn new(shape: Shape, width: i64, layer: Layer) -> Self {
        Self {
            shape,
            width,
            layer,
            selected: false,
            origin: Origin::Board,
        }
    }

    /// Creates a line drawing from a segment.
    #[must_use]
    pub fn segment(segment: &Segment) -> Self {
        Self::new(
            Shape::Segment {
                start: segment.start,
                end: segment.end,
            },
            segment.width,
            segment.layer,
        )
    }

    /// Creates an arc drawing.
    #[must_use]
    pub fn arc(arc: &Arc) -> Self {
        Self::new(
            Shape::Arc {
                center: arc.center,
                start: arc.start,
                end: arc.end,
            },
            arc.width,
            arc.layer,
        )
    }

    /// Creates a rectangle drawing.
    #[must_use]
    pub fn rect(start: Point, end: Point, width: i64, layer: Layer) -> Self {
        Self::new(Shape::Rect { start, end }, width, layer)
    }

    /// Creates a polygon drawing.
    #[must_use]
    pub fn polygon(outlines: Vec<Outline>, width: i64, layer: Layer) -> Self {
        Self::new(Shape::Polygon { outlines }, width, layer)
    }

    /// Marks the drawing as selected.
    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Sets the drawing origin.
    #[must_use]
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    /// Returns the line segment view of this drawing, if it is a line.
    #[must_use]
    pub fn as_segment(&self) -> Option<Segment> {
        match self.shape {
            Shape::Segment { start, end } => Some(Segment::new(start, end, self.width, self.layer)),
            _ => None,
        }
    }

    /// Returns the arc view of this drawing, if it is an arc.
    #[must_use]
    pub fn as_arc(&self) -> Option<Arc> {
        match self.shape {
            Shape::Arc { center, start, end } => Some(Arc {
                center,
                start,
                end,
                width: self.width,
                layer: self.layer,
            }),
            _ => None,
        }
    }
}
