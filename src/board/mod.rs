pub mod drawing;

pub use drawing::{Drawing, DrawingId, Origin, Shape};

use crate::error::BoardError;
use crate::geometry::{Arc, Segment};
use crate::math::Point;
use slotmap::SlotMap;

/// Access to the drawings of a board.
///
/// The corner treatment only needs to list, add and remove primitives and to
/// move the endpoints of an existing line. Hosts wrap their own board model
/// behind this trait; [`DrawingStore`] is the in-memory implementation.
pub trait DrawingCollaborator {
    /// Returns the ids of all drawings currently on the board.
    fn drawing_ids(&self) -> Vec<DrawingId>;

    /// Returns the drawing for `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no drawing has this id.
    fn drawing(&self, id: DrawingId) -> Result<&Drawing, BoardError>;

    /// Adds a drawing and returns its id.
    fn add(&mut self, drawing: Drawing) -> DrawingId;

    /// Removes a drawing and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if no drawing has this id.
    fn remove(&mut self, id: DrawingId) -> Result<Drawing, BoardError>;

    /// Moves the endpoints of an existing line drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if no drawing has this id or it is not a line.
    fn set_segment(&mut self, id: DrawingId, start: Point, end: Point) -> Result<(), BoardError>;
}

/// In-memory arena of board drawings.
///
/// Drawings are addressed by generational ids, so removing a rectangle
/// never invalidates the ids of the segments that replaced it.
#[derive(Debug, Default)]
pub struct DrawingStore {
    drawings: SlotMap<DrawingId, Drawing>,
}

impl DrawingStore {
    /// Creates a new, empty drawing store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of drawings on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drawings.len()
    }

    /// Returns whether the board has no drawings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drawings.is_empty()
    }

    /// Iterates over all drawings with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (DrawingId, &Drawing)> {
        self.drawings.iter()
    }

    /// Returns all line drawings as segments.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        self.drawings.values().filter_map(Drawing::as_segment).collect()
    }

    /// Returns all arc drawings.
    #[must_use]
    pub fn arcs(&self) -> Vec<Arc> {
        self.drawings.values().filter_map(Drawing::as_arc).collect()
    }
}

impl DrawingCollaborator for DrawingStore {
    fn drawing_ids(&self) -> Vec<DrawingId> {
        self.drawings.keys().collect()
    }

    fn drawing(&self, id: DrawingId) -> Result<&Drawing, BoardError> {
        self.drawings
            .get(id)
            .ok_or_else(|| BoardError::EntityNotFound("drawing".into()))
    }

    fn add(&mut self, drawing: Drawing) -> DrawingId {
        self.drawings.insert(drawing)
    }

    fn remove(&mut self, id: DrawingId) -> Result<Drawing, BoardError> {
        self.drawings
            .remove(id)
            .ok_or_else(|| BoardError::EntityNotFound("drawing".into()))
    }

    fn set_segment(&mut self, id: DrawingId, start: Point, end: Point) -> Result<(), BoardError> {
        let drawing = self
            .drawings
            .get_mut(id)
            .ok_or_else(|| BoardError::EntityNotFound("drawing".into()))?;
        match &mut drawing.shape {
            Shape::Segment { start: s, end: e } => {
                *s = start;
                *e = end;
                Ok(())
            }
            _ => Err(BoardError::NotASegment),
        }
    }
}
