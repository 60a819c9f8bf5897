use tracing::trace;

use crate::board::{Drawing, DrawingCollaborator, DrawingId, Origin, Shape};
use crate::error::Result;
use crate::geometry::{Outline, Segment};

/// A line segment of the board edge together with the drawing that holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSegment {
    pub id: DrawingId,
    pub segment: Segment,
}

/// Expands the candidate edge drawings into plain line segments.
///
/// Rectangles and polygons are replaced on the board by one line drawing per
/// outline edge; existing lines are reused as they are. Drawings off the edge
/// layer, drawings produced by an earlier corner treatment, and kinds other
/// than lines, rectangles and polygons are not candidates and are skipped.
///
/// # Errors
///
/// Returns an error if a candidate id is unknown to the board.
pub fn normalize<B>(board: &mut B, candidates: &[DrawingId]) -> Result<Vec<EdgeSegment>>
where
    B: DrawingCollaborator + ?Sized,
{
    let mut edges = Vec::new();

    for &id in candidates {
        let drawing = board.drawing(id)?.clone();
        if !drawing.layer.is_board_edge() || drawing.origin == Origin::CornerTreatment {
            continue;
        }

        match &drawing.shape {
            Shape::Segment { start, end } => {
                edges.push(EdgeSegment {
                    id,
                    segment: Segment::new(*start, *end, drawing.width, drawing.layer),
                });
            }
            Shape::Rect { start, end } => {
                let outline = Outline::from_rect_corners(*start, *end);
                expand(board, &outline, &drawing, &mut edges);
                board.remove(id)?;
                trace!(?id, "replaced rectangle with segments");
            }
            Shape::Polygon { outlines } => {
                for outline in outlines {
                    expand(board, outline, &drawing, &mut edges);
                }
                board.remove(id)?;
                trace!(?id, rings = outlines.len(), "replaced polygon with segments");
            }
            Shape::Arc { .. } | Shape::Circle { .. } => {
                trace!(?id, "skipping unsupported edge shape");
            }
        }
    }

    Ok(edges)
}

fn expand<B>(board: &mut B, outline: &Outline, source: &Drawing, edges: &mut Vec<EdgeSegment>)
where
    B: DrawingCollaborator + ?Sized,
{
    for segment in outline.to_segments(source.width, source.layer) {
        let id = board.add(Drawing::segment(&segment).with_selected(source.selected));
        edges.push(EdgeSegment { id, segment });
    }
}
