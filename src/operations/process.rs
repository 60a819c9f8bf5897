use std::collections::HashSet;

use tracing::{debug, warn};

use crate::board::{Drawing, DrawingCollaborator, DrawingId, Origin};
use crate::error::{FilletError, GeometryError, Result};
use crate::geometry::Segment;
use crate::math::Point;
use crate::params::{FilletParams, ParameterSource, Selection};

use super::detect::{endpoint_valence, find_corners};
use super::normalize::{normalize, EdgeSegment};
use super::solve::{solve_corner, CornerOutcome, Treatment};

/// A corner that could not be treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CornerFailure {
    pub first: DrawingId,
    pub second: DrawingId,
    pub point: Point,
    pub error: GeometryError,
}

/// Summary of one corner treatment pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessReport {
    /// Edge segments taken into account after normalization.
    pub segments: usize,
    /// Corners detected between those segments.
    pub corners: usize,
    /// Corners replaced by an arc or chamfer.
    pub treated: usize,
    /// Corners left alone because the segments are collinear.
    pub collinear: usize,
    /// Arcs and chamfer segments added to the board.
    pub added: Vec<DrawingId>,
    /// Corners skipped because of a geometric problem.
    pub failures: Vec<CornerFailure>,
}

impl ProcessReport {
    /// Returns whether every detected corner was either treated or collinear.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Fillets or chamfers every corner of a board's edge outline.
///
/// Rectangles and polygons on the edge layer are first split into line
/// drawings. Each pair of lines sharing an endpoint is then trimmed back and
/// joined by an arc or a straight cut. Corners that cannot be solved are
/// recorded in the report and the pass carries on with the rest.
#[derive(Debug, Clone)]
pub struct FilletOutline {
    params: FilletParams,
}

impl FilletOutline {
    /// Creates a new `FilletOutline` operation.
    #[must_use]
    pub fn new(params: FilletParams) -> Self {
        Self { params }
    }

    /// Creates the operation from whatever front end collected the settings.
    #[must_use]
    pub fn from_source<S: ParameterSource + ?Sized>(source: &S) -> Self {
        Self::new(source.params())
    }

    /// Runs the pass against `board`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error before touching the board if the size is
    /// not positive, or a board error if the collaborator rejects an update.
    /// Per-corner geometric problems are reported in [`ProcessReport::failures`].
    pub fn execute<B>(&self, board: &mut B) -> Result<ProcessReport>
    where
        B: DrawingCollaborator + ?Sized,
    {
        self.params.validate()?;

        let candidates = select_candidates(board, &self.params.selection)?;
        let edges = normalize(board, &candidates)?;
        let mut segments: Vec<_> = edges.iter().map(|e| e.segment).collect();

        let corners = find_corners(&segments);
        let valence = endpoint_valence(&segments);
        debug!(
            candidates = candidates.len(),
            segments = segments.len(),
            corners = corners.len(),
            mode = ?self.params.mode,
            size = self.params.size,
            "treating outline corners"
        );

        let mut report = ProcessReport {
            segments: segments.len(),
            corners: corners.len(),
            ..ProcessReport::default()
        };

        for corner in &corners {
            let first = edges[corner.first].id;
            let second = edges[corner.second].id;

            let count = valence.get(&corner.point).copied().unwrap_or_default();
            if count > 2 {
                record_failure(
                    &mut report,
                    first,
                    second,
                    corner.point,
                    GeometryError::AmbiguousCorner {
                        point: corner.point,
                        count,
                    },
                );
                continue;
            }

            let (head, tail) = segments.split_at_mut(corner.second);
            let outcome = solve_corner(
                &mut head[corner.first],
                &mut tail[0],
                corner.point,
                self.params.size,
                self.params.mode,
            );

            match outcome {
                Ok(CornerOutcome::Treated(treatment)) => {
                    let drawing = match treatment {
                        Treatment::Fillet(arc) => Drawing::arc(&arc),
                        Treatment::Chamfer(cut) => Drawing::segment(&cut),
                    };
                    let id = board.add(drawing.with_origin(Origin::CornerTreatment));
                    report.added.push(id);
                    report.treated += 1;
                }
                Ok(CornerOutcome::Collinear) => {
                    debug!(x = corner.point.x, y = corner.point.y, "collinear corner left as is");
                    report.collinear += 1;
                }
                Err(FilletError::Geometry(error)) => {
                    record_failure(&mut report, first, second, corner.point, error);
                }
                Err(other) => return Err(other),
            }
        }

        write_back(board, &edges, &segments)?;

        debug!(
            treated = report.treated,
            collinear = report.collinear,
            failed = report.failures.len(),
            "outline pass finished"
        );
        Ok(report)
    }
}

/// Runs one corner treatment pass with the given parameters.
///
/// # Errors
///
/// See [`FilletOutline::execute`].
pub fn process_outline<B>(board: &mut B, params: &FilletParams) -> Result<ProcessReport>
where
    B: DrawingCollaborator + ?Sized,
{
    FilletOutline::new(params.clone()).execute(board)
}

fn select_candidates<B>(board: &B, selection: &Selection) -> Result<Vec<DrawingId>>
where
    B: DrawingCollaborator + ?Sized,
{
    match selection {
        Selection::All => Ok(board.drawing_ids()),
        Selection::Selected => {
            let mut ids = Vec::new();
            for id in board.drawing_ids() {
                if board.drawing(id)?.selected {
                    ids.push(id);
                }
            }
            Ok(ids)
        }
        Selection::Only(ids) => {
            // A repeated id would expand a rectangle twice or pair a line with itself.
            let mut seen = HashSet::new();
            let unique: Vec<_> = ids.iter().copied().filter(|id| seen.insert(*id)).collect();
            for &id in &unique {
                board.drawing(id)?;
            }
            Ok(unique)
        }
    }
}

fn record_failure(
    report: &mut ProcessReport,
    first: DrawingId,
    second: DrawingId,
    point: Point,
    error: GeometryError,
) {
    warn!(?first, ?second, x = point.x, y = point.y, %error, "corner skipped");
    report.failures.push(CornerFailure {
        first,
        second,
        point,
        error,
    });
}

fn write_back<B>(board: &mut B, edges: &[EdgeSegment], segments: &[Segment]) -> Result<()>
where
    B: DrawingCollaborator + ?Sized,
{
    for (edge, segment) in edges.iter().zip(segments) {
        if edge.segment != *segment {
            board.set_segment(edge.id, segment.start, segment.end)?;
        }
    }
    Ok(())
}
