use crate::error::{GeometryError, Result};
use crate::geometry::{Arc, Segment};
use crate::math::vector_2d::{
    angles_match, normalize_to_length, rotate_90, sign, signed_angle_deg, unsigned_angle_deg,
};
use crate::math::Point;
use crate::params::CornerMode;

/// Shape inserted to replace a corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Treatment {
    Fillet(Arc),
    Chamfer(Segment),
}

/// Result of solving one corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerOutcome {
    /// Both segments were trimmed and the shape must be added to the board.
    Treated(Treatment),
    /// The segments are collinear; nothing changed.
    Collinear,
}

/// Replaces the corner at `point` between `a` and `b` with a fillet or chamfer.
///
/// Both segments end up oriented towards the corner, with their end moved
/// back from `point` by the trim distance. `size` is the fillet radius or the
/// chamfer leg length. On error neither segment is modified.
///
/// # Errors
///
/// Returns a [`GeometryError`] if either segment has zero length, `point`
/// is not an endpoint of both segments, the segments fold back onto each
/// other, or the trim distance is longer than a segment.
pub fn solve_corner(
    a: &mut Segment,
    b: &mut Segment,
    point: Point,
    size: i64,
    mode: CornerMode,
) -> Result<CornerOutcome> {
    let mut first = oriented(a, point)?;
    let mut second = oriented(b, point)?;

    let out_a = first.start - point;
    let out_b = second.start - point;
    let angle = unsigned_angle_deg(&out_a, &out_b)?;

    if angles_match(angle, 180.0) {
        return Ok(CornerOutcome::Collinear);
    }
    if angles_match(angle, 0.0) {
        return Err(GeometryError::Degenerate(format!(
            "segments fold back onto each other at ({}, {})",
            point.x, point.y
        ))
        .into());
    }

    #[allow(clippy::cast_precision_loss)]
    let size_f = size as f64;
    let distance = match mode {
        CornerMode::Fillet => size_f / (angle / 2.0).to_radians().tan(),
        CornerMode::Chamfer => size_f,
    };
    check_trim(&first, distance)?;
    check_trim(&second, distance)?;

    let new_a = point + normalize_to_length(&out_a, distance)?;
    let new_b = point + normalize_to_length(&out_b, distance)?;
    if new_a == first.start || new_b == second.start {
        let short = if new_a == first.start { &first } else { &second };
        return Err(too_long(short, distance).into());
    }

    let treatment = match mode {
        CornerMode::Fillet => {
            // Rotate the direction A was shortened in, towards the inside of the corner.
            let toward_corner = normalize_to_length(&(point - first.start), size_f)?;
            let turn = sign(signed_angle_deg(&out_a, &out_b));
            let center = new_a + rotate_90(&toward_corner, turn);
            Treatment::Fillet(Arc::minor(center, new_a, new_b, first.width, first.layer)?)
        }
        CornerMode::Chamfer => {
            Treatment::Chamfer(Segment::new(new_a, new_b, first.width, first.layer))
        }
    };

    first.end = new_a;
    second.end = new_b;
    *a = first;
    *b = second;
    Ok(CornerOutcome::Treated(treatment))
}

/// Returns a copy of `segment` ending at `point`.
fn oriented(segment: &Segment, point: Point) -> Result<Segment> {
    if segment.is_degenerate() {
        return Err(GeometryError::ZeroLengthSegment(segment.start).into());
    }
    let mut s = *segment;
    if s.start == point {
        s.flip();
    }
    if s.end != point {
        return Err(GeometryError::CornerMismatch { point }.into());
    }
    Ok(s)
}

/// A trim must leave a segment of non-zero length behind.
fn check_trim(segment: &Segment, distance: f64) -> Result<()> {
    if !distance.is_finite() || distance.round() >= segment.length() {
        return Err(too_long(segment, distance).into());
    }
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn too_long(segment: &Segment, distance: f64) -> GeometryError {
    GeometryError::TrimTooLong {
        distance: if distance.is_finite() {
            distance.round() as i64
        } else {
            i64::MAX
        },
        length: segment.length().floor() as i64,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FilletError;
    use crate::geometry::Layer;
    use crate::math::vector_2d::magnitude;
    use approx::assert_abs_diff_eq;

    fn seg(x0: i64, y0: i64, x1: i64, y1: i64) -> Segment {
        Segment::new(Point::new(x0, y0), Point::new(x1, y1), 150, Layer::EdgeCuts)
    }

    fn fillet_arc(outcome: CornerOutcome) -> Arc {
        match outcome {
            CornerOutcome::Treated(Treatment::Fillet(arc)) => arc,
            other => panic!("expected fillet, got {other:?}"),
        }
    }

    #[test]
    fn right_angle_fillet() {
        let mut a = seg(0, 0, 100, 0);
        let mut b = seg(100, 0, 100, 100);
        let arc = fillet_arc(
            solve_corner(&mut a, &mut b, Point::new(100, 0), 20, CornerMode::Fillet).unwrap(),
        );

        assert_eq!(a.end, Point::new(80, 0));
        assert_eq!(b.start, Point::new(100, 100));
        assert_eq!(b.end, Point::new(100, 20));
        assert_eq!(arc.center, Point::new(80, 20));
        assert_abs_diff_eq!(arc.sweep_deg(), 90.0, epsilon = 1e-9);
        assert_eq!(arc.width, 150);
    }

    #[test]
    fn fillet_center_is_inside_for_either_turn() {
        // Same corner with the segments swapped turns the other way.
        let mut a = seg(100, 0, 100, 100);
        let mut b = seg(0, 0, 100, 0);
        let arc = fillet_arc(
            solve_corner(&mut a, &mut b, Point::new(100, 0), 20, CornerMode::Fillet).unwrap(),
        );
        assert_eq!(arc.center, Point::new(80, 20));
    }

    #[test]
    fn acute_corner_fillet_is_tangent() {
        let radius = 10_000;
        let mut a = seg(0, 0, 1_000_000, 0);
        let mut b = seg(0, 0, 500_000, 866_025);
        let arc = fillet_arc(
            solve_corner(&mut a, &mut b, Point::new(0, 0), radius, CornerMode::Fillet).unwrap(),
        );

        // Trim distance for a 60 degree corner is r / tan(30 deg).
        let expected = 10_000.0 * 3.0_f64.sqrt();
        assert_abs_diff_eq!(magnitude(&a.end.coords), expected, epsilon = 1.0);
        assert_abs_diff_eq!(magnitude(&b.end.coords), expected, epsilon = 1.0);
        assert_abs_diff_eq!(arc.radius(), 10_000.0, epsilon = 2.0);
        assert_abs_diff_eq!(arc.end_radius(), 10_000.0, epsilon = 2.0);
        assert_abs_diff_eq!(arc.sweep_deg(), 120.0, epsilon = 0.05);
        assert!(arc.is_minor());
    }

    #[test]
    fn obtuse_corner_fillet_is_minor_arc() {
        let mut a = seg(-1_000_000, 0, 0, 0);
        let mut b = seg(0, 0, 1_000_000, 400_000);
        let arc = fillet_arc(
            solve_corner(&mut a, &mut b, Point::new(0, 0), 50_000, CornerMode::Fillet).unwrap(),
        );
        assert!(arc.is_minor());
        assert_abs_diff_eq!(arc.radius(), 50_000.0, epsilon = 2.0);
        assert_abs_diff_eq!(arc.end_radius(), 50_000.0, epsilon = 2.0);
    }

    #[test]
    fn right_angle_chamfer() {
        let mut a = seg(0, 0, 100, 0);
        let mut b = seg(100, 100, 100, 0);
        let outcome =
            solve_corner(&mut a, &mut b, Point::new(100, 0), 10, CornerMode::Chamfer).unwrap();
        let CornerOutcome::Treated(Treatment::Chamfer(cut)) = outcome else {
            panic!("expected chamfer, got {outcome:?}");
        };
        assert_eq!(a.end, Point::new(90, 0));
        assert_eq!(b.end, Point::new(100, 10));
        assert_eq!(cut.start, Point::new(90, 0));
        assert_eq!(cut.end, Point::new(100, 10));
        assert_abs_diff_eq!(cut.length(), 10.0 * 2.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn collinear_segments_are_untouched() {
        let mut a = seg(0, 0, 100, 0);
        let mut b = seg(100, 0, 200, 0);
        let before = (a, b);
        for mode in [CornerMode::Fillet, CornerMode::Chamfer] {
            let outcome = solve_corner(&mut a, &mut b, Point::new(100, 0), 20, mode).unwrap();
            assert_eq!(outcome, CornerOutcome::Collinear);
            assert_eq!((a, b), before);
        }
    }

    #[test]
    fn mismatched_point_is_rejected() {
        let mut a = seg(0, 0, 100, 0);
        let mut b = seg(100, 0, 100, 100);
        let before = (a, b);
        let err = solve_corner(&mut a, &mut b, Point::new(50, 0), 20, CornerMode::Fillet);
        assert!(matches!(
            err,
            Err(FilletError::Geometry(GeometryError::CornerMismatch { .. }))
        ));
        assert_eq!((a, b), before);
    }

    #[test]
    fn zero_length_segment_is_rejected() {
        let mut a = seg(100, 0, 100, 0);
        let mut b = seg(100, 0, 100, 100);
        let err = solve_corner(&mut a, &mut b, Point::new(100, 0), 20, CornerMode::Fillet);
        assert!(matches!(
            err,
            Err(FilletError::Geometry(GeometryError::ZeroLengthSegment(_)))
        ));
    }

    #[test]
    fn oversized_radius_is_rejected() {
        let mut a = seg(0, 0, 100, 0);
        let mut b = seg(100, 0, 100, 30);
        let before = (a, b);
        let err = solve_corner(&mut a, &mut b, Point::new(100, 0), 50, CornerMode::Fillet);
        assert!(matches!(
            err,
            Err(FilletError::Geometry(GeometryError::TrimTooLong { .. }))
        ));
        assert_eq!((a, b), before);
    }

    #[test]
    fn trim_of_whole_segment_is_rejected() {
        let mut a = seg(0, 0, 100, 0);
        let mut b = seg(100, 0, 100, 20);
        let before = (a, b);
        let err = solve_corner(&mut a, &mut b, Point::new(100, 0), 20, CornerMode::Fillet);
        assert!(matches!(
            err,
            Err(FilletError::Geometry(GeometryError::TrimTooLong {
                distance: 20,
                length: 20
            }))
        ));
        assert_eq!((a, b), before);
    }

    #[test]
    fn folded_segments_are_rejected() {
        let mut a = seg(0, 0, 100, 0);
        let mut b = seg(100, 0, 50, 0);
        let err = solve_corner(&mut a, &mut b, Point::new(100, 0), 5, CornerMode::Chamfer);
        assert!(matches!(
            err,
            Err(FilletError::Geometry(GeometryError::Degenerate(_)))
        ));
    }
}
