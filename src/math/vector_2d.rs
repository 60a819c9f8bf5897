//! Integer 2D vector helpers.
//!
//! Inputs are integer board vectors; anything involving a square root or an
//! angle is evaluated in `f64` and rounded back to the integer grid.

use crate::error::{GeometryError, Result};

use super::{Vector, Vector2, ANGLE_TOLERANCE_DEG};

/// Converts an integer vector to its floating-point counterpart.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn to_f64(a: &Vector) -> Vector2 {
    Vector2::new(a.x as f64, a.y as f64)
}

/// Dot product of two vectors.
///
/// Products are taken in `i128`; board-sized `i64` coordinates overflow otherwise.
#[must_use]
pub fn dot(a: &Vector, b: &Vector) -> i128 {
    i128::from(a.x) * i128::from(b.x) + i128::from(a.y) * i128::from(b.y)
}

/// 2D scalar cross product (determinant) `a.x * b.y - a.y * b.x`, in `i128`.
#[must_use]
pub fn cross(a: &Vector, b: &Vector) -> i128 {
    i128::from(a.x) * i128::from(b.y) - i128::from(a.y) * i128::from(b.x)
}

/// Euclidean length of a vector.
#[must_use]
pub fn magnitude(a: &Vector) -> f64 {
    to_f64(a).norm()
}

/// Scales `a` so that its length becomes `length`, rounded to the integer grid.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `a` has zero length.
#[allow(clippy::cast_possible_truncation)]
pub fn normalize_to_length(a: &Vector, length: f64) -> Result<Vector> {
    let mag = magnitude(a);
    if mag <= 0.0 {
        return Err(GeometryError::ZeroVector.into());
    }
    let scaled = to_f64(a) * (length / mag);
    Ok(Vector::new(scaled.x.round() as i64, scaled.y.round() as i64))
}

/// Unsigned angle between two vectors in degrees, in `[0, 180]`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if either vector has zero length.
#[allow(clippy::cast_precision_loss)]
pub fn unsigned_angle_deg(a: &Vector, b: &Vector) -> Result<f64> {
    let denom = magnitude(a) * magnitude(b);
    if denom <= 0.0 {
        return Err(GeometryError::ZeroVector.into());
    }
    // Rounding can push the cosine just outside [-1, 1] for (anti)parallel vectors.
    let cos = (dot(a, b) as f64 / denom).clamp(-1.0, 1.0);
    Ok(cos.acos().to_degrees())
}

/// Signed angle from `a` to `b` in degrees, in `(-180, 180]`.
///
/// Positive when `b` lies counter-clockwise of `a`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn signed_angle_deg(a: &Vector, b: &Vector) -> f64 {
    (cross(a, b) as f64).atan2(dot(a, b) as f64).to_degrees()
}

/// Rotates `a` by 90 degrees.
///
/// A positive `direction` yields `(a.y, -a.x)`, a negative one `(-a.y, a.x)`.
/// A zero direction collapses the vector to zero.
#[must_use]
pub fn rotate_90(a: &Vector, direction: i32) -> Vector {
    match direction.signum() {
        1 => Vector::new(a.y, -a.x),
        -1 => Vector::new(-a.y, a.x),
        _ => Vector::zeros(),
    }
}

/// Sign of `x` as `-1`, `0` or `1`.
#[must_use]
pub fn sign(x: f64) -> i32 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

/// Rounds an angle to the comparison grid used for corner decisions.
#[must_use]
pub fn round_angle(deg: f64) -> f64 {
    (deg * 100.0).round() / 100.0
}

/// Returns whether two angles agree on the comparison grid.
#[must_use]
pub fn angles_match(a: f64, b: f64) -> bool {
    (round_angle(a) - round_angle(b)).abs() < ANGLE_TOLERANCE_DEG / 2.0
}
