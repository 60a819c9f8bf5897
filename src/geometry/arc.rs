use crate::error::Result;
use crate::math::vector_2d::{
    angles_match, magnitude, round_angle, signed_angle_deg, unsigned_angle_deg,
};
use crate::math::Point;

use super::Layer;

/// A circular arc on the integer grid.
///
/// The arc runs counter-clockwise from `start` to `end` around `center`.
/// Arcs built with [`Arc::minor`] always sweep at most 180 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc {
    pub center: Point,
    pub start: Point,
    pub end: Point,
    pub width: i64,
    pub layer: Layer,
}

impl Arc {
    /// Creates the minor arc through `a` and `b` around `center`.
    ///
    /// The endpoints are ordered so that the counter-clockwise sweep from
    /// `start` to `end` matches the unsigned angle between them.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::GeometryError::ZeroVector`] if either endpoint coincides
    /// with the center.
    pub fn minor(center: Point, a: Point, b: Point, width: i64, layer: Layer) -> Result<Self> {
        let mut arc = Self {
            center,
            start: a,
            end: b,
            width,
            layer,
        };
        let expected = unsigned_angle_deg(&(a - center), &(b - center))?;
        if !angles_match(expected, arc.sweep_deg()) {
            std::mem::swap(&mut arc.start, &mut arc.end);
        }
        Ok(arc)
    }

    /// Counter-clockwise sweep from start to end in degrees, in `[0, 360)`.
    #[must_use]
    pub fn sweep_deg(&self) -> f64 {
        let sweep = signed_angle_deg(&(self.start - self.center), &(self.end - self.center));
        if sweep < 0.0 {
            sweep + 360.0
        } else {
            sweep
        }
    }

    /// Distance from the center to the start point.
    #[must_use]
    pub fn radius(&self) -> f64 {
        magnitude(&(self.start - self.center))
    }

    /// Distance from the center to the end point.
    ///
    /// Differs from [`Arc::radius`] only by grid rounding.
    #[must_use]
    pub fn end_radius(&self) -> f64 {
        magnitude(&(self.end - self.center))
    }

    /// Returns whether the arc is a minor arc (sweep of at most 180 degrees).
    #[must_use]
    pub fn is_minor(&self) -> bool {
        round_angle(self.sweep_deg()) <= 180.0
    }
}
