pub mod vector_2d;

/// 2D point in board length units (nanometres).
pub type Point = nalgebra::Point2<i64>;

/// 2D vector in board length units (nanometres).
pub type Vector = nalgebra::Vector2<i64>;

/// Floating-point counterpart of [`Vector`], used for intermediate trigonometry.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Tolerance, in degrees, used when comparing corner and arc angles.
///
/// Angles are compared after rounding to two decimal places.
pub const ANGLE_TOLERANCE_DEG: f64 = 0.01;

/// Length units per millimetre.
pub const NM_PER_MM: f64 = 1_000_000.0;

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;
