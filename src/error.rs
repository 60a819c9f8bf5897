use thiserror::Error;

use crate::math::Point;

/// Top-level error type for outline corner treatment.
#[derive(Debug, Error)]
pub enum FilletError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("segment has zero length at ({}, {})", .0.x, .0.y)]
    ZeroLengthSegment(Point),

    #[error("point ({}, {}) is not a shared endpoint of both segments", .point.x, .point.y)]
    CornerMismatch { point: Point },

    #[error("trim distance {distance} exceeds remaining segment length {length}")]
    TrimTooLong { distance: i64, length: i64 },

    #[error("{count} segment endpoints meet at ({}, {})", .point.x, .point.y)]
    AmbiguousCorner { point: Point, count: usize },
}

/// Errors in the corner treatment parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("corner size must be positive, got {0}")]
    NonPositiveSize(i64),

    #[error("corner size {value} is out of range [{min}, {max}]")]
    SizeOutOfRange { value: f64, min: f64, max: f64 },
}

/// Errors raised by the drawing collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("drawing is not a line segment")]
    NotASegment,
}

/// Convenience type alias for results using [`FilletError`].
pub type Result<T> = std::result::Result<T, FilletError>;
