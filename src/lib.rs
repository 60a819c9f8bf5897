//! Fillet and chamfer treatment for the corners of PCB edge outlines.
//!
//! Edge drawings are split into line segments, segment pairs sharing an
//! endpoint are located, and each such corner is trimmed back and closed
//! with an arc or a straight cut. Board access and parameter collection are
//! left to the host through [`board::DrawingCollaborator`] and
//! [`params::ParameterSource`].

pub mod board;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod params;

pub use error::{FilletError, Result};
