pub mod detect;
pub mod normalize;
pub mod process;
pub mod solve;

pub use detect::{endpoint_valence, find_corners, Corner};
pub use normalize::{normalize, EdgeSegment};
pub use process::{process_outline, CornerFailure, FilletOutline, ProcessReport};
pub use solve::{solve_corner, CornerOutcome, Treatment};
