pub mod arc;
pub mod outline;
pub mod segment;

pub use arc::Arc;
pub use outline::Outline;
pub use segment::Segment;

/// Drawing layer a shape lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The edge-boundary layer describing the physical board outline.
    EdgeCuts,
    /// Any other layer, identified by the host's layer number.
    Other(u32),
}

impl Layer {
    /// Returns whether this is the edge-boundary layer.
    #[must_use]
    pub fn is_board_edge(self) -> bool {
        self == Self::EdgeCuts
    }
}
