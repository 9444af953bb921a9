//! Error taxonomy shared by all builders.

use std::fmt;

/// Fatal input or precondition failure reported by a top-level builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// The requested order is not a member of the valid-order sequence.
    InvalidOrder { order: usize },
    /// Edge-length unit (or grid cell size) must be strictly positive.
    InvalidUnit { unit: i32 },
    /// Grid dimensions must be strictly positive.
    InvalidDimensions { x: usize, y: usize, z: Option<usize> },
    /// A graph without vertices has no coloring.
    EmptyGraph,
    /// The coloring closure stopped before reaching every vertex.
    Disconnected { reached: usize, total: usize },
    /// An edge joins two vertices forced into the same color class.
    NonBipartite { u: usize, v: usize },
}

impl GraphError {
    /// True for the precondition failures of the bipartite colorer.
    pub fn is_coloring_precondition(&self) -> bool {
        matches!(self, Self::Disconnected { .. } | Self::NonBipartite { .. })
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOrder { order } => {
                write!(f, "order {order} is not a valid discocube order")
            }
            Self::InvalidUnit { unit } => write!(f, "unit must be positive (got {unit})"),
            Self::InvalidDimensions { x, y, z } => match z {
                Some(z) => write!(f, "grid dimensions must be positive (got {x}x{y}x{z})"),
                None => write!(f, "grid dimensions must be positive (got {x}x{y})"),
            },
            Self::EmptyGraph => write!(f, "graph has no vertices"),
            Self::Disconnected { reached, total } => write!(
                f,
                "graph is disconnected: coloring reached {reached} of {total} vertices"
            ),
            Self::NonBipartite { u, v } => {
                write!(f, "graph is not bipartite: edge ({u}, {v}) joins equal colors")
            }
        }
    }
}

impl std::error::Error for GraphError {}
