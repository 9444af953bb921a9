//! Discocube graphs and rectangular grid lattices.
//!
//! Builds the vertex set of a cubically stacked 3D lattice of a requested
//! order, then derives edges, adjacency, edge-adjacency, a bipartite coloring
//! and z-layer strata from it. The `grid` module builds the same structures
//! for plain 2D/3D rectangular grids.
//!
//! API Policy
//! - Records are plain structs with public fields. They are built once by a
//!   top-level builder (`make_dcgraph`, `make_gridgraph`, `grid_lattices`) and
//!   never mutated afterwards; rebuild for different input.
//! - Validation happens at builder entry; inner helpers assume valid input.

pub mod adjacency;
pub mod api;
pub mod coloring;
pub mod dc;
pub mod error;
pub mod grid;
pub mod lattice;
pub mod orders;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GraphError;
pub use lattice::{Point2, Point3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::adjacency::{Adjacency, Edge, EdgeAdjacency};
    pub use crate::coloring::{make_coloring, Coloring};
    pub use crate::dc::{make_dcgraph, DcCfg, Graph, StrataSelect};
    pub use crate::error::GraphError;
    pub use crate::grid::{grid_lattices, make_gridgraph, GridCfg, GridGraph, GridLattice};
    pub use crate::lattice::{Point2, Point3};
    pub use crate::orders::{stage_count, uon};
}
