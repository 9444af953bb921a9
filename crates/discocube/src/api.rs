//! Curated internal API (UNSTABLE).
//!
//! A convenience surface for the CLI and the Python bindings. Breaking
//! changes are allowed; prefer these re-exports over deep module paths.

// Lattice primitives
pub use crate::lattice::{
    axis_vectors, basis_vectors, make_cube, Axis, AxisVectors, Point2, Point3,
};
// Valid orders
pub use crate::orders::{edge_count_at, is_valid_order, order_at, stage_count, uon};
// Shared graph builders
pub use crate::adjacency::{
    canonical_edges, make_adjacency, make_edges_adjacency, Adjacency, Edge, EdgeAdjacency,
};
pub use crate::coloring::{make_coloring, Coloring};
// Discocube
pub use crate::dc::{
    make_dcgraph, make_edges, make_vertices, make_vi_map, make_weights, stratify, DcCfg, Graph,
    Strata, StrataSelect,
};
// Grids
pub use crate::grid::{
    grid_lattice_2d, grid_lattice_3d, grid_lattices, grid_startpos, grid_vertices,
    make_gridgraph, GridCfg, GridGraph, GridLattice,
};
pub use crate::error::GraphError;
