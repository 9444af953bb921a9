//! Rectangular grid lattices (2D, extruded 3D) and grid-graph records.
//!
//! Nodes are indexed row-major: `n = iy·x + ix` in 2D, plus `iz·x·y` per layer
//! in 3D. Boundary nodes only link to in-bounds neighbours; nothing wraps.

mod graph;
mod lattice;

pub use graph::{grid_startpos, grid_vertices, make_gridgraph, GridCfg, GridGraph};
pub use lattice::{grid_lattice_2d, grid_lattice_3d, grid_lattices, GridLattice};
