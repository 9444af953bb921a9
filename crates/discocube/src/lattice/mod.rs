//! Integer lattice primitives: points, basis displacements and unit cubes.
//!
//! Coordinates stay integral: a cube of half-edge `unit` has its corners at
//! `origin ± unit` per axis, and neighbouring cube centres (and neighbouring
//! vertices) are `2·unit` apart.

mod cube;
mod types;

pub use cube::{axis_vectors, basis_vectors, make_cube};
pub use types::{l1_norm, sq_norm, Axis, AxisVectors, Point2, Point3};
