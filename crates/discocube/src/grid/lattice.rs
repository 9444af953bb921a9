//! Boundary-aware adjacency and edges for x×y and x×y×z grids.

use std::collections::{BTreeMap, BTreeSet};

use crate::adjacency::{edges_of, Adjacency, Edge};
use crate::error::GraphError;

/// Adjacency and canonical edges of one rectangular grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridLattice {
    pub x: usize,
    pub y: usize,
    /// `None` for a 2D grid.
    pub z: Option<usize>,
    pub adjacency: Adjacency,
    pub edges: Vec<Edge>,
}

impl GridLattice {
    #[inline]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
    /// Number of nodes in one xy layer.
    #[inline]
    pub fn layer_size(&self) -> usize {
        self.x * self.y
    }
}

fn check_dims(x: usize, y: usize, z: Option<usize>) -> Result<(), GraphError> {
    if x == 0 || y == 0 || z == Some(0) {
        return Err(GraphError::InvalidDimensions { x, y, z });
    }
    Ok(())
}

/// x×y grid.
pub fn grid_lattice_2d(x: usize, y: usize) -> Result<GridLattice, GraphError> {
    check_dims(x, y, None)?;
    Ok(lattice_from(x, y, None, adjacency_2d(x, y)))
}

/// x×y grid extruded into `z` stacked layers.
pub fn grid_lattice_3d(x: usize, y: usize, z: usize) -> Result<GridLattice, GraphError> {
    check_dims(x, y, Some(z))?;
    let a2 = adjacency_2d(x, y);
    Ok(lattice_from(x, y, Some(z), extrude(&a2, x * y, z)))
}

/// Both the 2D grid (key 2) and, when `z` is given, its extrusion (key 3).
pub fn grid_lattices(
    x: usize,
    y: usize,
    z: Option<usize>,
) -> Result<BTreeMap<usize, GridLattice>, GraphError> {
    check_dims(x, y, z)?;
    let a2 = adjacency_2d(x, y);
    let mut out = BTreeMap::new();
    if let Some(z) = z {
        out.insert(3, lattice_from(x, y, Some(z), extrude(&a2, x * y, z)));
    }
    out.insert(2, lattice_from(x, y, None, a2));
    Ok(out)
}

fn lattice_from(x: usize, y: usize, z: Option<usize>, adjacency: Adjacency) -> GridLattice {
    let edges = edges_of(&adjacency);
    tracing::debug!(x, y, z = ?z, nodes = adjacency.len(), edges = edges.len(), "grid lattice");
    GridLattice {
        x,
        y,
        z,
        adjacency,
        edges,
    }
}

fn adjacency_2d(x: usize, y: usize) -> Adjacency {
    let mut adj: Adjacency = vec![BTreeSet::new(); x * y];
    for iy in 0..y {
        for ix in 0..x {
            let n = iy * x + ix;
            let ns = &mut adj[n];
            if ix > 0 {
                ns.insert(n - 1);
            }
            if ix + 1 < x {
                ns.insert(n + 1);
            }
            if iy > 0 {
                ns.insert(n - x);
            }
            if iy + 1 < y {
                ns.insert(n + x);
            }
        }
    }
    adj
}

/// Stack `z` copies of a layer; node `n` links to `n ± layer` when that layer exists.
fn extrude(a2: &Adjacency, layer: usize, z: usize) -> Adjacency {
    let mut adj: Adjacency = Vec::with_capacity(layer * z);
    for iz in 0..z {
        let floor = iz * layer;
        for (m, ns) in a2.iter().enumerate() {
            let n = m + floor;
            let mut out: BTreeSet<usize> = ns.iter().map(|&k| k + floor).collect();
            if iz > 0 {
                out.insert(n - layer);
            }
            if iz + 1 < z {
                out.insert(n + layer);
            }
            adj.push(out);
        }
    }
    adj
}
