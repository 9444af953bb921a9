//! Discocube record and configuration types.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::adjacency::{Adjacency, Edge, EdgeAdjacency};
use crate::coloring::Coloring;
use crate::lattice::Point3;

/// Point → position in the ordered vertex sequence.
pub type VertexIndex = HashMap<Point3, usize>;
/// z → subgraph induced on the vertices of that layer (keys are global indices).
pub type Strata = BTreeMap<i32, BTreeMap<usize, BTreeSet<usize>>>;

/// Which z layers `stratify` keeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrataSelect {
    /// Layers strictly below the origin. The coordinate range is symmetric
    /// about 0, so this keeps one layer of each mirrored pair.
    #[default]
    Negative,
    /// Every layer.
    All,
}

impl StrataSelect {
    #[inline]
    pub fn keeps(self, z: i32) -> bool {
        match self {
            Self::Negative => z < 0,
            Self::All => true,
        }
    }
}

/// Discocube build configuration.
#[derive(Clone, Copy, Debug)]
pub struct DcCfg {
    /// Cube half-edge. Vertices sit at odd multiples of `unit`; edges have
    /// length `2·unit`.
    pub unit: i32,
    pub strata: StrataSelect,
}

impl Default for DcCfg {
    fn default() -> Self {
        Self {
            unit: 1,
            strata: StrataSelect::Negative,
        }
    }
}

/// Discocube graph record. Built once by `make_dcgraph`; never mutated.
#[derive(Clone, Debug)]
pub struct Graph {
    pub order: usize,
    pub stages: usize,
    pub unit: i32,
    /// Sorted by (Euclidean distance from origin, x, y, z).
    pub vertices: Vec<Point3>,
    pub index: VertexIndex,
    /// Canonical `(min, max)` edges, sorted.
    pub edges: Vec<Edge>,
    pub adjacency: Adjacency,
    pub edge_adjacency: EdgeAdjacency,
    /// L1 distance of each vertex from the origin.
    pub weights: Vec<i32>,
    pub coloring: Coloring,
    pub strata: Strata,
}

impl Graph {
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }
}
