//! z-layer stratification.

use std::collections::{BTreeMap, BTreeSet};

use crate::adjacency::Adjacency;
use crate::lattice::Point3;

use super::types::{Strata, StrataSelect};

/// Partition the graph into the subgraphs induced on each selected z layer.
///
/// Each layer maps its vertices (global indices) to their neighbours within
/// the same layer; on a discocube these are 2D grid graphs.
pub fn stratify(adj: &Adjacency, vertices: &[Point3], select: StrataSelect) -> Strata {
    let mut layers: BTreeMap<i32, BTreeSet<usize>> = BTreeMap::new();
    for (i, p) in vertices.iter().enumerate() {
        if select.keeps(p.z) {
            layers.entry(p.z).or_default().insert(i);
        }
    }
    layers
        .into_iter()
        .map(|(z, nodes)| {
            let sub: BTreeMap<usize, BTreeSet<usize>> = nodes
                .iter()
                .map(|&k| (k, adj[k].intersection(&nodes).copied().collect()))
                .collect();
            (z, sub)
        })
        .collect()
}
