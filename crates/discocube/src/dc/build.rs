//! Vertex generation and edge derivation.

use std::collections::HashSet;

use crate::adjacency::Edge;
use crate::error::GraphError;
use crate::lattice::{basis_vectors, l1_norm, make_cube, sq_norm, Point3};
use crate::orders::stage_count;

use super::types::{DcCfg, VertexIndex};

/// Sorted vertex set of the discocube of `order`.
pub fn make_vertices(order: usize, cfg: DcCfg) -> Result<Vec<Point3>, GraphError> {
    let stages = stage_count(order).ok_or(GraphError::InvalidOrder { order })?;
    check_unit(stages, cfg.unit)?;
    Ok(lattice_vertices(stages, cfg.unit))
}

/// `unit` must be positive and small enough that every coordinate reached
/// while building `stages` stages fits in `i32`.
///
/// The farthest corner sits at `(2·stages − 1)·unit` on an axis and edge
/// derivation probes one basis step (`2·unit`) beyond it; weights sum three
/// such coordinates. Requiring `3·(2·stages + 1)·unit` to fit covers all three.
pub(crate) fn check_unit(stages: usize, unit: i32) -> Result<(), GraphError> {
    let reach = i32::try_from(stages)
        .ok()
        .and_then(|n| n.checked_mul(2))
        .and_then(|n| n.checked_add(1))
        .and_then(|n| n.checked_mul(3))
        .and_then(|n| n.checked_mul(unit));
    match reach {
        Some(_) if unit > 0 => Ok(()),
        _ => Err(GraphError::InvalidUnit { unit }),
    }
}

/// Unchecked core of `make_vertices`: `stages >= 1`, `check_unit(stages, unit)` holds.
pub(crate) fn lattice_vertices(stages: usize, unit: i32) -> Vec<Point3> {
    let basis = basis_vectors(2 * unit);
    // Stage 0 is the origin; stage k holds the points first reached at step k.
    let mut seen: HashSet<Point3> = HashSet::from([Point3::zeros()]);
    let mut frontier = vec![Point3::zeros()];
    for _ in 1..stages {
        let mut next = Vec::with_capacity(frontier.len() * 4);
        for p in &frontier {
            for b in &basis {
                let q = p + b;
                if seen.insert(q) {
                    next.push(q);
                }
            }
        }
        frontier = next;
    }
    let mut verts: HashSet<Point3> = HashSet::with_capacity(seen.len() * 3);
    for &c in &seen {
        verts.extend(make_cube(c, unit));
    }
    let mut out: Vec<Point3> = verts.into_iter().collect();
    out.sort_unstable_by_key(|p| (sq_norm(p), p.x, p.y, p.z));
    tracing::debug!(stages, centres = seen.len(), vertices = out.len(), "vertices");
    out
}

/// Point → index map over the ordered vertex sequence.
pub fn make_vi_map(vertices: &[Point3]) -> VertexIndex {
    vertices.iter().enumerate().map(|(i, &p)| (p, i)).collect()
}

/// Lattice-translation edges, in vertex order.
///
/// Each vertex is translated by the six basis vectors (length `2·unit`) and
/// every translate present in `index` yields a pair. Both `(u, v)` and
/// `(v, u)` appear; see `adjacency::canonical_edges`.
pub fn make_edges(vertices: &[Point3], index: &VertexIndex, unit: i32) -> Vec<Edge> {
    let basis = basis_vectors(2 * unit);
    vertices
        .iter()
        .enumerate()
        .flat_map(|(i, p)| {
            basis
                .iter()
                .filter_map(move |b| index.get(&(p + b)).map(|&j| (i, j)))
        })
        .collect()
}

/// L1 distance of each vertex from the origin.
pub fn make_weights(vertices: &[Point3]) -> Vec<i32> {
    vertices.iter().map(l1_norm).collect()
}
