//! Discocube graphs: cube-stacked lattice point clouds of a requested order.
//!
//! Pipeline
//! - `make_vertices`: stage expansion from the origin, cube expansion of every
//!   reached centre, dedup, then the explicit sort key (Euclidean distance,
//!   then x, y, z). The sort is the only source of ordering.
//! - `make_vi_map` / `make_edges`: index map and lattice-translation edges.
//! - shared builders in `crate::adjacency` and `crate::coloring`.
//! - `stratify`: per-z induced subgraphs.
//!
//! `make_dcgraph` runs the whole pipeline and returns a `Graph` record.

mod build;
mod strata;
mod types;

pub use build::{make_edges, make_vertices, make_vi_map, make_weights};
pub use strata::stratify;
pub use types::{DcCfg, Graph, Strata, StrataSelect, VertexIndex};

use crate::adjacency::{canonical_edges, make_adjacency, make_edges_adjacency};
use crate::coloring::make_coloring;
use crate::error::GraphError;
use crate::orders::stage_count;

/// Build the full discocube graph record for `order`.
///
/// Fails with `InvalidOrder` before any expansion if `order` is not in the
/// valid-order sequence, and with `InvalidUnit` for a non-positive unit or one
/// whose coordinates would overflow `i32`.
pub fn make_dcgraph(order: usize, cfg: DcCfg) -> Result<Graph, GraphError> {
    let stages = stage_count(order).ok_or(GraphError::InvalidOrder { order })?;
    build::check_unit(stages, cfg.unit)?;
    let _span = tracing::debug_span!("make_dcgraph", order, stages).entered();
    let vertices = build::lattice_vertices(stages, cfg.unit);
    let index = make_vi_map(&vertices);
    let edges = canonical_edges(&make_edges(&vertices, &index, cfg.unit));
    let adjacency = make_adjacency(vertices.len(), &edges);
    let edge_adjacency = make_edges_adjacency(&adjacency, &edges);
    let weights = make_weights(&vertices);
    let coloring = make_coloring(&adjacency)?;
    let strata = stratify(&adjacency, &vertices, cfg.strata);
    tracing::debug!(
        vertices = vertices.len(),
        edges = edges.len(),
        layers = strata.len(),
        "discocube built"
    );
    Ok(Graph {
        order,
        stages,
        unit: cfg.unit,
        vertices,
        index,
        edges,
        adjacency,
        edge_adjacency,
        weights,
        coloring,
        strata,
    })
}

#[cfg(test)]
mod tests;
