//! Grid-graph record: lattice, coloring, edge-adjacency and screen placement.

use crate::adjacency::{make_edges_adjacency, Adjacency, Edge, EdgeAdjacency};
use crate::coloring::{make_coloring, Coloring};
use crate::error::GraphError;
use crate::lattice::Point2;

use super::lattice::grid_lattice_2d;

/// Placement of a grid on screen.
#[derive(Clone, Copy, Debug)]
pub struct GridCfg {
    /// Pixel spacing between neighbouring nodes.
    pub cell_size: i32,
    /// Screen width and height in pixels.
    pub screen_size: (i32, i32),
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            cell_size: 2,
            screen_size: (1200, 1200),
        }
    }
}

/// 2D grid-graph record. Built once by `make_gridgraph`; never mutated.
#[derive(Clone, Debug)]
pub struct GridGraph {
    pub x: usize,
    pub y: usize,
    /// Screen position of the top-left node.
    pub startpos: Point2,
    pub adjacency: Adjacency,
    pub edges: Vec<Edge>,
    /// Node positions on screen (cell size, offset by `startpos`).
    pub vertices: Vec<Point2>,
    /// Node positions with spacing 2 at the origin (discocube-compatible).
    pub lattice_vertices: Vec<Point2>,
    pub coloring: Coloring,
    pub edge_adjacency: EdgeAdjacency,
}

/// Top-left corner that centres an `xy` grid of `cell_size` cells on screen.
/// Negative when the grid is larger than the screen.
pub fn grid_startpos(screen_size: (i32, i32), cell_size: i32, xy: (usize, usize)) -> Point2 {
    let span = |n: usize| i32::try_from(n).unwrap_or(i32::MAX).saturating_mul(cell_size);
    Point2::new(
        screen_size.0.saturating_sub(span(xy.0)) / 2,
        screen_size.1.saturating_sub(span(xy.1)) / 2,
    )
}

/// Row-major node positions: spacing `cell_size`, shifted by `offset`.
///
/// Positions past `i32::MAX` saturate; `make_gridgraph` rejects such grids
/// before calling this.
pub fn grid_vertices(x: usize, y: usize, cell_size: i32, offset: Point2) -> Vec<Point2> {
    let mut out = Vec::with_capacity(x * y);
    let mut py = offset.y;
    for _ in 0..y {
        let mut px = offset.x;
        for _ in 0..x {
            out.push(Point2::new(px, py));
            px = px.saturating_add(cell_size);
        }
        py = py.saturating_add(cell_size);
    }
    out
}

/// First and last screen coordinate of `n` nodes on one axis, if both fit.
fn axis_extent(n: usize, cell_size: i32, screen: i32) -> Option<(i32, i32)> {
    let n = i32::try_from(n).ok()?;
    let start = screen.checked_sub(n.checked_mul(cell_size)?)? / 2;
    let last = start.checked_add((n - 1).checked_mul(cell_size)?)?;
    // Cell-size-2 lattice positions start at the origin.
    (n - 1).checked_mul(2)?;
    Some((start, last))
}

/// Build the x×y grid-graph record.
pub fn make_gridgraph(x: usize, y: usize, cfg: GridCfg) -> Result<GridGraph, GraphError> {
    if cfg.cell_size <= 0 {
        return Err(GraphError::InvalidUnit {
            unit: cfg.cell_size,
        });
    }
    for (n, screen) in [(x, cfg.screen_size.0), (y, cfg.screen_size.1)] {
        if i32::try_from(n).is_err() {
            return Err(GraphError::InvalidDimensions { x, y, z: None });
        }
        if axis_extent(n, cfg.cell_size, screen).is_none() {
            return Err(GraphError::InvalidUnit {
                unit: cfg.cell_size,
            });
        }
    }
    let lattice = grid_lattice_2d(x, y)?;
    let startpos = grid_startpos(cfg.screen_size, cfg.cell_size, (x, y));
    let coloring = make_coloring(&lattice.adjacency)?;
    let edge_adjacency = make_edges_adjacency(&lattice.adjacency, &lattice.edges);
    Ok(GridGraph {
        x,
        y,
        startpos,
        vertices: grid_vertices(x, y, cfg.cell_size, startpos),
        lattice_vertices: grid_vertices(x, y, 2, Point2::zeros()),
        coloring,
        edge_adjacency,
        adjacency: lattice.adjacency,
        edges: lattice.edges,
    })
}
