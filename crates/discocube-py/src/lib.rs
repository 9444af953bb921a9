//! PyO3 bindings for selected `discocube` builders.
//!
//! Notes
//! - Keep bindings thin: plain tuples and lists in, plain tuples and lists out.
//! - Each call rebuilds the record; callers needing several views of one order
//!   should use `dc_graph` once.

use pyo3::prelude::*;
use std::collections::HashMap;

mod common;

use common::{build, dc_cfg, map_graph_err};

type Edge = (usize, usize);

/// Valid discocube orders in `[lo, hi]`.
#[pyfunction]
fn valid_orders(lo: usize, hi: usize) -> Vec<usize> {
    discocube::api::uon(lo, hi).collect()
}

/// Sorted vertex coordinates of the discocube of `order`.
#[pyfunction]
#[pyo3(signature = (order, unit=None))]
fn dc_vertices(order: usize, unit: Option<i32>) -> PyResult<Vec<(i32, i32, i32)>> {
    let v = discocube::api::make_vertices(order, dc_cfg(unit, false)).map_err(map_graph_err)?;
    Ok(v.iter().map(|p| (p.x, p.y, p.z)).collect())
}

/// Canonical edges of the discocube of `order`.
#[pyfunction]
#[pyo3(signature = (order, unit=None))]
fn dc_edges(order: usize, unit: Option<i32>) -> PyResult<Vec<Edge>> {
    Ok(build(order, unit)?.edges)
}

/// Vertex colors (0/1) of the discocube of `order`.
#[pyfunction]
fn dc_coloring(order: usize) -> PyResult<Vec<u8>> {
    Ok(build(order, None)?.coloring.colors)
}

/// Vertices, edges, weights, colors and strata edges of one discocube.
#[pyfunction]
#[pyo3(signature = (order, unit=None, all_strata=false))]
fn dc_graph(
    py: Python<'_>,
    order: usize,
    unit: Option<i32>,
    all_strata: bool,
) -> PyResult<PyObject> {
    let g = discocube::api::make_dcgraph(order, dc_cfg(unit, all_strata)).map_err(map_graph_err)?;
    let strata: HashMap<i32, Vec<Edge>> = g
        .strata
        .iter()
        .map(|(&z, layer)| {
            let edges = layer
                .iter()
                .flat_map(|(&u, ns)| ns.range(u + 1..).map(move |&v| (u, v)))
                .collect();
            (z, edges)
        })
        .collect();
    let out = pyo3::types::PyDict::new_bound(py);
    out.set_item("order", g.order)?;
    out.set_item(
        "vertices",
        g.vertices.iter().map(|p| (p.x, p.y, p.z)).collect::<Vec<_>>(),
    )?;
    out.set_item("edges", g.edges)?;
    out.set_item("weights", g.weights)?;
    out.set_item("colors", g.coloring.colors)?;
    out.set_item("strata", strata)?;
    Ok(out.into_any().unbind())
}

/// Canonical edges of an x×y grid, or of its z-layer extrusion.
#[pyfunction]
#[pyo3(signature = (x, y, z=None))]
fn grid_edges(x: usize, y: usize, z: Option<usize>) -> PyResult<Vec<Edge>> {
    let lattice = match z {
        Some(z) => discocube::api::grid_lattice_3d(x, y, z),
        None => discocube::api::grid_lattice_2d(x, y),
    }
    .map_err(map_graph_err)?;
    Ok(lattice.edges)
}

#[pymodule]
fn discocube_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(valid_orders, m)?)?;
    m.add_function(wrap_pyfunction!(dc_vertices, m)?)?;
    m.add_function(wrap_pyfunction!(dc_edges, m)?)?;
    m.add_function(wrap_pyfunction!(dc_coloring, m)?)?;
    m.add_function(wrap_pyfunction!(dc_graph, m)?)?;
    m.add_function(wrap_pyfunction!(grid_edges, m)?)?;
    Ok(())
}
