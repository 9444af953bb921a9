use discocube::api::{DcCfg, Graph, GraphError, StrataSelect};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn map_graph_err(err: GraphError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn dc_cfg(unit: Option<i32>, all_strata: bool) -> DcCfg {
    DcCfg {
        unit: unit.unwrap_or(1),
        strata: if all_strata {
            StrataSelect::All
        } else {
            StrataSelect::Negative
        },
    }
}

pub fn build(order: usize, unit: Option<i32>) -> PyResult<Graph> {
    discocube::api::make_dcgraph(order, dc_cfg(unit, false)).map_err(map_graph_err)
}
