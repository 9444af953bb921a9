//! Persistence sink: JSON documents and polars tables for built records.
//!
//! Ordered maps keyed by edges do not map onto JSON objects, so documents
//! flatten them into row lists.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use discocube::api::{Coloring, Edge, EdgeAdjacency, Graph, GridGraph, GridLattice, Strata};
use polars::prelude::*;
use serde::Serialize;

/// Output format of the `cube` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Csv,
    Parquet,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Csv => "csv",
            Format::Parquet => "parquet",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EdgeAdjRow {
    pub edge: Edge,
    pub adjacent: Vec<Edge>,
}

#[derive(Debug, Serialize)]
pub struct LayerDoc {
    pub z: i32,
    pub nodes: Vec<usize>,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Serialize)]
pub struct GraphDoc {
    pub order: usize,
    pub stages: usize,
    pub unit: i32,
    pub vertices: Vec<[i32; 3]>,
    pub edges: Vec<Edge>,
    pub weights: Vec<i32>,
    pub colors: Vec<u8>,
    pub edge_adjacency: Vec<EdgeAdjRow>,
    pub strata: Vec<LayerDoc>,
}

#[derive(Debug, Serialize)]
pub struct GridDoc {
    pub x: usize,
    pub y: usize,
    pub z: Option<usize>,
    pub startpos: Option<[i32; 2]>,
    pub vertices: Vec<[i32; 2]>,
    pub edges: Vec<Edge>,
    pub colors: Vec<u8>,
    pub edge_adjacency: Vec<EdgeAdjRow>,
}

fn ea_rows(ea: &EdgeAdjacency) -> Vec<EdgeAdjRow> {
    ea.iter()
        .map(|(&edge, near)| EdgeAdjRow {
            edge,
            adjacent: near.iter().copied().collect(),
        })
        .collect()
}

fn layer_docs(strata: &Strata) -> Vec<LayerDoc> {
    strata
        .iter()
        .map(|(&z, layer)| LayerDoc {
            z,
            nodes: layer.keys().copied().collect(),
            edges: layer
                .iter()
                .flat_map(|(&u, ns)| ns.range(u + 1..).map(move |&v| (u, v)))
                .collect(),
        })
        .collect()
}

impl From<&Graph> for GraphDoc {
    fn from(g: &Graph) -> Self {
        Self {
            order: g.order,
            stages: g.stages,
            unit: g.unit,
            vertices: g.vertices.iter().map(|p| [p.x, p.y, p.z]).collect(),
            edges: g.edges.clone(),
            weights: g.weights.clone(),
            colors: g.coloring.colors.clone(),
            edge_adjacency: ea_rows(&g.edge_adjacency),
            strata: layer_docs(&g.strata),
        }
    }
}

impl From<&GridGraph> for GridDoc {
    fn from(g: &GridGraph) -> Self {
        Self {
            x: g.x,
            y: g.y,
            z: None,
            startpos: Some([g.startpos.x, g.startpos.y]),
            vertices: g.vertices.iter().map(|p| [p.x, p.y]).collect(),
            edges: g.edges.clone(),
            colors: g.coloring.colors.clone(),
            edge_adjacency: ea_rows(&g.edge_adjacency),
        }
    }
}

impl GridDoc {
    /// Document for an extruded lattice; it carries no screen placement.
    pub fn from_lattice(g: &GridLattice, coloring: &Coloring, ea: &EdgeAdjacency) -> Self {
        Self {
            x: g.x,
            y: g.y,
            z: g.z,
            startpos: None,
            vertices: Vec::new(),
            edges: g.edges.clone(),
            colors: coloring.colors.clone(),
            edge_adjacency: ea_rows(ea),
        }
    }
}

/// `idx, x, y, z, weight, color` per vertex.
pub fn vertex_frame(g: &Graph) -> PolarsResult<DataFrame> {
    let idx: Vec<u64> = (0..g.vertices.len() as u64).collect();
    let xs: Vec<i32> = g.vertices.iter().map(|p| p.x).collect();
    let ys: Vec<i32> = g.vertices.iter().map(|p| p.y).collect();
    let zs: Vec<i32> = g.vertices.iter().map(|p| p.z).collect();
    let colors: Vec<u32> = g.coloring.colors.iter().map(|&c| u32::from(c)).collect();
    df!(
        "idx" => idx,
        "x" => xs,
        "y" => ys,
        "z" => zs,
        "weight" => g.weights.clone(),
        "color" => colors
    )
}

/// `u, v` per canonical edge.
pub fn edge_frame(edges: &[Edge]) -> PolarsResult<DataFrame> {
    let us: Vec<u64> = edges.iter().map(|&(u, _)| u as u64).collect();
    let vs: Vec<u64> = edges.iter().map(|&(_, v)| v as u64).collect();
    df!("u" => us, "v" => vs)
}

/// `<stem>.<tag>.<ext>` next to `artifact`.
pub fn sibling_path(artifact: &Path, tag: &str, ext: &str) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.{tag}.{ext}"))
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

pub fn write_json<T: Serialize>(path: &Path, doc: &T) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec(doc)?)
        .with_context(|| format!("writing {}", path.display()))
}

fn write_frame(df: &mut DataFrame, path: &Path, format: Format) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match format {
        Format::Csv => CsvWriter::new(file)
            .finish(df)
            .with_context(|| format!("writing {}", path.display()))?,
        Format::Parquet => {
            ParquetWriter::new(file)
                .finish(df)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        Format::Json => anyhow::bail!("json output is not tabular"),
    }
    Ok(())
}

/// Write a discocube record; returns every file written.
pub fn write_graph(g: &Graph, out: &Path, format: Format) -> Result<Vec<PathBuf>> {
    if format == Format::Json {
        write_json(out, &GraphDoc::from(g))?;
        return Ok(vec![out.to_path_buf()]);
    }
    ensure_parent(out)?;
    let mut vf = vertex_frame(g)?;
    write_frame(&mut vf, out, format)?;
    let edges_path = sibling_path(out, "edges", format.extension());
    let mut ef = edge_frame(&g.edges)?;
    write_frame(&mut ef, &edges_path, format)?;
    Ok(vec![out.to_path_buf(), edges_path])
}

#[cfg(test)]
mod tests {
    use super::*;
    use discocube::api::{make_dcgraph, make_gridgraph, DcCfg, GridCfg};
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn sibling_path_inserts_tag() {
        let p = sibling_path(Path::new("/tmp/out/cube.csv"), "edges", "csv");
        assert_eq!(p, Path::new("/tmp/out/cube.edges.csv"));
    }

    #[test]
    fn graph_doc_flattens_maps() {
        let g = make_dcgraph(32, DcCfg::default()).unwrap();
        let doc = GraphDoc::from(&g);
        assert_eq!(doc.vertices.len(), 32);
        assert_eq!(doc.edge_adjacency.len(), 60);
        assert_eq!(doc.strata.len(), 2);
        assert_eq!(doc.strata[1].edges.len(), 16);
    }

    #[test]
    fn cube_json_round_trips_through_serde() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/cube.json");
        let g = make_dcgraph(8, DcCfg::default()).unwrap();
        let files = write_graph(&g, &out, Format::Json).unwrap();
        assert_eq!(files, vec![out.clone()]);
        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["order"], 8);
        assert_eq!(parsed["edges"].as_array().unwrap().len(), 12);
        assert_eq!(parsed["vertices"][0], serde_json::json!([-1, -1, -1]));
    }

    #[test]
    fn cube_csv_writes_vertex_and_edge_tables() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("cube.csv");
        let g = make_dcgraph(8, DcCfg::default()).unwrap();
        let files = write_graph(&g, &out, Format::Csv).unwrap();
        assert_eq!(files.len(), 2);
        let vertices = fs::read_to_string(&files[0]).unwrap();
        assert!(vertices.starts_with("idx,x,y,z,weight,color"));
        assert_eq!(vertices.lines().count(), 9);
        let edges = fs::read_to_string(&files[1]).unwrap();
        assert_eq!(edges.lines().count(), 13);
    }

    #[test]
    fn grid_doc_carries_screen_placement() {
        let gg = make_gridgraph(3, 3, GridCfg::default()).unwrap();
        let doc = GridDoc::from(&gg);
        assert_eq!(doc.startpos, Some([597, 597]));
        assert_eq!(doc.edges.len(), 12);
        assert_eq!(doc.vertices.len(), 9);
    }
}
