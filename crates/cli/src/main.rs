use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use discocube::api::{
    grid_lattice_3d, make_coloring, make_dcgraph, make_edges_adjacency, make_gridgraph, uon,
    DcCfg, GridCfg, StrataSelect,
};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod export;
mod provenance;

use export::{write_graph, write_json, Format, GridDoc};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Discocube and grid graph generator")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build a discocube graph and write it under --out
    Cube {
        #[arg(long)]
        order: usize,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Cube half-edge; edges are 2·unit long
        #[arg(long, default_value_t = 1)]
        unit: i32,
        /// Keep every z layer instead of the negative half
        #[arg(long)]
        all_strata: bool,
    },
    /// Build a 2D grid graph, or a 3D grid lattice when --z is given
    Grid {
        #[arg(long)]
        x: usize,
        #[arg(long)]
        y: usize,
        #[arg(long)]
        z: Option<usize>,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 2)]
        cell_size: i32,
        #[arg(long, default_value_t = 1200)]
        screen_width: i32,
        #[arg(long, default_value_t = 1200)]
        screen_height: i32,
    },
    /// Print the valid discocube orders in [min, max]
    Orders {
        #[arg(long, default_value_t = 8)]
        min: usize,
        #[arg(long)]
        max: usize,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Cube {
            order,
            out,
            format,
            unit,
            all_strata,
        } => cube(order, out, format, unit, all_strata),
        Action::Grid {
            x,
            y,
            z,
            out,
            cell_size,
            screen_width,
            screen_height,
        } => grid(x, y, z, out, cell_size, (screen_width, screen_height)),
        Action::Orders { min, max } => orders(min, max),
        Action::Report => report(),
    }
}

fn cube(order: usize, out: PathBuf, format: Format, unit: i32, all_strata: bool) -> Result<()> {
    tracing::info!(order, out = %out.display(), ?format, unit, all_strata, "cube");
    let cfg = DcCfg {
        unit,
        strata: if all_strata {
            StrataSelect::All
        } else {
            StrataSelect::Negative
        },
    };
    let g = make_dcgraph(order, cfg).with_context(|| format!("building discocube {order}"))?;
    tracing::info!(
        vertices = g.vertices.len(),
        edges = g.edges.len(),
        layers = g.strata.len(),
        "built"
    );
    let outputs = write_graph(&g, &out, format)?;
    let params = json!({
        "order": order,
        "stages": g.stages,
        "unit": unit,
        "all_strata": all_strata,
        "format": format.extension()
    });
    write_sidecar(&out, &outputs, Payload::new("cube", params))?;
    Ok(())
}

fn grid(
    x: usize,
    y: usize,
    z: Option<usize>,
    out: PathBuf,
    cell_size: i32,
    screen_size: (i32, i32),
) -> Result<()> {
    tracing::info!(x, y, z = ?z, out = %out.display(), cell_size, "grid");
    let doc = match z {
        Some(z) => {
            let lattice = grid_lattice_3d(x, y, z)?;
            let coloring = make_coloring(&lattice.adjacency)?;
            let ea = make_edges_adjacency(&lattice.adjacency, &lattice.edges);
            GridDoc::from_lattice(&lattice, &coloring, &ea)
        }
        None => {
            let cfg = GridCfg {
                cell_size,
                screen_size,
            };
            GridDoc::from(&make_gridgraph(x, y, cfg)?)
        }
    };
    tracing::info!(edges = doc.edges.len(), "built");
    write_json(&out, &doc)?;
    let params = json!({
        "x": x,
        "y": y,
        "z": z,
        "cell_size": cell_size,
        "screen_size": [screen_size.0, screen_size.1]
    });
    write_sidecar(&out, &[out.clone()], Payload::new("grid", params))?;
    Ok(())
}

fn orders(min: usize, max: usize) -> Result<()> {
    tracing::info!(min, max, "orders");
    for order in uon(min, max) {
        println!("{order}");
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "generator": format!("discocube {}", discocube::VERSION),
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
