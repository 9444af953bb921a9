//! Bipartite 2-coloring by alternating-class closure.
//!
//! Class 0 is seeded with vertex 0 and class 1 with its neighbours; each round
//! pushes the neighbours of the newly added members of one class into the
//! other. Connectivity and bipartiteness are checked as the closure runs, so
//! the result is either a proper coloring of every vertex or an error.

use std::collections::BTreeSet;

use crate::adjacency::{Adjacency, Edge};
use crate::error::GraphError;

/// Vertex → color and color → vertex views of one 2-coloring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coloring {
    /// `colors[v] ∈ {0, 1}`.
    pub colors: Vec<u8>,
    /// `classes[c]` holds every vertex of color `c`.
    pub classes: [BTreeSet<usize>; 2],
}

impl Coloring {
    #[inline]
    pub fn color(&self, v: usize) -> u8 {
        self.colors[v]
    }
    #[inline]
    pub fn class(&self, c: u8) -> &BTreeSet<usize> {
        &self.classes[usize::from(c & 1)]
    }
    /// Every edge joins differently colored endpoints.
    pub fn is_proper(&self, edges: &[Edge]) -> bool {
        edges.iter().all(|&(u, v)| self.colors[u] != self.colors[v])
    }
}

/// 2-color a connected bipartite graph.
///
/// Errors
/// - `EmptyGraph` when `adj` has no vertices.
/// - `NonBipartite` when an edge would join two vertices of the same class.
/// - `Disconnected` when the closure stalls before reaching every vertex.
pub fn make_coloring(adj: &Adjacency) -> Result<Coloring, GraphError> {
    let total = adj.len();
    if total == 0 {
        return Err(GraphError::EmptyGraph);
    }
    let mut colors: Vec<Option<u8>> = vec![None; total];
    colors[0] = Some(0);
    let mut frontier = vec![0usize];
    let mut reached = 1usize;
    let mut color = 0u8;
    while !frontier.is_empty() {
        let other = 1 - color;
        let mut next = Vec::new();
        for &u in &frontier {
            for &v in &adj[u] {
                match colors[v] {
                    None => {
                        colors[v] = Some(other);
                        reached += 1;
                        next.push(v);
                    }
                    Some(c) if c == color => return Err(GraphError::NonBipartite { u, v }),
                    Some(_) => {}
                }
            }
        }
        frontier = next;
        color = other;
    }
    if reached < total {
        return Err(GraphError::Disconnected { reached, total });
    }
    let colors: Vec<u8> = colors.into_iter().map(|c| c.unwrap_or(0)).collect();
    let mut classes = [BTreeSet::new(), BTreeSet::new()];
    for (v, &c) in colors.iter().enumerate() {
        classes[usize::from(c)].insert(v);
    }
    tracing::debug!(
        even = classes[0].len(),
        odd = classes[1].len(),
        "coloring done"
    );
    Ok(Coloring { colors, classes })
}
