//! Shared graph containers: edges, adjacency and edge-adjacency.
//!
//! Indices are dense (`0..n`). Output containers are ordered so that records
//! print and serialize reproducibly; membership-heavy loops use hash sets.

use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Undirected edge between two vertex indices. Canonical form is `(min, max)`.
pub type Edge = (usize, usize);
/// Neighbour sets indexed by vertex; `v ∈ A[u] ⟺ u ∈ A[v]`.
pub type Adjacency = Vec<BTreeSet<usize>>;
/// Canonical edge → edges parallel to it and one lattice step away.
pub type EdgeAdjacency = BTreeMap<Edge, BTreeSet<Edge>>;

#[inline]
pub fn canonical(u: usize, v: usize) -> Edge {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

/// Deduplicate a possibly directed edge list into sorted canonical edges.
/// Self-loops are dropped.
pub fn canonical_edges(edges: &[Edge]) -> Vec<Edge> {
    let set: BTreeSet<Edge> = edges
        .iter()
        .filter(|(u, v)| u != v)
        .map(|&(u, v)| canonical(u, v))
        .collect();
    set.into_iter().collect()
}

/// Symmetric neighbour sets for `n` vertices. Endpoints must be `< n`.
pub fn make_adjacency(n: usize, edges: &[Edge]) -> Adjacency {
    let mut adj = vec![BTreeSet::new(); n];
    for &(u, v) in edges {
        adj[u].insert(v);
        adj[v].insert(u);
    }
    adj
}

/// Canonical edge list of an adjacency.
pub fn edges_of(adj: &Adjacency) -> Vec<Edge> {
    adj.iter()
        .enumerate()
        .flat_map(|(u, ns)| ns.range(u + 1..).map(move |&v| (u, v)))
        .collect()
}

/// Edge-adjacency over the deduplicated undirected edge set.
///
/// For edge `{u, p}` the candidates are `{a, b}` with `a ∈ A[u] \ {p}` and
/// `b ∈ A[p] \ {u}`; a candidate is kept iff it is itself an edge. On a cubic
/// lattice these are the edges parallel to `{u, p}` one step away (the
/// opposite sides of the unit squares containing it).
pub fn make_edges_adjacency(adj: &Adjacency, edges: &[Edge]) -> EdgeAdjacency {
    let et: HashSet<Edge> = edges
        .iter()
        .filter(|(u, v)| u != v)
        .map(|&(u, v)| canonical(u, v))
        .collect();
    let mut out = EdgeAdjacency::new();
    for &(u, p) in &et {
        let mut near = BTreeSet::new();
        for &a in adj[u].iter().filter(|&&a| a != p) {
            for &b in adj[p].iter().filter(|&&b| b != u) {
                let e = canonical(a, b);
                if a != b && et.contains(&e) {
                    near.insert(e);
                }
            }
        }
        out.insert((u, p), near);
    }
    out
}

/// Handshake check helper: sum of degrees.
#[inline]
pub fn degree_sum(adj: &Adjacency) -> usize {
    adj.iter().map(BTreeSet::len).sum()
}

/// True iff the adjacency is symmetric.
pub fn is_symmetric(adj: &Adjacency) -> bool {
    adj.iter()
        .enumerate()
        .all(|(u, ns)| ns.iter().all(|&v| adj.get(v).is_some_and(|back| back.contains(&u))))
}
