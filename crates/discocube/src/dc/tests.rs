use super::*;
use crate::adjacency::{degree_sum, is_symmetric, Edge};
use crate::lattice::{sq_norm, Point3};
use crate::orders::{edge_count_at, order_at, uon};
use nalgebra::vector;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::{BTreeSet, HashSet};

fn dc(order: usize) -> Graph {
    make_dcgraph(order, DcCfg::default()).unwrap()
}

#[test]
fn order_8_is_the_unit_cube() {
    let g = dc(8);
    assert_eq!(g.stages, 1);
    let got: HashSet<Point3> = g.vertices.iter().copied().collect();
    let want: HashSet<Point3> = crate::lattice::make_cube(Point3::zeros(), 1)
        .into_iter()
        .collect();
    assert_eq!(got, want);
    assert!((0..8).all(|v| g.degree(v) == 3));
    assert_eq!(g.edges.len(), 12);
    assert_eq!(g.coloring.class(0).len(), 4);
    assert_eq!(g.coloring.class(1).len(), 4);
    assert!(g.coloring.is_proper(&g.edges));
    // Each cube edge borders two faces, hence two parallel neighbours.
    assert_eq!(g.edge_adjacency.len(), 12);
    assert!(g.edge_adjacency.values().all(|s| s.len() == 2));
    assert!(g.weights.iter().all(|&w| w == 3));
}

#[test]
fn order_8_sort_is_lexicographic_within_a_shell() {
    let g = dc(8);
    assert_eq!(g.vertices[0], vector![-1, -1, -1]);
    assert_eq!(g.vertices[1], vector![-1, -1, 1]);
    assert_eq!(g.vertices[7], vector![1, 1, 1]);
}

#[test]
fn order_32_counts() {
    let g = dc(32);
    assert_eq!(g.stages, 2);
    assert_eq!(g.len(), 32);
    assert_eq!(g.edges.len(), 60);
    let deg6 = (0..g.len()).filter(|&v| g.degree(v) == 6).count();
    let deg3 = (0..g.len()).filter(|&v| g.degree(v) == 3).count();
    assert_eq!((deg3, deg6), (24, 8));
    // The inner cube comes first in sort order.
    assert!(g.vertices[..8].iter().all(|p| sq_norm(p) == 3));
    assert_eq!(g.vertices[8], vector![-3, -1, -1]);
}

#[test]
fn order_32_strata_keep_negative_layers() {
    let g = dc(32);
    assert_eq!(g.strata.keys().copied().collect::<Vec<_>>(), vec![-3, -1]);
    let layer_edges = |z: i32| g.strata[&z].values().map(BTreeSet::len).sum::<usize>() / 2;
    assert_eq!(g.strata[&-3].len(), 4);
    assert_eq!(layer_edges(-3), 4);
    assert_eq!(g.strata[&-1].len(), 12);
    assert_eq!(layer_edges(-1), 16);
}

#[test]
fn all_strata_cover_every_vertex_once() {
    let cfg = DcCfg {
        strata: StrataSelect::All,
        ..DcCfg::default()
    };
    let g = make_dcgraph(80, cfg).unwrap();
    let mut seen = HashSet::new();
    for (z, layer) in &g.strata {
        for &v in layer.keys() {
            assert_eq!(g.vertices[v].z, *z);
            assert!(seen.insert(v), "vertex {v} in two layers");
        }
    }
    assert_eq!(seen.len(), g.len());
}

#[test]
fn invalid_order_rejected_before_expansion() {
    for order in [0, 1, 9, 31, 33, 81] {
        assert_eq!(
            make_dcgraph(order, DcCfg::default()).unwrap_err(),
            GraphError::InvalidOrder { order }
        );
        assert!(make_vertices(order, DcCfg::default()).is_err());
    }
}

#[test]
fn non_positive_unit_rejected() {
    let cfg = DcCfg {
        unit: 0,
        ..DcCfg::default()
    };
    assert_eq!(
        make_dcgraph(8, cfg).unwrap_err(),
        GraphError::InvalidUnit { unit: 0 }
    );
}

#[test]
fn oversized_unit_rejected_instead_of_overflowing() {
    for (order, unit) in [(8, 1 << 30), (32, 500_000_000), (8, i32::MAX)] {
        let cfg = DcCfg {
            unit,
            ..DcCfg::default()
        };
        assert_eq!(
            make_dcgraph(order, cfg).unwrap_err(),
            GraphError::InvalidUnit { unit }
        );
        assert!(make_vertices(order, cfg).is_err());
    }
}

#[test]
fn largest_fitting_unit_builds() {
    // Order 8 is one stage: 3·(2·1 + 1)·unit must fit in i32.
    let unit = i32::MAX / 9;
    let cfg = DcCfg {
        unit,
        ..DcCfg::default()
    };
    let g = make_dcgraph(8, cfg).unwrap();
    assert_eq!(g.edges.len(), 12);
    assert!(g.weights.iter().all(|&w| w == 3 * unit));
    let too_big = DcCfg {
        unit: unit + 1,
        ..DcCfg::default()
    };
    assert!(make_dcgraph(8, too_big).is_err());
}

#[test]
fn unit_scales_coordinates_not_topology() {
    let cfg = DcCfg {
        unit: 3,
        ..DcCfg::default()
    };
    let g3 = make_dcgraph(80, cfg).unwrap();
    let g1 = dc(80);
    assert_eq!(g3.edges, g1.edges);
    for (a, b) in g3.vertices.iter().zip(&g1.vertices) {
        assert_eq!(*a, *b * 3);
    }
}

#[test]
fn index_round_trip_sampled() {
    let g = dc(order_at(12).unwrap());
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let i = rng.gen_range(0..g.len());
        assert_eq!(g.index[&g.vertices[i]], i);
    }
    assert_eq!(g.index.len(), g.len());
}

#[test]
fn edges_are_directed_before_canonicalisation() {
    let v = make_vertices(8, DcCfg::default()).unwrap();
    let vi = make_vi_map(&v);
    let raw = make_edges(&v, &vi, 1);
    assert_eq!(raw.len(), 24);
    let set: HashSet<Edge> = raw.iter().copied().collect();
    assert!(raw.iter().all(|&(u, w)| set.contains(&(w, u))));
}

#[test]
fn strata_edges_exist_in_full_graph() {
    let g = dc(160);
    for layer in g.strata.values() {
        for (&u, ns) in layer {
            assert!(ns.is_subset(&g.adjacency[u]));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn lattice_invariants(stages in 1usize..=5) {
        let order = order_at(stages).unwrap();
        let g = dc(order);
        prop_assert_eq!(g.len(), order);
        prop_assert_eq!(Some(g.edges.len()), edge_count_at(stages));
        prop_assert!(is_symmetric(&g.adjacency));
        prop_assert_eq!(degree_sum(&g.adjacency), 2 * g.edges.len());
        prop_assert!(g.coloring.is_proper(&g.edges));
        for (i, p) in g.vertices.iter().enumerate() {
            prop_assert_eq!(g.index[p], i);
        }
        prop_assert_eq!(g.strata.len(), stages);
    }

    #[test]
    fn regeneration_is_deterministic(stages in 1usize..=4) {
        let order = order_at(stages).unwrap();
        let a = make_vertices(order, DcCfg::default()).unwrap();
        let b = make_vertices(order, DcCfg::default()).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn every_valid_order_small_builds() {
    for order in uon(8, 500) {
        let g = dc(order);
        assert_eq!(g.len(), order);
        assert!(g.weights.iter().all(|&w| w % 2 == 1));
    }
}
