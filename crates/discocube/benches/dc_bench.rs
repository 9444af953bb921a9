//! Criterion benchmarks for discocube generation.
//! Focus orders: stages in {4, 8, 16, 24}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use discocube::api::{make_dcgraph, make_edges, make_vertices, make_vi_map, order_at, DcCfg};

fn bench_dc(c: &mut Criterion) {
    let mut group = c.benchmark_group("discocube");
    group.sample_size(10);
    for &stages in &[4usize, 8, 16, 24] {
        let Some(order) = order_at(stages) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("make_vertices", order), &order, |b, &o| {
            b.iter(|| make_vertices(o, DcCfg::default()).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("make_edges", order), &order, |b, &o| {
            let v = make_vertices(o, DcCfg::default()).unwrap();
            let vi = make_vi_map(&v);
            b.iter(|| make_edges(&v, &vi, 1))
        });
        group.bench_with_input(BenchmarkId::new("make_dcgraph", order), &order, |b, &o| {
            b.iter(|| make_dcgraph(o, DcCfg::default()).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dc);
criterion_main!(benches);
