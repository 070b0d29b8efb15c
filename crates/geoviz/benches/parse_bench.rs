//! Criterion benches for the result parsers on synthetic dumps.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use geoviz::parse::{parse_dcel, parse_hull, parse_triangulation};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::io::Cursor;

fn hull_text(n: usize, rng: &mut StdRng) -> String {
    let mut s = String::from("Convex hull:\n");
    for _ in 0..n {
        s.push_str(&format!(
            "({}, {})\n",
            rng.gen_range(0..100_000),
            rng.gen_range(0..100_000)
        ));
    }
    s.push_str("Time taken for computing convex hull: 12\n");
    s
}

fn dcel_text(faces: usize, edges: usize, rng: &mut StdRng) -> String {
    let mut s = String::new();
    for f in 0..faces {
        s.push_str(&format!("Face Id: {f}\n"));
        for _ in 0..edges {
            s.push_str(&format!(
                "HEdge: ({:.3}, {:.3}) -> ({:.3}, {:.3})\n",
                rng.gen::<f64>() * 100.0,
                rng.gen::<f64>() * 100.0,
                rng.gen::<f64>() * 100.0,
                rng.gen::<f64>() * 100.0
            ));
        }
        s.push('\n');
    }
    s
}

fn tri_text(n: usize, rng: &mut StdRng) -> String {
    let mut s = format!("No of triangles: {n}\n");
    for _ in 0..n {
        let v: Vec<u32> = (0..6).map(|_| rng.gen_range(0..1000)).collect();
        s.push_str(&format!(
            "({}, {}) ({}, {}) ({}, {})\n",
            v[0], v[1], v[2], v[3], v[4], v[5]
        ));
    }
    s
}

fn bench_parsers(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(43);
    let mut group = c.benchmark_group("parse");
    for &n in &[100usize, 10_000] {
        let hull = hull_text(n, &mut rng);
        group.throughput(Throughput::Bytes(hull.len() as u64));
        group.bench_with_input(BenchmarkId::new("hull", n), &hull, |b, text| {
            b.iter(|| parse_hull(Cursor::new(text.as_bytes())).unwrap())
        });

        let dcel = dcel_text(n / 10, 10, &mut rng);
        group.throughput(Throughput::Bytes(dcel.len() as u64));
        group.bench_with_input(BenchmarkId::new("dcel", n), &dcel, |b, text| {
            b.iter(|| parse_dcel(Cursor::new(text.as_bytes())).unwrap())
        });

        let tri = tri_text(n, &mut rng);
        group.throughput(Throughput::Bytes(tri.len() as u64));
        group.bench_with_input(BenchmarkId::new("triangulation", n), &tri, |b, text| {
            b.iter(|| parse_triangulation(Cursor::new(text.as_bytes())).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parsers);
criterion_main!(benches);
