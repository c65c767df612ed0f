use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use geohash_core::{
    adjacent, base32, decode, encode, neighbors, Coordinate, Direction, LineRasterizer,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A deterministic spread of points across the globe.
fn sample_points(count: usize) -> Vec<(f64, f64)> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            (-85.0 + 170.0 * t, -175.0 + 350.0 * ((t * 7.0) % 1.0))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Encode / decode benchmarks
// ---------------------------------------------------------------------------

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    let points = sample_points(1024);
    for &precision in &[5usize, 9, 12, 22] {
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("points", precision),
            &points,
            |b, points| {
                b.iter(|| {
                    for &(lat, lon) in points {
                        encode(lat, lon, precision).unwrap();
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for &precision in &[5usize, 9, 12, 22] {
        let hash = encode(40.7128, -74.0060, precision).expect("encode ok");
        group.bench_with_input(BenchmarkId::new("hash", precision), &hash, |b, hash| {
            b.iter(|| decode(hash).unwrap());
        });
    }

    group.bench_function("integer_form_12", |b| {
        b.iter(|| base32::decode("dr5regw3ppyz").unwrap());
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Neighbor benchmarks
// ---------------------------------------------------------------------------

fn bench_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors");

    group.bench_function("adjacent_no_carry", |b| {
        b.iter(|| adjacent("dr5regw3ppyz", Direction::Left).unwrap());
    });

    group.bench_function("adjacent_full_carry", |b| {
        // Every character of "7zzzz" sits on the east border.
        b.iter(|| adjacent("7zzzz", Direction::Right).unwrap());
    });

    group.bench_function("all_eight", |b| {
        b.iter(|| neighbors("dr5regw3ppyz").unwrap());
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Line rasterization benchmarks
// ---------------------------------------------------------------------------

fn bench_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");

    let start = Coordinate::new(51.5074, -0.1278);
    let end = Coordinate::new(48.8566, 2.3522);
    for &precision in &[3usize, 4, 5, 6] {
        let rasterizer = LineRasterizer::new(precision).unwrap();
        let cells = rasterizer.rasterize(start, end).expect("rasterize ok").len();
        group.throughput(Throughput::Elements(cells as u64));
        group.bench_with_input(
            BenchmarkId::new("london_paris", precision),
            &rasterizer,
            |b, rasterizer| {
                b.iter(|| rasterizer.rasterize(start, end).unwrap());
            },
        );
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion harness
// ---------------------------------------------------------------------------

criterion_group!(benches, bench_encode, bench_decode, bench_neighbors, bench_line);
criterion_main!(benches);
