//! Benchmarks for distance calculations and nearest lookup.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nursery_geo::{
    annotate_distances, geodesic_distance, haversine_distance, locate_nearest, Coordinate,
    DistanceMethod,
};

fn create_test_points(count: usize) -> Vec<Coordinate> {
    (0..count)
        .map(|i| {
            // Grid across the Khariar division
            let lat = 20.4 + (i as f64 * 0.003) % 0.3;
            let lng = 83.9 + (i as f64 * 0.007) % 0.4;
            Coordinate::new(lat, lng)
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let khariar = Coordinate::new(20.5600, 84.1400);
    let nursery = Coordinate::new(20.6000, 84.2000);

    let mut group = c.benchmark_group("single_distance");
    group.bench_function("geodesic", |b| {
        b.iter(|| geodesic_distance(black_box(&khariar), black_box(&nursery)))
    });
    group.bench_function("haversine", |b| {
        b.iter(|| haversine_distance(black_box(&khariar), black_box(&nursery)))
    });
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");
    let reference = Coordinate::new(20.5600, 84.1400);

    for size in [10, 100, 1000, 10000].iter() {
        let points = create_test_points(*size);

        group.bench_with_input(BenchmarkId::new("locate", size), size, |b, _| {
            b.iter(|| locate_nearest(black_box(&points), black_box(&reference), DistanceMethod::Geodesic))
        });
        group.bench_with_input(BenchmarkId::new("annotate", size), size, |b, _| {
            b.iter(|| annotate_distances(black_box(&points), black_box(&reference), DistanceMethod::Geodesic))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_distance, bench_nearest);
criterion_main!(benches);
