//! NURBS sampling benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dxfgraph::{Nurbs, Point};

fn cubic_curve(points: usize) -> Nurbs {
    let control_points: Vec<Point> = (0..points)
        .map(|i| Point::new(i as f64, ((i * 7) % 5) as f64, 0.0))
        .collect();
    // clamped uniform knot vector
    let degree = 3;
    let mut knots = vec![0.0; degree + 1];
    let spans = points - degree;
    for i in 1..spans {
        knots.push(i as f64 / spans as f64);
    }
    knots.extend(std::iter::repeat(1.0).take(degree + 1));
    Nurbs::new(control_points, knots, vec![], degree)
}

fn bench_fixed_samples(c: &mut Criterion) {
    let small = cubic_curve(8);
    let large = cubic_curve(64);

    c.bench_function("fixed_samples_30_of_8cp", |b| {
        b.iter(|| {
            let count = black_box(&small).fixed_samples(30).count();
            black_box(count)
        })
    });

    c.bench_function("fixed_samples_30_of_64cp", |b| {
        b.iter(|| {
            let count = black_box(&large).fixed_samples(30).count();
            black_box(count)
        })
    });

    c.bench_function("point_at_midpoint", |b| {
        b.iter(|| black_box(large.point_at(black_box(0.5))))
    });
}

criterion_group!(benches, bench_fixed_samples);
criterion_main!(benches);
