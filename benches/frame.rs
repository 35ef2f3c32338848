//! Benchmarks for the CPU side of a frame.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chaos_trails::attractor::{self, Coefficients};
use chaos_trails::{Camera, DVec3, HueSweep, Simulation, Viewport};

fn bench_integration(c: &mut Criterion) {
    let coefficients = Coefficients::default();

    c.bench_function("euler_step", |b| {
        let mut pos = DVec3::new(1.0, 1.0, 1.0);
        b.iter(|| {
            attractor::step(&mut pos, &coefficients, 0.003);
            black_box(pos)
        })
    });
}

fn bench_trail_push(c: &mut Criterion) {
    c.bench_function("trail_push_full_50k", |b| {
        let mut sim = Simulation::new(Coefficients::default(), 50_000);
        // Fill so every push also evicts
        for _ in 0..50_000 {
            sim.advance(0.003);
        }
        b.iter(|| sim.advance(0.003))
    });
}

fn bench_render_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("project_and_color");

    for &capacity in &[1_000usize, 50_000] {
        let mut sim = Simulation::new(Coefficients::default(), capacity);
        for _ in 0..capacity + 10 {
            sim.advance(0.003);
        }
        let camera = Camera::new(sim.focal());
        let viewport = Viewport::new(1280, 720);
        let sweep = HueSweep::FULL;

        group.bench_function(format!("{capacity}_segments"), |b| {
            b.iter(|| {
                for segment in sim.trail().iter() {
                    let color = sweep.color(segment.length);
                    let line = camera.project_segment(segment.p1, segment.p2, &viewport);
                    black_box((color, line));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_integration, bench_trail_push, bench_render_pass);
criterion_main!(benches);
