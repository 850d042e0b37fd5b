//! Benchmarks for progress-to-pose evaluation.
#![allow(missing_docs, unused_results)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scroll_orbit::camera::{
    compute_pose, BankParameters, PathParameters, ScrollCameraController,
};
use scroll_orbit::progress::{Scrub, ScrollRegion, ScrollTimeline};
use scroll_orbit::util::easing::EasingFunction;

fn params() -> PathParameters {
    PathParameters::new(15.0, 10.0, 1.2, 0.2, BankParameters::default())
        .unwrap_or_else(|e| panic!("{e}"))
}

fn compute_pose_benchmark(c: &mut Criterion) {
    let params = params();
    c.bench_function("compute_pose", |b| {
        b.iter(|| black_box(compute_pose(black_box(0.37), &params)))
    });
}

fn scroll_sweep_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_sweep");

    for steps in [60_u32, 600, 6000] {
        let region = ScrollRegion::new(0.0, 3000.0)
            .unwrap_or_else(|e| panic!("{e}"));
        group.bench_function(format!("{steps}_offsets"), |b| {
            b.iter(|| {
                let mut timeline = ScrollTimeline::new(
                    region,
                    Scrub::Instant,
                    EasingFunction::SmoothStep,
                )
                .unwrap_or_else(|e| panic!("{e}"));
                let mut controller = ScrollCameraController::new(params());
                for i in 0..steps {
                    let offset = i as f32 * 3000.0 / steps as f32;
                    timeline.scroll_to(offset, &mut controller);
                }
                black_box(*controller.pose())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, compute_pose_benchmark, scroll_sweep_benchmark);
criterion_main!(benches);
