//! # Timeline Tick Benchmark
//!
//! A fully open menu with long labels keeps a few hundred letter tracks in
//! flight at once. One tick over all of them must stay well under a frame.
//!
//! Run with: `cargo bench --package navmorph_core`

// Benchmarks don't need docs
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use navmorph_core::{Easing, PropertyKind, Timeline, Transition};

/// Letter swap timing used by the overlay.
const LETTER: Transition = Transition::new(0.6, Easing::bezier(0.63, 0.0, 0.0, 0.97));

fn loaded_timeline(tracks: u32) -> Timeline<u32> {
    let mut timeline = Timeline::new();
    for key in 0..tracks {
        timeline.mount(key, PropertyKind::TranslateY, 1.0);
        timeline.animate(&key, 0.0, LETTER.with_delay(key as f32 * 0.001));
    }
    timeline
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline_tick");
    for tracks in [64_u32, 256, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(tracks), &tracks, |b, &tracks| {
            let mut timeline = loaded_timeline(tracks);
            b.iter(|| {
                let completed = timeline.tick(black_box(0.001));
                black_box(completed);
            });
        });
    }
    group.finish();
}

fn bench_retarget(c: &mut Criterion) {
    c.bench_function("timeline_retarget_256", |b| {
        let mut timeline = loaded_timeline(256);
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let target = if flip { -1.0 } else { 0.0 };
            for key in 0..256_u32 {
                black_box(timeline.animate(&key, target, LETTER));
            }
        });
    });
}

criterion_group!(benches, bench_tick, bench_retarget);
criterion_main!(benches);
