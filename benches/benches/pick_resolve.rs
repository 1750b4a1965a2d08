// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use holdfast_pick::{Hit, base_id, nearest_hit, resolve_two_pass};

/// Deterministic pseudo-random hit sets; depths scatter over [0, 1).
fn synthetic_hits(len: u32) -> Vec<Hit> {
    (0..len)
        .map(|i| Hit {
            depth: (i.wrapping_mul(2_654_435_761) % 10_000) as f32 / 10_000.0,
            id: base_id(i) | 1,
        })
        .collect()
}

fn bench_nearest_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick/nearest_hit");

    // Real hotspot passes are small; the larger sizes exist to confirm the
    // scan stays linear rather than to model a plausible workload.
    for len in [4u32, 32, 256, 2_048] {
        let hits = synthetic_hits(len);
        group.throughput(Throughput::Elements(u64::from(len)));

        group.bench_with_input(BenchmarkId::from_parameter(len), &hits, |b, hits| {
            b.iter(|| black_box(nearest_hit(black_box(hits))));
        });
    }

    group.finish();
}

fn bench_two_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick/two_pass");

    for len in [4u32, 32, 256, 2_048] {
        let outer = synthetic_hits(len);
        // Every fourth candidate survives into the fine pass.
        let inner: Vec<Hit> = outer.iter().copied().step_by(4).collect();
        group.throughput(Throughput::Elements(u64::from(len)));

        group.bench_with_input(
            BenchmarkId::from_parameter(len),
            &(outer, inner),
            |b, (outer, inner)| {
                b.iter(|| black_box(resolve_two_pass(black_box(outer), black_box(inner))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_nearest_hit, bench_two_pass);
criterion_main!(benches);
