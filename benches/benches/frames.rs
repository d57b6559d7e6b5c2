// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use loupe_frames::{FrameBuffers, FrameRange};
use std::time::Duration;

/// Every other 8-frame batch buffered: `count` disjoint ranges.
fn striped(count: u64) -> FrameBuffers {
    (0..count).map(|i| FrameRange::new(i * 16, i * 16 + 7)).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("frames/insert");

    // Hypothesis: insert is dominated by the re-sort, so sequential decode
    // order (already sorted) and gap-filling inserts should cost about the
    // same for a given range count.
    for len in [16_u64, 128, 1_024, 8_192] {
        group.throughput(Throughput::Elements(len));

        group.bench_with_input(BenchmarkId::new("sequential", len), &len, |b, &len| {
            b.iter_batched(
                FrameBuffers::new,
                |mut buffers| {
                    for i in 0..len {
                        buffers.insert(FrameRange::new(i * 16, i * 16 + 7));
                    }
                    black_box(buffers);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("fill_gap", len), &len, |b, &len| {
            b.iter_batched(
                || striped(len),
                |mut buffers| {
                    buffers.insert(FrameRange::new(len * 8 + 8, len * 8 + 15));
                    black_box(buffers);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_remove_and_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("frames/remove_query");

    for len in [16_u64, 128, 1_024, 8_192] {
        let buffers = striped(len);

        group.bench_with_input(BenchmarkId::new("remove_split", len), &buffers, |b, buffers| {
            b.iter_batched(
                || buffers.clone(),
                |mut buffers| {
                    buffers.remove(len * 8 + 3);
                    black_box(buffers);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("contains", len), &buffers, |b, buffers| {
            b.iter(|| black_box(buffers.contains(black_box(len * 8 + 3))));
        });

        group.bench_with_input(BenchmarkId::new("missing", len), &buffers, |b, buffers| {
            b.iter(|| black_box(buffers.missing(FrameRange::new(len * 4, len * 4 + 256))));
        });
    }

    group.finish();
}

fn config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = config();
    targets = bench_insert, bench_remove_and_query
}
criterion_main!(benches);
