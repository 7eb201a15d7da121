// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sightline_window::WindowedList;

fn bench_visible_slice(c: &mut Criterion) {
    let mut group = c.benchmark_group("window/visible_slice");

    // Cost should track the viewport, not the sequence length.
    for len in [1_000_usize, 100_000, 10_000_000] {
        let items: Vec<u64> = (0..len as u64).collect();
        let mut list = WindowedList::with_overscan(60.0, 4).unwrap();
        list.measure(1_080.0);
        list.on_scroll((len / 2) as f64 * 60.0);
        group.throughput(Throughput::Elements(list.count() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &items, |b, items| {
            b.iter(|| {
                let sum: u64 = list
                    .visible_slice(black_box(items))
                    .map(|row| *row.item)
                    .sum();
                black_box(sum);
            });
        });
    }

    group.finish();
}

fn bench_scroll_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("window/scroll_sweep");
    let offsets: Vec<f64> = (0..4_096).map(|i| f64::from(i) * 17.5).collect();
    group.throughput(Throughput::Elements(offsets.len() as u64));

    group.bench_function("on_scroll", |b| {
        let mut list = WindowedList::with_overscan(60.0, 4).unwrap();
        list.measure(720.0);
        b.iter(|| {
            for &offset in &offsets {
                list.on_scroll(black_box(offset));
            }
            black_box(list.start_index());
        });
    });

    group.bench_function("on_scroll_with_resize", |b| {
        let mut list = WindowedList::with_overscan(60.0, 4).unwrap();
        b.iter(|| {
            for (i, &offset) in offsets.iter().enumerate() {
                if i % 64 == 0 {
                    list.measure(black_box(480.0 + (i % 512) as f64));
                }
                list.on_scroll(black_box(offset));
            }
            black_box(list.window());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_visible_slice, bench_scroll_sweep);
criterion_main!(benches);
