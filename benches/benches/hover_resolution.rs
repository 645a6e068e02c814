// Copyright 2026 the Sortable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use sortable_core::compute_ordering;
use sortable_geometry::{BoxSnapshot, slot_for_point};

// A grid of `cols` columns and enough rows for `n` items, in reading order.
fn gen_grid_boxes(n: usize, cols: usize, cell: f64) -> Vec<Rect> {
    (0..n)
        .map(|i| {
            let x0 = (i % cols) as f64 * cell;
            let y0 = (i / cols) as f64 * cell;
            Rect::new(x0, y0, x0 + cell, y0 + cell)
        })
        .collect()
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1_u64 << 53) as f64
    }
    fn next_point(&mut self, extent: f64) -> Point {
        Point::new(self.next_f64() * extent, self.next_f64() * extent)
    }
    fn next_index(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

fn bench_slot_resolution(c: &mut Criterion) {
    for &n in &[16_usize, 64, 256] {
        let boxes = gen_grid_boxes(n, 4, 40.0);
        let extent = (n as f64 / 4.0).ceil() * 40.0;
        let mut rng = Rng::new(0x5eed);

        let mut group = c.benchmark_group("slot_for_point");
        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("grid_{n}"), |b| {
            b.iter_batched(
                || rng.next_point(extent),
                |pos| black_box(slot_for_point(pos, black_box(&boxes))),
                BatchSize::SmallInput,
            );
        });
        group.finish();
    }
}

fn bench_snapshot_capture(c: &mut Criterion) {
    for &n in &[16_usize, 64, 256] {
        // Registration order is reversed so the capture sort does real work.
        let mut refs = gen_grid_boxes(n, 4, 40.0);
        refs.reverse();

        let mut group = c.benchmark_group("snapshot_capture");
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("reversed_{n}"), |b| {
            b.iter(|| black_box(BoxSnapshot::capture(black_box(&refs))));
        });
        group.finish();
    }
}

fn bench_ordering(c: &mut Criterion) {
    for &n in &[16_usize, 64, 256] {
        let mut rng = Rng::new(0xfeed);

        let mut group = c.benchmark_group("compute_ordering");
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n_{n}"), |b| {
            b.iter_batched(
                || (rng.next_index(n), rng.next_index(n + 1)),
                |(source, hover)| {
                    black_box(compute_ordering(n, Some(source), Some(hover)))
                },
                BatchSize::SmallInput,
            );
        });
        group.finish();
    }
}

criterion_group!(
    benches,
    bench_slot_resolution,
    bench_snapshot_capture,
    bench_ordering
);
criterion_main!(benches);
