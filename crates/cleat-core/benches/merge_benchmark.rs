// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use cleat_core::collections::map::{MapExt, merge_map_refs, merge_maps};
use cleat_core::collections::unique::AddUnique;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::HashMap;
use std::hint::black_box;

/// Builds `count` maps of `width` entries each, with every map overlapping
/// half of its keys with the previous one.
fn overlapping_maps(count: usize, width: usize) -> Vec<FxHashMap<u64, u64>> {
    (0..count)
        .map(|i| {
            let base = (i * width / 2) as u64;
            (0..width as u64).map(|k| (base + k, i as u64)).collect()
        })
        .collect()
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_maps");

    for &count in &[2usize, 8, 32] {
        let maps = overlapping_maps(count, 256);
        let total: usize = maps.iter().map(|m| m.len()).sum();
        group.throughput(Throughput::Elements(total as u64));

        group.bench_with_input(BenchmarkId::new("owned", count), &maps, |b, maps| {
            b.iter_batched(
                || maps.clone(),
                |maps| black_box(merge_maps(maps)),
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("borrowed", count), &maps, |b, maps| {
            let refs: Vec<&FxHashMap<u64, u64>> = maps.iter().collect();
            b.iter(|| black_box(merge_map_refs(black_box(&refs))))
        });

        group.bench_with_input(BenchmarkId::new("merge_from", count), &maps, |b, maps| {
            b.iter_batched(
                || maps.clone(),
                |maps| {
                    let mut target: HashMap<u64, u64> = HashMap::new();
                    target.merge_from(maps);
                    black_box(target.len())
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_add_unique(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_range_unique");
    let items: Vec<u32> = (0..1024u32).map(|i| i % 512).collect();
    group.throughput(Throughput::Elements(items.len() as u64));

    group.bench_function("vec", |b| {
        b.iter(|| {
            let mut v: Vec<u32> = Vec::new();
            black_box(v.add_range_unique(items.iter().copied()))
        })
    });

    group.bench_function("fx_hash_set", |b| {
        b.iter(|| {
            let mut s: FxHashSet<u32> = FxHashSet::default();
            black_box(s.add_range_unique(items.iter().copied()))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_merge, bench_add_unique);
criterion_main!(benches);
