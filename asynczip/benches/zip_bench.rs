// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use asynczip::{AsyncZip, StreamSource, WaitPolicy};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use futures::stream;
use std::hint::black_box;
use tokio::runtime::Runtime;

fn make_zip(source_count: usize, items_per_source: usize) -> AsyncZip<usize> {
    let mut zip = AsyncZip::new(WaitPolicy::AllCompleted);
    for offset in 0..source_count {
        let items: Vec<usize> = (0..items_per_source).map(|i| i * source_count + offset).collect();
        zip = zip.source(StreamSource::new(stream::iter(items)));
    }
    zip
}

pub fn bench_next_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_row");
    let source_counts = [2usize, 8, 32];
    let items_per_source = 1000usize;

    for &source_count in &source_counts {
        let id = BenchmarkId::from_parameter(format!("s{source_count}_n{items_per_source}"));
        group.throughput(Throughput::Elements(items_per_source as u64));
        group.bench_with_input(
            id,
            &(source_count, items_per_source),
            |bencher, &(source_count, items_per_source)| {
                bencher.iter(|| {
                    let rt = Runtime::new().unwrap();
                    rt.block_on(async move {
                        let mut handle = make_zip(source_count, items_per_source).start().await;
                        while let Some(row) = handle.next_row().await {
                            black_box(row);
                        }
                    });
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_next_row);
criterion_main!(benches);
