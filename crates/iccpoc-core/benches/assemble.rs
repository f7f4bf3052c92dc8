//! Profile assembly benchmarks
//!
//! Assembly is a handful of copies; these exist to catch accidental
//! quadratic behaviour when the colorant count grows.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use iccpoc_core::{PocConfig, ProfileBuilder, inspect};

const ENTRY_COUNTS: &[u32] = &[1, 16, 256, 4096];

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");

    for &count in ENTRY_COUNTS {
        let config = PocConfig {
            entry_count: count,
            ..Default::default()
        };
        let builder = ProfileBuilder::from_config(&config).unwrap();
        group.throughput(Throughput::Bytes(builder.assemble().unwrap().len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &builder, |b, builder| {
            b.iter(|| black_box(builder.assemble().unwrap()))
        });
    }

    group.finish();
}

fn bench_inspect(c: &mut Criterion) {
    let mut group = c.benchmark_group("inspect");

    for &count in ENTRY_COUNTS {
        let config = PocConfig {
            entry_count: count,
            ..Default::default()
        };
        let bytes = ProfileBuilder::from_config(&config).unwrap().assemble().unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &bytes, |b, bytes| {
            b.iter(|| inspect(black_box(bytes)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_assemble, bench_inspect);
criterion_main!(benches);
