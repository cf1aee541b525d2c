//! Criterion benchmarks for the ranking pipeline.
//!
//! Measures a full `rank` call across table sizes, once for a neutral request
//! and once with important and unimportant selections.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package cityrank-core
//! ```

#![expect(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use cityrank_core::{Ranker, RankingRequest};

mod support;

use support::{BENCHMARK_SEED, generate_table};

/// Cities per generated table.
const TABLE_SIZES: &[usize] = &[100, 1_000, 10_000];

fn requests() -> [(&'static str, RankingRequest); 2] {
    [
        ("neutral", RankingRequest::new()),
        (
            "weighted",
            RankingRequest::new()
                .with_important(["Dog Parks"])
                .with_unimportant(["Basketball Hoops"]),
        ),
    ]
}

#[expect(clippy::expect_used, reason = "benchmark inputs are generated and must be valid")]
fn bench_rank_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_time");
    let ranker = Ranker::default();

    for &size in TABLE_SIZES {
        let table = generate_table(size, BENCHMARK_SEED).expect("synthetic table");
        group.throughput(Throughput::Elements(
            u64::try_from(size).unwrap_or(u64::MAX),
        ));
        for (label, request) in requests() {
            group.bench_with_input(BenchmarkId::new(label, size), &request, |b, request| {
                b.iter(|| {
                    #[expect(
                        clippy::let_underscore_must_use,
                        reason = "Benchmarking rank performance, result is intentionally discarded"
                    )]
                    let _ = ranker.rank(&table, request);
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_rank_times);
criterion_main!(benches);
