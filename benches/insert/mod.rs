use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use closed_interval_map::IntervalMap;

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    bench: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

/// Measure the time needed to populate an empty tree with `n_values` randomly
/// generated intervals, one insert at a time and as a single bulk build.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let bench_name = BenchName {
        bench: "insert",
        n_values,
    };
    g.throughput(Throughput::Elements(n_values as _)); // Keys inserted per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || (IntervalMap::default(), Lfsr::default()),
            |(mut t, mut rand)| {
                for _i in 0..n_values {
                    let range = rand.next_range();
                    t.insert(range, 42_usize).unwrap();
                }
                t
            },
            BatchSize::PerIteration,
        );
    });

    let mut rand = Lfsr::default();
    let entries = (0..n_values)
        .map(|i| (rand.next_range(), i % 4))
        .collect::<Vec<_>>();

    let bench_name = BenchName {
        bench: "from_entries",
        n_values,
    };
    g.throughput(Throughput::Elements(n_values as _));
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || entries.clone(),
            |entries| IntervalMap::from_entries(entries).unwrap(),
            BatchSize::SmallInput,
        );
    });

    let bench_name = BenchName {
        bench: "from_entries_coalesced",
        n_values,
    };
    g.throughput(Throughput::Elements(n_values as _));
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || entries.clone(),
            |entries| IntervalMap::from_entries_coalesced(entries).unwrap(),
            BatchSize::SmallInput,
        );
    });
}
