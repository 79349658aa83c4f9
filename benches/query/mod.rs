use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use closed_interval_map::IntervalMap;

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("query");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree.
    let mut rand = Lfsr::default();
    let mut t = IntervalMap::default();

    for _i in 0..n_values {
        let range = rand.next_range();
        t.insert(range, 42_usize).unwrap();
    }

    bench_iter(n_values, g, &t);
    bench_overlapping(n_values, g, &t);
    bench_get_all_at(n_values, g, &t);
    bench_has_overlap(n_values, g, &t);
    bench_get_at(n_values, g, &t);
}

fn bench_iter<M>(n_values: usize, g: &mut BenchmarkGroup<'_, M>, t: &IntervalMap<u16, usize>)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "iter",
    };

    g.throughput(Throughput::Elements(n_values as _));
    // Values per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            for v in t.iter() {
                black_box(v);
            }
        })
    });
}

/// Generate a benchmark function `bench_<name>` measuring a single call to
/// `IntervalMap::<name>()`, fully consuming the result.
macro_rules! query_bench {
    (
        $name:ident,
        $query:expr,
        |$res:ident| $consume:expr
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(n_values: usize, g: &mut BenchmarkGroup<'_, M>, t: &IntervalMap<u16, usize>)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };

                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| {
                        let query = $query;
                        let $res = t.$name(query);
                        $consume
                    })
                });
            }
        }
    };
}

query_bench!(overlapping, &(42..=100), |res| {
    for v in res.unwrap() {
        black_box(v);
    }
});
query_bench!(get_all_at, &4242, |res| {
    for v in res {
        black_box(v);
    }
});
query_bench!(has_overlap, &(42..=100), |res| black_box(res.unwrap()));
query_bench!(get_at, &4242, |res| black_box(res));
