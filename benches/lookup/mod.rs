use std::{hint::black_box, ops::RangeInclusive};

use closed_interval_map::IntervalMap;
use criterion::{BenchmarkId, Criterion, Throughput};

use crate::Lfsr;

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("get");

    for n_values in [1_000, 10_000] {
        let mut rand = Lfsr::default();
        let t = IntervalMap::from_entries((0..n_values).map(|i| (rand.next_range(), i))).unwrap();

        let hits = t.iter().map(|(r, _)| r.clone()).collect::<Vec<_>>();

        // Keys sharing a start bound with a stored interval, differing only in
        // the end bound, so the descent reaches the end bound tie-break.
        let near_misses = hits
            .iter()
            .filter(|r| *r.end() < u16::MAX)
            .map(|r| *r.start()..=*r.end() + 1)
            .filter(|r| !t.contains_key(r).unwrap())
            .collect::<Vec<_>>();

        for (name, keys) in [("exact_hits", &hits), ("near_misses", &near_misses)] {
            g.throughput(Throughput::Elements(keys.len() as _));
            g.bench_function(BenchmarkId::new(name, n_values), |b| {
                b.iter(|| lookup_all(&t, keys))
            });
        }
    }
}

fn lookup_all(t: &IntervalMap<u16, usize>, keys: &[RangeInclusive<u16>]) -> usize {
    keys.iter()
        .filter_map(|k| black_box(t.get(k).unwrap()))
        .count()
}
