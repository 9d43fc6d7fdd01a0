use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fabkit::rod::entities::PriceTable;
use fabkit::rod::{solve_memo, solve_table};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

criterion_main!(benches);
criterion_group!(benches, strategy_bench);

const LENGTHS: [usize; 3] = [50, 200, 800];
const N_PRICES: usize = 100;

fn random_prices(rng: &mut SmallRng) -> PriceTable {
    PriceTable::new((0..N_PRICES).map(|_| rng.random_range(0..=1000)).collect())
}

/// Compares the memoized and tabulated strategies over increasing rod lengths
fn strategy_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let prices = random_prices(&mut rng);

    let mut group = c.benchmark_group("rod_strategies");
    for length in LENGTHS {
        group.bench_with_input(BenchmarkId::new("memoized", length), &length, |b, &l| {
            b.iter(|| solve_memo(black_box(l), &prices).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("tabulated", length), &length, |b, &l| {
            b.iter(|| solve_table(black_box(l), &prices).unwrap())
        });
    }
    group.finish();
}
