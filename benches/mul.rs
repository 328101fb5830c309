use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use std::hint::black_box;
use wide_mul::{
    Random, U256, U512,
    multiplier::{Lanes, WideMultiplier},
};

fn bench_mul(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::from_seed([7u8; 32]);
    let mut group = c.benchmark_group("wrapping ops");

    group.bench_function("concatenating_mul, U256*U256", |b| {
        b.iter_batched(
            || (U256::random(&mut rng), U256::random(&mut rng)),
            |(x, y)| black_box::<U512>(x.concatenating_mul(&y)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("square_wide, U256", |b| {
        b.iter_batched(
            || U256::random(&mut rng),
            |x| black_box(x.square_wide()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("wrapping_mul, U256*U256", |b| {
        b.iter_batched(
            || (U256::random(&mut rng), U256::random(&mut rng)),
            |(x, y)| black_box(x.wrapping_mul(&y)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_multiplier(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::from_seed([7u8; 32]);
    let mut group = c.benchmark_group("multiplier");

    let software = WideMultiplier::new();
    group.bench_function("software", |b| {
        b.iter_batched(
            || (U256::random(&mut rng), U256::random(&mut rng)),
            |(x, y)| black_box(software.multiply(&x, &y)),
            BatchSize::SmallInput,
        )
    });

    let four_lanes = WideMultiplier::with_backend(Lanes::<4>::new());
    group.bench_function("4 lanes", |b| {
        b.iter_batched(
            || (U256::random(&mut rng), U256::random(&mut rng)),
            |(x, y)| black_box(four_lanes.multiply(&x, &y)),
            BatchSize::SmallInput,
        )
    });

    let mut delayed = WideMultiplier::new();
    delayed.set_delay(50);
    group.bench_function("software, delay 50", |b| {
        b.iter_batched(
            || (U256::random(&mut rng), U256::random(&mut rng)),
            |(x, y)| black_box(delayed.multiply(&x, &y)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_mul, bench_multiplier);

criterion_main!(benches);
