//! Engine throughput: full decide-then-execute fold over synthetic candles.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use swinglab_core::data::synthetic_candles;
use swinglab_core::domain::StrategyConfig;
use swinglab_core::engine::SimulatedWallet;
use swinglab_core::indicators::enrich;

fn bench_wallet_run(c: &mut Criterion) {
    let mut candles = synthetic_candles(10_000, 42);
    enrich(&mut candles);

    c.bench_function("wallet_run_10k_candles", |b| {
        b.iter(|| {
            let mut wallet = SimulatedWallet::new(10_000.0, StrategyConfig::default());
            wallet.run(black_box(&candles));
            black_box(wallet.ledger().len())
        })
    });
}

fn bench_enrich(c: &mut Criterion) {
    let candles = synthetic_candles(10_000, 42);

    c.bench_function("enrich_10k_candles", |b| {
        b.iter(|| {
            let mut copy = candles.clone();
            enrich(&mut copy);
            black_box(copy.len())
        })
    });
}

criterion_group!(benches, bench_wallet_run, bench_enrich);
criterion_main!(benches);
