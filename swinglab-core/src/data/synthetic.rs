//! Synthetic candle generation — seeded random-walk hourly series.
//!
//! A stand-in when no real market data is on disk; also used by benches
//! and integration tests. Deterministic for a given seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::Candle;

/// Epoch base for the first synthetic candle (2023-11-14 22:13:20 UTC).
const BASE_EPOCH: i64 = 1_700_000_000;
/// Starting price for the walk.
const BASE_PRICE: f64 = 30_000.0;

/// Generate `n` hourly candles following a bounded random walk.
pub fn synthetic_candles(n: usize, seed: u64) -> Vec<Candle> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut close = BASE_PRICE;

    (0..n)
        .map(|i| {
            let open = close;
            let drift: f64 = rng.gen_range(-0.02..0.02);
            close = (close * (1.0 + drift)).max(1.0);

            let high = open.max(close) * (1.0 + rng.gen_range(0.0..0.005));
            let low = open.min(close) * (1.0 - rng.gen_range(0.0..0.005));

            Candle {
                timestamp: Some((BASE_EPOCH + i as i64 * 3600) as f64),
                open: Some(open),
                high: Some(high),
                low: Some(low),
                close,
                volume: Some(rng.gen_range(10.0..500.0)),
                ..Default::default()
            }
        })
        .collect()
}
