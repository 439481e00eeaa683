//! Indicator derivation — RSI, EMA, MACD over a close series.
//!
//! Every function returns a vector aligned 1:1 with its input, with a NaN
//! prefix covering the warm-up window where the indicator is undefined.
//! [`enrich`] maps those NaNs to `None` on the candle fields, which is what
//! the optimizer's row filter keys on.

pub mod ema;
pub mod macd;
pub mod rsi;

pub use ema::ema;
pub use macd::{macd, Macd};
pub use rsi::rsi;

use crate::domain::Candle;

/// Default RSI lookback.
pub const RSI_PERIOD: usize = 14;
/// Default MACD fast EMA period.
pub const MACD_FAST: usize = 12;
/// Default MACD slow EMA period.
pub const MACD_SLOW: usize = 26;
/// Default MACD signal-line EMA period.
pub const MACD_SIGNAL: usize = 9;

/// Fill the indicator fields of a candle series from its closes.
///
/// Computes RSI(14), MACD(12, 26, 9), and the fast/slow EMAs, writing
/// `None` wherever the indicator is still warming up.
pub fn enrich(candles: &mut [Candle]) {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    let rsi_values = rsi(&closes, RSI_PERIOD);
    let macd_values = macd(&closes, MACD_FAST, MACD_SLOW, MACD_SIGNAL);
    let ema_fast = ema(&closes, MACD_FAST);
    let ema_slow = ema(&closes, MACD_SLOW);

    for (i, candle) in candles.iter_mut().enumerate() {
        candle.rsi = finite(rsi_values[i]);
        candle.macd = finite(macd_values.macd[i]);
        candle.macds = finite(macd_values.macds[i]);
        candle.macdh = finite(macd_values.macdh[i]);
        candle.ema_fast = finite(ema_fast[i]);
        candle.ema_slow = finite(ema_slow[i]);
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

#[cfg(test)]
pub(crate) fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "expected {expected}, got {actual}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrich_fills_after_warmup() {
        let mut candles: Vec<Candle> = (0..60)
            .map(|i| Candle {
                timestamp: Some((i * 3600) as f64),
                close: 100.0 + (i as f64) * 0.5,
                ..Default::default()
            })
            .collect();
        enrich(&mut candles);

        // Warm-up prefix stays unfilled
        assert_eq!(candles[0].rsi, None);
        assert_eq!(candles[0].macds, None);

        // Tail rows carry the full indicator set
        let last = candles.last().unwrap();
        assert!(last.has_indicators());
        assert!(last.macdh.is_some());
        assert!(last.ema_fast.is_some());
        assert!(last.ema_slow.is_some());
    }

    #[test]
    fn enrich_on_short_series_leaves_all_none() {
        let mut candles: Vec<Candle> = (0..5)
            .map(|i| Candle {
                close: 100.0 + i as f64,
                ..Default::default()
            })
            .collect();
        enrich(&mut candles);
        assert!(candles.iter().all(|c| !c.has_indicators()));
    }
}
