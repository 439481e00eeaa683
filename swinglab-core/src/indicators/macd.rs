//! Moving Average Convergence Divergence (MACD).
//!
//! Line: EMA(fast) - EMA(slow). Signal: EMA(signal) of the line.
//! Histogram: line - signal.

use super::ema::ema;

/// The three MACD series, aligned 1:1 with the input closes.
#[derive(Debug, Clone)]
pub struct Macd {
    /// Fast-minus-slow EMA difference.
    pub macd: Vec<f64>,
    /// Smoothed signal line.
    pub macds: Vec<f64>,
    /// Histogram: line minus signal.
    pub macdh: Vec<f64>,
}

/// Compute MACD over a close series.
///
/// The line is NaN until the slow EMA is seeded; the signal line needs a
/// further `signal` values of line on top of that.
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal: usize) -> Macd {
    let ema_fast = ema(closes, fast);
    let ema_slow = ema(closes, slow);

    let line: Vec<f64> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(f, s)| f - s)
        .collect();

    // `ema` skips the line's NaN warm-up prefix on its own.
    let macds = ema(&line, signal);
    let macdh: Vec<f64> = line.iter().zip(&macds).map(|(l, s)| l - s).collect();

    Macd {
        macd: line,
        macds,
        macdh,
    }
}
