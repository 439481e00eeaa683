//! Decision engine — pure mapping from one candle to a trade signal.
//!
//! BUY when RSI is below the buy threshold while the MACD line is above its
//! signal line; SELL on the mirrored condition; HOLD otherwise. Rows with
//! missing or NaN indicators degrade to HOLD instead of erroring — the
//! function is total over any well-typed candle.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::domain::{Action, Candle, TradeSignal};

/// Clock format used across signals and ledger entries.
pub const CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Decide a trade action for one candle.
///
/// Never panics: incomplete indicator data yields HOLD, and the timestamp
/// normalizes to epoch zero when absent or unparseable.
pub fn decide(candle: &Candle, rsi_buy: f64, rsi_sell: f64) -> TradeSignal {
    let time = format_epoch(candle.epoch_seconds());

    let (rsi, macd, macds) = match (
        finite(candle.rsi),
        finite(candle.macd),
        finite(candle.macds),
    ) {
        (Some(rsi), Some(macd), Some(macds)) => (rsi, macd, macds),
        _ => {
            return TradeSignal {
                action: Action::Hold,
                reason: "Missing indicator data".into(),
                time,
            }
        }
    };

    if rsi < rsi_buy && macd > macds {
        TradeSignal {
            action: Action::Buy,
            reason: format!("RSI below {rsi_buy} and MACD crossover"),
            time,
        }
    } else if rsi > rsi_sell && macd < macds {
        TradeSignal {
            action: Action::Sell,
            reason: format!("RSI above {rsi_sell} and MACD crossdown"),
            time,
        }
    } else {
        TradeSignal {
            action: Action::Hold,
            reason: "No clear signal".into(),
            time,
        }
    }
}

/// Render epoch seconds as UTC `YYYY-MM-DD HH:MM`.
///
/// Out-of-range values fall back to epoch zero.
pub fn format_epoch(secs: i64) -> String {
    let dt = DateTime::<Utc>::from_timestamp(secs, 0).unwrap_or(DateTime::UNIX_EPOCH);
    dt.format(CLOCK_FORMAT).to_string()
}

/// Parse a normalized clock string back into a timestamp.
///
/// Malformed input degrades to epoch zero rather than erroring, mirroring
/// [`format_epoch`].
pub fn parse_clock(time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(time, CLOCK_FORMAT).unwrap_or(NaiveDateTime::UNIX_EPOCH)
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
