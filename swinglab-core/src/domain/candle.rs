//! Candle — one time step of market data enriched with indicators.

use serde::{Deserialize, Deserializer, Serialize};

/// Indicator-enriched OHLCV candle.
///
/// Only `close` is required; every other column tolerates absent or
/// unparseable cells, which deserialize to `None`. Indicator columns are
/// `None` until [`crate::indicators::enrich`] fills them, and stay `None`
/// for the warm-up prefix where the indicator is undefined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Seconds since epoch. Unparseable timestamps become `None` and
    /// normalize to epoch zero downstream.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub timestamp: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub open: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub high: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub low: Option<f64>,
    pub close: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rsi: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub macd: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub macds: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub macdh: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", alias = "ema_12")]
    pub ema_fast: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", alias = "ema_26")]
    pub ema_slow: Option<f64>,
}

impl Candle {
    /// True if the candle carries everything a simulation step needs:
    /// `rsi`, `macd`, `macds` present and finite, and a finite close.
    ///
    /// This is the row-filtering predicate the optimizer applies before
    /// simulation. The decision engine itself is more forgiving and
    /// degrades incomplete rows to HOLD.
    pub fn has_indicators(&self) -> bool {
        self.close.is_finite()
            && matches!(self.rsi, Some(v) if v.is_finite())
            && matches!(self.macd, Some(v) if v.is_finite())
            && matches!(self.macds, Some(v) if v.is_finite())
    }

    /// Timestamp as integer seconds since epoch, defaulting to 0 when
    /// absent or non-finite.
    pub fn epoch_seconds(&self) -> i64 {
        match self.timestamp {
            Some(t) if t.is_finite() => t as i64,
            _ => 0,
        }
    }
}

/// Deserialize an optional float from a cell that may hold garbage.
///
/// CSV cells arrive as strings; empty or non-numeric cells become `None`
/// instead of failing the whole row.
fn lenient_f64<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    Ok(raw.and_then(|s| {
        let s = s.trim();
        if s.is_empty() {
            None
        } else {
            s.parse::<f64>().ok()
        }
    }))
}
