//! Trade signals produced by the decision engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Proposed action for one candle.
///
/// The wallet may override a proposed action via its own exit policy
/// (e.g. HOLD becomes SELL when a take-profit fires).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Buy => "BUY",
            Action::Sell => "SELL",
            Action::Hold => "HOLD",
        };
        f.write_str(s)
    }
}

/// One decision: action, human-readable reason, and the candle's
/// normalized UTC time (`YYYY-MM-DD HH:MM`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSignal {
    pub action: Action,
    pub reason: String,
    pub time: String,
}
