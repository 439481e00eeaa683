//! Strategy configuration — the immutable parameter bundle for one run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default RSI threshold below which a BUY is considered.
pub const DEFAULT_RSI_BUY: f64 = 40.0;
/// Default RSI threshold above which a SELL is considered.
pub const DEFAULT_RSI_SELL: f64 = 60.0;
/// Default take-profit fraction.
pub const DEFAULT_TAKE_PROFIT_PCT: f64 = 0.03;
/// Default stop-loss fraction.
pub const DEFAULT_STOP_LOSS_PCT: f64 = 0.01;
/// Default fraction of free cash committed per entry.
pub const DEFAULT_RISK_PCT: f64 = 0.02;
/// Default proportional transaction fee.
pub const DEFAULT_FEE_RATE: f64 = 0.001;
/// Default ceiling on the asset-value fraction of the portfolio.
pub const DEFAULT_MAX_EXPOSURE_PCT: f64 = 1.0;

/// Validation errors for a [`StrategyConfig`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be non-negative, got {value}")]
    NegativePercentage { field: &'static str, value: f64 },

    #[error("fee_rate must be within [0, 1], got {0}")]
    FeeOutOfRange(f64),
}

/// Immutable parameter bundle for one simulation run.
///
/// Every optimizer run gets its own copy; nothing here is ever shared
/// mutable state across parallel runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// BUY is considered when RSI drops below this threshold.
    pub rsi_buy: f64,
    /// SELL is considered when RSI rises above this threshold.
    pub rsi_sell: f64,
    /// Unrealized gain fraction that forces an exit.
    pub take_profit_pct: f64,
    /// Unrealized loss fraction that forces an exit.
    pub stop_loss_pct: f64,
    /// Fraction of free cash committed per entry.
    pub risk_pct: f64,
    /// Proportional transaction cost applied on both sides.
    pub fee_rate: f64,
    /// Inclusive ceiling on asset exposure as a fraction of total value.
    pub max_exposure_pct: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            rsi_buy: DEFAULT_RSI_BUY,
            rsi_sell: DEFAULT_RSI_SELL,
            take_profit_pct: DEFAULT_TAKE_PROFIT_PCT,
            stop_loss_pct: DEFAULT_STOP_LOSS_PCT,
            risk_pct: DEFAULT_RISK_PCT,
            fee_rate: DEFAULT_FEE_RATE,
            max_exposure_pct: DEFAULT_MAX_EXPOSURE_PCT,
        }
    }
}

impl StrategyConfig {
    /// Check the numeric invariants: percentages non-negative,
    /// `fee_rate` within [0, 1].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("take_profit_pct", self.take_profit_pct),
            ("stop_loss_pct", self.stop_loss_pct),
            ("risk_pct", self.risk_pct),
            ("max_exposure_pct", self.max_exposure_pct),
        ];
        for (field, value) in fields {
            if value < 0.0 {
                return Err(ConfigError::NegativePercentage { field, value });
            }
        }
        if !(0.0..=1.0).contains(&self.fee_rate) {
            return Err(ConfigError::FeeOutOfRange(self.fee_rate));
        }
        Ok(())
    }
}
