//! Optimization result — one row per evaluated configuration.

use serde::{Deserialize, Serialize};
use swinglab_core::domain::StrategyConfig;

/// Outcome of simulating one strategy configuration.
///
/// Money fields are rounded to cents before ranking; rounding can create
/// ties, which the leaderboard's stable sort resolves by original
/// configuration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub rsi_buy: f64,
    pub rsi_sell: f64,
    pub take_profit_pct: f64,
    pub stop_loss_pct: f64,
    pub risk_pct: f64,
    pub final_portfolio_value: f64,
    /// Net return relative to starting cash, in percent.
    pub net_return_pct: f64,
    /// Count of non-HOLD ledger entries.
    pub total_trades: usize,
}

impl OptimizationResult {
    /// Build a result row from a finished run.
    pub fn new(
        config: &StrategyConfig,
        initial_cash: f64,
        final_value: f64,
        total_trades: usize,
    ) -> Self {
        let net_return_pct = if initial_cash > 0.0 {
            round2((final_value - initial_cash) / initial_cash * 100.0)
        } else {
            0.0
        };
        Self {
            rsi_buy: config.rsi_buy,
            rsi_sell: config.rsi_sell,
            take_profit_pct: config.take_profit_pct,
            stop_loss_pct: config.stop_loss_pct,
            risk_pct: config.risk_pct,
            final_portfolio_value: round2(final_value),
            net_return_pct,
            total_trades,
        }
    }
}

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
