//! Parameter search — one independent wallet per candidate configuration.
//!
//! Runs are embarrassingly parallel: each owns its wallet and ledger, the
//! filtered candle sequence is shared read-only. Results are collected in
//! input order, so the final leaderboard is deterministic irrespective of
//! which parallel run finishes first.

use rayon::prelude::*;

use swinglab_core::domain::{Candle, Ledger, StrategyConfig};
use swinglab_core::engine::SimulatedWallet;

use crate::leaderboard::Leaderboard;
use crate::result::OptimizationResult;

/// Drop rows that lack any indicator the simulation needs.
///
/// Incomplete rows are excluded entirely, not defaulted to HOLD — so a
/// filtered and an unfiltered run of the same data differ in trade counts
/// by design.
pub fn filter_rows(candles: &[Candle]) -> Vec<Candle> {
    candles
        .iter()
        .filter(|c| c.has_indicators())
        .cloned()
        .collect()
}

/// Run one wallet over a candle sequence and return its ledger.
pub fn simulate(candles: &[Candle], config: &StrategyConfig, initial_cash: f64) -> Ledger {
    let mut wallet = SimulatedWallet::new(initial_cash, config.clone());
    wallet.run(candles);
    wallet.into_ledger()
}

/// The four aggressive hand-picked configurations used as the default
/// search set. Note the last one inverts the usual threshold ordering
/// (buy above sell) on purpose.
pub fn aggressive_configs() -> Vec<StrategyConfig> {
    let base = StrategyConfig::default();
    [
        (45.0, 55.0, 0.03, 0.01, 0.03),
        (48.0, 52.0, 0.025, 0.015, 0.03),
        (50.0, 50.0, 0.02, 0.02, 0.04),
        (52.0, 48.0, 0.015, 0.015, 0.05),
    ]
    .into_iter()
    .map(
        |(rsi_buy, rsi_sell, take_profit_pct, stop_loss_pct, risk_pct)| StrategyConfig {
            rsi_buy,
            rsi_sell,
            take_profit_pct,
            stop_loss_pct,
            risk_pct,
            ..base.clone()
        },
    )
    .collect()
}

/// Parameter grid specification: the cartesian product of each axis.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParamGrid {
    pub rsi_buy: Vec<f64>,
    pub rsi_sell: Vec<f64>,
    pub take_profit_pct: Vec<f64>,
    pub stop_loss_pct: Vec<f64>,
    pub risk_pct: Vec<f64>,
}

impl ParamGrid {
    /// Total number of configurations in this grid.
    pub fn size(&self) -> usize {
        self.rsi_buy.len()
            * self.rsi_sell.len()
            * self.take_profit_pct.len()
            * self.stop_loss_pct.len()
            * self.risk_pct.len()
    }

    /// Generate all configurations, inheriting fee and exposure settings
    /// from `base`. Axis order defines the original configuration order
    /// used for tie-breaking.
    pub fn generate_configs(&self, base: &StrategyConfig) -> Vec<StrategyConfig> {
        let mut configs = Vec::with_capacity(self.size());
        for &rsi_buy in &self.rsi_buy {
            for &rsi_sell in &self.rsi_sell {
                for &take_profit_pct in &self.take_profit_pct {
                    for &stop_loss_pct in &self.stop_loss_pct {
                        for &risk_pct in &self.risk_pct {
                            configs.push(StrategyConfig {
                                rsi_buy,
                                rsi_sell,
                                take_profit_pct,
                                stop_loss_pct,
                                risk_pct,
                                ..base.clone()
                            });
                        }
                    }
                }
            }
        }
        configs
    }
}

/// Parameter search executor.
pub struct Optimizer {
    initial_cash: f64,
    parallel: bool,
}

impl Optimizer {
    pub fn new(initial_cash: f64) -> Self {
        Self {
            initial_cash,
            parallel: true,
        }
    }

    /// Enable or disable parallel execution. Output is identical either
    /// way; only throughput changes.
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Evaluate every configuration over the same filtered row sequence
    /// and rank the outcomes.
    pub fn run(&self, candles: &[Candle], configs: &[StrategyConfig]) -> Leaderboard {
        let rows = filter_rows(candles);

        let results: Vec<OptimizationResult> = if self.parallel {
            configs
                .par_iter()
                .map(|config| self.evaluate(&rows, config))
                .collect()
        } else {
            configs
                .iter()
                .map(|config| self.evaluate(&rows, config))
                .collect()
        };

        Leaderboard::new(results)
    }

    fn evaluate(&self, rows: &[Candle], config: &StrategyConfig) -> OptimizationResult {
        let ledger = simulate(rows, config, self.initial_cash);
        let final_value = ledger
            .final_portfolio_value()
            .unwrap_or(self.initial_cash);
        OptimizationResult::new(config, self.initial_cash, final_value, ledger.trade_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swinglab_core::domain::Candle;

    fn complete_candle(hour: i64, close: f64, rsi: f64) -> Candle {
        Candle {
            timestamp: Some((1_700_000_000 + hour * 3600) as f64),
            close,
            rsi: Some(rsi),
            macd: Some(0.5),
            macds: Some(0.4),
            ..Default::default()
        }
    }

    #[test]
    fn filter_drops_incomplete_rows() {
        let mut incomplete = complete_candle(0, 100.0, 50.0);
        incomplete.macds = None;
        let candles = vec![
            complete_candle(0, 100.0, 50.0),
            incomplete,
            complete_candle(2, 101.0, 50.0),
        ];
        let rows = filter_rows(&candles);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn aggressive_set_has_four_configs() {
        let configs = aggressive_configs();
        assert_eq!(configs.len(), 4);
        assert_eq!(configs[0].rsi_buy, 45.0);
        assert_eq!(configs[3].rsi_buy, 52.0);
        assert_eq!(configs[3].rsi_sell, 48.0);
        // Shared ambient settings come from the defaults
        assert!(configs.iter().all(|c| c.fee_rate == 0.001));
        assert!(configs.iter().all(|c| c.max_exposure_pct == 1.0));
    }

    #[test]
    fn grid_size_is_product_of_axes() {
        let grid = ParamGrid {
            rsi_buy: vec![40.0, 45.0],
            rsi_sell: vec![55.0, 60.0],
            take_profit_pct: vec![0.03],
            stop_loss_pct: vec![0.01, 0.02],
            risk_pct: vec![0.02],
        };
        assert_eq!(grid.size(), 8);
        assert_eq!(grid.generate_configs(&StrategyConfig::default()).len(), 8);
    }

    #[test]
    fn grid_inherits_base_settings() {
        let grid = ParamGrid {
            rsi_buy: vec![40.0],
            rsi_sell: vec![60.0],
            take_profit_pct: vec![0.03],
            stop_loss_pct: vec![0.01],
            risk_pct: vec![0.02],
        };
        let base = StrategyConfig {
            fee_rate: 0.002,
            max_exposure_pct: 0.8,
            ..Default::default()
        };
        let configs = grid.generate_configs(&base);
        assert_eq!(configs[0].fee_rate, 0.002);
        assert_eq!(configs[0].max_exposure_pct, 0.8);
    }

    #[test]
    fn one_result_per_config() {
        let candles: Vec<Candle> = (0..48)
            .map(|i| complete_candle(i, 100.0 + (i % 7) as f64, 30.0 + (i % 40) as f64))
            .collect();
        let leaderboard = Optimizer::new(10_000.0).run(&candles, &aggressive_configs());
        assert_eq!(leaderboard.len(), 4);
    }

    #[test]
    fn empty_row_sequence_yields_flat_results() {
        let candles: Vec<Candle> = vec![Candle {
            close: 100.0,
            ..Default::default()
        }];
        // No row survives the filter, so every config ends at initial cash
        let leaderboard = Optimizer::new(10_000.0).run(&candles, &aggressive_configs());
        assert!(leaderboard
            .entries()
            .iter()
            .all(|r| r.final_portfolio_value == 10_000.0 && r.total_trades == 0));
    }
}
