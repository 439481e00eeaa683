//! Simulated wallet — walks a chronological candle stream and tracks the
//! evolving position.
//!
//! The position is either FLAT (`asset_balance == 0`) or LONG
//! (`asset_balance > 0`); `entry_price`/`entry_time` are set iff LONG.
//! Every processed row appends exactly one ledger entry. An external
//! signal can be overridden by the wallet's own exit policy: take-profit,
//! then stop-loss, then a 24-hour time exit, first match wins.

use chrono::{Duration, NaiveDateTime};

use crate::domain::{Action, Candle, Ledger, LedgerEntry, StrategyConfig};
use crate::risk::{position_size, within_exposure};
use crate::strategy::{decide, parse_clock};

/// Maximum holding period before the time-based exit fires.
const MAX_HOLD_HOURS: i64 = 24;

/// Stateful single-asset wallet simulator.
///
/// Owned exclusively by one simulation run; never shared across runs.
#[derive(Debug, Clone)]
pub struct SimulatedWallet {
    config: StrategyConfig,
    cash_balance: f64,
    asset_balance: f64,
    entry_price: Option<f64>,
    entry_time: Option<NaiveDateTime>,
    ledger: Ledger,
}

impl SimulatedWallet {
    pub fn new(starting_cash: f64, config: StrategyConfig) -> Self {
        Self {
            config,
            cash_balance: starting_cash,
            asset_balance: 0.0,
            entry_price: None,
            entry_time: None,
            ledger: Ledger::new(),
        }
    }

    pub fn cash_balance(&self) -> f64 {
        self.cash_balance
    }

    pub fn asset_balance(&self) -> f64 {
        self.asset_balance
    }

    pub fn entry_price(&self) -> Option<f64> {
        self.entry_price
    }

    pub fn entry_time(&self) -> Option<NaiveDateTime> {
        self.entry_time
    }

    pub fn is_long(&self) -> bool {
        self.asset_balance > 0.0
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    /// Cash plus asset value at the given price.
    pub fn portfolio_value(&self, price: f64) -> f64 {
        self.cash_balance + self.asset_balance * price
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    /// Run the full decide-then-execute fold over a candle slice.
    ///
    /// The caller is trusted to supply rows in chronological order.
    pub fn run(&mut self, candles: &[Candle]) {
        for candle in candles {
            let signal = decide(candle, self.config.rsi_buy, self.config.rsi_sell);
            self.execute(signal.action, candle.close, &signal.time, &signal.reason);
        }
    }

    /// Apply one proposed signal at the given price and time.
    ///
    /// Appends exactly one ledger entry regardless of outcome. Malformed
    /// time strings parse to the epoch default rather than erroring.
    pub fn execute(&mut self, action: Action, price: f64, time: &str, reason: &str) {
        let now = parse_clock(time);
        let total_value = self.portfolio_value(price);
        let current_exposure = if total_value > 0.0 {
            (self.asset_balance * price) / total_value
        } else {
            0.0
        };

        match action {
            Action::Buy
                if self.cash_balance > 0.0
                    && within_exposure(current_exposure, self.config.max_exposure_pct) =>
            {
                let amount = position_size(self.cash_balance, price, self.config.risk_pct);
                let cost = amount * price * (1.0 + self.config.fee_rate);
                if amount > 0.0 && self.cash_balance >= cost {
                    self.cash_balance -= cost;
                    self.asset_balance += amount;
                    self.entry_price = Some(price);
                    self.entry_time = Some(now);
                    self.record(time, Action::Buy, price, amount, reason);
                } else {
                    self.record(
                        time,
                        Action::Hold,
                        price,
                        0.0,
                        "Insufficient funds for risk-based position",
                    );
                }
            }
            // An explicit SELL exits unconditionally, even when already flat.
            Action::Sell => self.liquidate(price, time, reason),
            _ => {
                if self.is_long() {
                    if let Some(exit_reason) = self.should_exit(price, now) {
                        self.liquidate(price, time, exit_reason);
                        return;
                    }
                }
                self.record(time, Action::Hold, price, 0.0, reason);
            }
        }
    }

    /// Autonomous exit policy, evaluated only when LONG.
    ///
    /// Priority: take-profit, stop-loss, time exit. The ordering is a
    /// defined tie-break for equal-valued edge configurations.
    fn should_exit(&self, price: f64, now: NaiveDateTime) -> Option<&'static str> {
        let entry_price = self.entry_price?;
        let entry_time = self.entry_time?;

        let pct_change = (price - entry_price) / entry_price;
        if pct_change >= self.config.take_profit_pct {
            return Some("Take Profit Triggered");
        }
        if pct_change <= -self.config.stop_loss_pct {
            return Some("Stop Loss Triggered");
        }
        if now - entry_time >= Duration::hours(MAX_HOLD_HOURS) {
            return Some("Time-Based Exit (24h)");
        }
        None
    }

    /// Full liquidation: credit proceeds net of fee, reset to FLAT.
    ///
    /// The ledger entry reports the liquidated amount and the resulting
    /// (post-reset) balances.
    fn liquidate(&mut self, price: f64, time: &str, reason: &str) {
        let amount = self.asset_balance;
        self.cash_balance += amount * price * (1.0 - self.config.fee_rate);
        self.asset_balance = 0.0;
        self.entry_price = None;
        self.entry_time = None;
        self.record(time, Action::Sell, price, amount, reason);
    }

    fn record(&mut self, time: &str, signal: Action, price: f64, amount: f64, reason: &str) {
        self.ledger.push(LedgerEntry {
            time: time.to_string(),
            signal,
            price,
            amount,
            cash_balance: self.cash_balance,
            asset_balance: self.asset_balance,
            portfolio_value: self.portfolio_value(price),
            reason: reason.to_string(),
        });
    }
}
