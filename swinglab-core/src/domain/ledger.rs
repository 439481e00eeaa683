//! Ledger — append-only record of executed simulation steps.

use serde::{Deserialize, Serialize};

use super::signal::Action;

/// A record of one executed step.
///
/// Balances and portfolio value are the *resulting* state after the
/// transition; `amount` is the quantity transacted this step (zero for
/// HOLD entries).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub time: String,
    pub signal: Action,
    pub price: f64,
    pub amount: f64,
    pub cash_balance: f64,
    pub asset_balance: f64,
    pub portfolio_value: f64,
    pub reason: String,
}

/// Append-only sequence of ledger entries, one per processed candle.
///
/// Total ordering is the chronological order of the input rows. There is
/// no API to remove or reorder entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LedgerEntry> {
        self.entries.last()
    }

    /// Number of executed trades: entries whose realized signal is not HOLD.
    pub fn trade_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.signal != Action::Hold)
            .count()
    }

    /// Portfolio value after the final processed row, if any row was processed.
    pub fn final_portfolio_value(&self) -> Option<f64> {
        self.entries.last().map(|e| e.portfolio_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(signal: Action, portfolio_value: f64) -> LedgerEntry {
        LedgerEntry {
            time: "2023-03-15 12:00".into(),
            signal,
            price: 100.0,
            amount: 0.0,
            cash_balance: 10_000.0,
            asset_balance: 0.0,
            portfolio_value,
            reason: "No clear signal".into(),
        }
    }

    #[test]
    fn trade_count_ignores_holds() {
        let mut ledger = Ledger::new();
        ledger.push(entry(Action::Hold, 10_000.0));
        ledger.push(entry(Action::Buy, 10_000.0));
        ledger.push(entry(Action::Hold, 10_050.0));
        ledger.push(entry(Action::Sell, 10_100.0));
        assert_eq!(ledger.trade_count(), 2);
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn final_value_is_last_entry() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.final_portfolio_value(), None);
        ledger.push(entry(Action::Hold, 10_000.0));
        ledger.push(entry(Action::Hold, 10_250.0));
        assert_eq!(ledger.final_portfolio_value(), Some(10_250.0));
    }
}
