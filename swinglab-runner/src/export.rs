//! Result export — CSV and JSON artifact generation.
//!
//! Two tabular artifacts mirror the engine's external interface: the trade
//! ledger (one row per processed candle) and the optimization leaderboard
//! (one row per evaluated configuration). A third, the signal log, is an
//! append-only decision journal.

use std::path::Path;

use anyhow::{Context, Result};

use swinglab_core::domain::{Ledger, TradeSignal};

use crate::leaderboard::Leaderboard;

// ─── Ledger CSV ─────────────────────────────────────────────────────

/// Serialize a ledger as CSV.
///
/// Columns: time, signal, price, amount, cash_balance, asset_balance,
/// portfolio_value, reason
pub fn export_ledger_csv(ledger: &Ledger) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "time",
        "signal",
        "price",
        "amount",
        "cash_balance",
        "asset_balance",
        "portfolio_value",
        "reason",
    ])?;

    for entry in ledger.entries() {
        wtr.write_record([
            &entry.time,
            &entry.signal.to_string(),
            &format!("{:.6}", entry.price),
            &format!("{:.8}", entry.amount),
            &format!("{:.2}", entry.cash_balance),
            &format!("{:.8}", entry.asset_balance),
            &format!("{:.2}", entry.portfolio_value),
            &entry.reason,
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── Leaderboard CSV / JSON ─────────────────────────────────────────

/// Serialize a leaderboard as CSV, best configuration first.
///
/// Columns: rsi_buy, rsi_sell, take_profit_pct, stop_loss_pct, risk_pct,
/// final_portfolio_value, net_return_pct, total_trades
pub fn export_leaderboard_csv(leaderboard: &Leaderboard) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "rsi_buy",
        "rsi_sell",
        "take_profit_pct",
        "stop_loss_pct",
        "risk_pct",
        "final_portfolio_value",
        "net_return_pct",
        "total_trades",
    ])?;

    for row in leaderboard.entries() {
        wtr.write_record([
            &row.rsi_buy.to_string(),
            &row.rsi_sell.to_string(),
            &row.take_profit_pct.to_string(),
            &row.stop_loss_pct.to_string(),
            &row.risk_pct.to_string(),
            &format!("{:.2}", row.final_portfolio_value),
            &format!("{:.2}", row.net_return_pct),
            &row.total_trades.to_string(),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Serialize a leaderboard as pretty JSON.
pub fn export_leaderboard_json(leaderboard: &Leaderboard) -> Result<String> {
    serde_json::to_string_pretty(leaderboard).context("failed to serialize leaderboard to JSON")
}

// ─── Signal log ─────────────────────────────────────────────────────

/// Append one decision to a signal log, creating the file (with header)
/// on first use.
///
/// Columns: time, signal, reason, asset_balance, cash_balance
pub fn append_signal_log(
    path: &Path,
    signal: &TradeSignal,
    cash_balance: f64,
    asset_balance: f64,
) -> Result<()> {
    let exists = path.exists();
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open signal log '{}'", path.display()))?;

    let mut wtr = csv::Writer::from_writer(file);
    if !exists {
        wtr.write_record(["time", "signal", "reason", "asset_balance", "cash_balance"])?;
    }
    wtr.write_record([
        &signal.time,
        &signal.action.to_string(),
        &signal.reason,
        &format!("{asset_balance:.8}"),
        &format!("{cash_balance:.2}"),
    ])?;
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use swinglab_core::domain::{Action, LedgerEntry};
    use crate::result::OptimizationResult;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.push(LedgerEntry {
            time: "2023-03-15 12:00".into(),
            signal: Action::Buy,
            price: 100.0,
            amount: 2.0,
            cash_balance: 9_799.8,
            asset_balance: 2.0,
            portfolio_value: 9_999.8,
            reason: "RSI below 40 and MACD crossover".into(),
        });
        ledger
    }

    #[test]
    fn ledger_csv_has_expected_shape() {
        let csv = export_ledger_csv(&sample_ledger()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "time,signal,price,amount,cash_balance,asset_balance,portfolio_value,reason"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("2023-03-15 12:00,BUY,100.000000,2.00000000,"));
        assert!(row.ends_with("RSI below 40 and MACD crossover"));
    }

    #[test]
    fn leaderboard_csv_is_ranked() {
        let lb = Leaderboard::new(vec![
            OptimizationResult {
                rsi_buy: 45.0,
                rsi_sell: 55.0,
                take_profit_pct: 0.03,
                stop_loss_pct: 0.01,
                risk_pct: 0.03,
                final_portfolio_value: 10_100.0,
                net_return_pct: 1.0,
                total_trades: 4,
            },
            OptimizationResult {
                rsi_buy: 48.0,
                rsi_sell: 52.0,
                take_profit_pct: 0.025,
                stop_loss_pct: 0.015,
                risk_pct: 0.03,
                final_portfolio_value: 10_300.0,
                net_return_pct: 3.0,
                total_trades: 6,
            },
        ]);
        let csv = export_leaderboard_csv(&lb).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "rsi_buy,rsi_sell,take_profit_pct,stop_loss_pct,risk_pct,final_portfolio_value,net_return_pct,total_trades"
        );
        assert!(lines[1].starts_with("48,52,"));
        assert!(lines[2].starts_with("45,55,"));
    }

    #[test]
    fn leaderboard_json_roundtrip() {
        let lb = Leaderboard::new(vec![]);
        let json = export_leaderboard_json(&lb).unwrap();
        let back: Leaderboard = serde_json::from_str(&json).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn signal_log_appends_with_single_header() {
        let path =
            std::env::temp_dir().join(format!("swinglab_signal_log_{}.csv", std::process::id()));
        std::fs::remove_file(&path).ok();

        let signal = TradeSignal {
            action: Action::Hold,
            reason: "No clear signal".into(),
            time: "2023-03-15 12:00".into(),
        };
        append_signal_log(&path, &signal, 10_000.0, 0.0).unwrap();
        append_signal_log(&path, &signal, 10_000.0, 0.0).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "time,signal,reason,asset_balance,cash_balance");
        assert_eq!(lines[1], lines[2]);
    }
}
