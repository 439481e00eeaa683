//! Domain types: candles, signals, strategy configuration, ledger.

pub mod candle;
pub mod config;
pub mod ledger;
pub mod signal;

pub use candle::Candle;
pub use config::{ConfigError, StrategyConfig};
pub use ledger::{Ledger, LedgerEntry};
pub use signal::{Action, TradeSignal};
