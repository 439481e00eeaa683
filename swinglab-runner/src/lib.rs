//! Swinglab Runner — parameter search, leaderboards, and result export.
//!
//! A harness around the core engine: run one wallet per candidate
//! configuration over the same filtered candle sequence, rank the outcomes,
//! and serialize the artifacts.

pub mod config;
pub mod export;
pub mod leaderboard;
pub mod optimizer;
pub mod result;

pub use config::RunConfig;
pub use export::{
    append_signal_log, export_ledger_csv, export_leaderboard_csv, export_leaderboard_json,
};
pub use leaderboard::Leaderboard;
pub use optimizer::{aggressive_configs, filter_rows, simulate, Optimizer, ParamGrid};
pub use result::OptimizationResult;
