//! Swinglab Core — engine, domain types, decision engine, risk policy, indicators.
//!
//! This crate contains the heart of the backtesting engine:
//! - Domain types (candles, signals, ledger entries, strategy config)
//! - Decision engine mapping indicator-enriched candles to trade signals
//! - Risk policy (position sizing, exposure ceiling)
//! - Simulated wallet: the stateful fold over a chronological candle stream
//! - Indicator derivation (RSI, MACD, EMA) from a close series
//! - CSV candle I/O and synthetic candle generation

pub mod data;
pub mod domain;
pub mod engine;
pub mod indicators;
pub mod risk;
pub mod strategy;
