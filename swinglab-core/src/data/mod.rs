//! Candle I/O — CSV persistence and synthetic series generation.

pub mod csv;
pub mod synthetic;

pub use self::csv::{read_candles, write_candles, DataError};
pub use synthetic::synthetic_candles;
