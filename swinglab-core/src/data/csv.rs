//! CSV candle persistence.
//!
//! The on-disk format is the tabular time-series described by the engine's
//! external interface: `timestamp,open,high,low,close,volume` plus the
//! indicator columns. Reading is lenient at the cell level (garbage numeric
//! cells become `None`); a missing or unparseable `close` fails the row.

use std::path::Path;

use thiserror::Error;

use crate::domain::Candle;

/// Errors from the candle I/O layer.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("candle file '{0}' contains no rows")]
    Empty(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load a candle series from a CSV file, in file order.
///
/// The caller is responsible for chronological ordering; the engine does
/// not sort.
pub fn read_candles(path: &Path) -> Result<Vec<Candle>, DataError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut candles = Vec::new();
    for row in reader.deserialize() {
        candles.push(row?);
    }
    if candles.is_empty() {
        return Err(DataError::Empty(path.display().to_string()));
    }
    Ok(candles)
}

/// Persist a candle series (typically an indicator-enriched snapshot).
pub fn write_candles(path: &Path, candles: &[Candle]) -> Result<(), DataError> {
    let mut writer = csv::Writer::from_path(path)?;
    for candle in candles {
        writer.serialize(candle)?;
    }
    writer.flush()?;
    Ok(())
}
