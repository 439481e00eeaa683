//! Serializable run configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use swinglab_core::domain::StrategyConfig;

/// Default starting capital for a simulation run.
pub const DEFAULT_INITIAL_CASH: f64 = 10_000.0;

/// Everything needed to reproduce a single simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Strategy parameters for the wallet.
    pub strategy: StrategyConfig,

    /// Starting cash balance.
    pub initial_cash: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyConfig::default(),
            initial_cash: DEFAULT_INITIAL_CASH,
        }
    }
}

impl RunConfig {
    /// Load a run configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let config: RunConfig = toml::from_str(&text)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
        config
            .strategy
            .validate()
            .with_context(|| format!("invalid strategy in '{}'", path.display()))?;
        Ok(config)
    }

    /// Deterministic content-addressable id for this configuration.
    ///
    /// Two identical configs share an id, so results keyed by it are
    /// directly comparable across runs.
    pub fn run_id(&self) -> String {
        let json = serde_json::to_string(self).expect("RunConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_id_is_stable() {
        let config = RunConfig::default();
        assert_eq!(config.run_id(), config.run_id());
    }

    #[test]
    fn run_id_changes_with_params() {
        let base = RunConfig::default();
        let tweaked = RunConfig {
            strategy: StrategyConfig {
                rsi_buy: 45.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_ne!(base.run_id(), tweaked.run_id());
    }

    #[test]
    fn toml_roundtrip() {
        let config = RunConfig {
            strategy: StrategyConfig {
                rsi_buy: 48.0,
                risk_pct: 0.03,
                ..Default::default()
            },
            initial_cash: 25_000.0,
        };
        let text = toml::to_string(&config).unwrap();
        let back: RunConfig = toml::from_str(&text).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: RunConfig = toml::from_str("initial_cash = 5000.0\n").unwrap();
        assert_eq!(config.initial_cash, 5_000.0);
        assert_eq!(config.strategy, StrategyConfig::default());
    }
}
