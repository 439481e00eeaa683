//! Leaderboard — the full result set ranked by realized return.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::result::OptimizationResult;

/// Results of a parameter search, sorted descending by `net_return_pct`.
///
/// The sort is stable: ties keep the original configuration order, so the
/// ranking is byte-identical across repeated runs over the same inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<OptimizationResult>,
}

impl Leaderboard {
    pub fn new(mut results: Vec<OptimizationResult>) -> Self {
        results.sort_by(|a, b| {
            b.net_return_pct
                .partial_cmp(&a.net_return_pct)
                .unwrap_or(Ordering::Equal)
        });
        Self { entries: results }
    }

    pub fn entries(&self) -> &[OptimizationResult] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best-performing configuration, if any were evaluated.
    pub fn best(&self) -> Option<&OptimizationResult> {
        self.entries.first()
    }

    pub fn top_n(&self, n: usize) -> &[OptimizationResult] {
        &self.entries[..n.min(self.entries.len())]
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
