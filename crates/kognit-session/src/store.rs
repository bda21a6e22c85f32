use std::collections::BTreeMap;

use kognit_core::models::metric::MetricKey;
use tracing::{info, warn};

/// Raw scores keyed by metric. The only mutable score state in a session.
///
/// Re-recording a metric replaces the earlier value. Non-finite values are
/// refused so a missing score can never be confused with a number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreStore {
    scores: BTreeMap<MetricKey, f64>,
}

impl ScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the value was refused.
    pub fn record(&mut self, key: MetricKey, raw: f64) -> bool {
        if !raw.is_finite() {
            warn!(metric = %key, raw, "refusing non-finite score");
            return false;
        }
        let previous = self.scores.insert(key, raw);
        info!(metric = %key, raw, replaced = previous.is_some(), "score recorded");
        true
    }

    pub fn get(&self, key: MetricKey) -> Option<f64> {
        self.scores.get(&key).copied()
    }

    pub fn scores(&self) -> &BTreeMap<MetricKey, f64> {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
