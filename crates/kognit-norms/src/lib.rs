//! kognit-norms
//!
//! Normative tables, metric registry, domain map, and the normalization and
//! aggregation pipeline. Pure data and pure functions; no runner state.

pub mod aggregate;
pub mod batteries;
pub mod error;
pub mod scoring;

use std::collections::BTreeMap;

use kognit_core::models::metric::MetricKey;
use kognit_core::models::result::{MetricResult, ScoreSummary};
use error::NormsError;
use scoring::{DomainDefinition, MetricDefinition, NormBand, ScoreEntry, ValidationError};

/// Trait implemented by each subtest battery.
pub trait Battery: Send + Sync {
    /// Unique identifier (e.g., "standard").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Every metric this battery produces.
    fn metrics(&self) -> &[MetricDefinition];

    /// Grouping of metrics into domains.
    fn domains(&self) -> &[DomainDefinition];

    /// Age bands. Contiguous and non-overlapping.
    fn bands(&self) -> &[NormBand];

    /// Band used when no band contains the age.
    fn default_band(&self) -> &NormBand;

    /// The band whose range contains `age`, or [`Battery::default_band`].
    ///
    /// Out-of-range ages degrade to the default band instead of failing; the
    /// band actually used is reported in every export.
    fn pick_band(&self, age: u32) -> &NormBand {
        self.bands()
            .iter()
            .find(|b| b.range.contains(age))
            .unwrap_or_else(|| self.default_band())
    }

    fn metric(&self, key: MetricKey) -> Option<&MetricDefinition> {
        self.metrics().iter().find(|m| m.key == key)
    }

    /// Normalize every registered metric for a subject of `age`.
    ///
    /// Metrics with no raw score are present in the result with absent z and
    /// percentile.
    fn evaluate(
        &self,
        age: u32,
        scores: &BTreeMap<MetricKey, f64>,
    ) -> BTreeMap<MetricKey, MetricResult> {
        let band = self.pick_band(age);
        self.metrics()
            .iter()
            .filter_map(|m| {
                let params = band.params(m.key)?;
                let raw = scores.get(&m.key).copied();
                Some((m.key, scoring::normalize(raw, params, m.direction)))
            })
            .collect()
    }

    /// Domain and overall composites over already-normalized results.
    fn summarize(&self, computed: &BTreeMap<MetricKey, MetricResult>) -> ScoreSummary {
        aggregate::summarize(self.domains(), computed)
    }

    /// Validate a set of score entries against this battery's metrics.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for entry in scores {
            let known = entry
                .metric_key
                .parse::<MetricKey>()
                .ok()
                .and_then(|k| self.metric(k));
            let message = match known {
                None => format!("{}: unknown metric '{}'", self.name(), entry.metric_key),
                Some(m) if !entry.value.is_finite() => format!(
                    "{}: {} score {} is not a finite number",
                    self.name(),
                    m.label,
                    entry.value,
                ),
                Some(_) => continue,
            };
            errors.push(ValidationError {
                metric_key: entry.metric_key.clone(),
                value: entry.value,
                message,
            });
        }
        errors
    }

    /// Convert validated entries into a raw score map. Later entries for the
    /// same metric overwrite earlier ones.
    fn collect_scores(&self, scores: &[ScoreEntry]) -> Result<BTreeMap<MetricKey, f64>, NormsError> {
        if let Some(first) = self.validate_scores(scores).into_iter().next() {
            return Err(first.into());
        }
        Ok(scores
            .iter()
            .filter_map(|e| Some((e.metric_key.parse::<MetricKey>().ok()?, e.value)))
            .collect())
    }

    /// Format results as plain structured text, one domain per section.
    fn to_structured_text(
        &self,
        computed: &BTreeMap<MetricKey, MetricResult>,
        summary: &ScoreSummary,
    ) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for domain in self.domains() {
            output.push_str(&format!("### {}", domain.name));
            if let Some(s) = summary.domain(domain.id) {
                output.push_str(&format!(" ({})", s.classification.as_str()));
            }
            output.push('\n');
            for key in &domain.metrics {
                let label = self.metric(*key).map_or(key.as_str(), |m| m.label.as_str());
                match computed.get(key).and_then(|r| r.z.zip(r.percentile)) {
                    Some((z, pct)) => {
                        output.push_str(&format!("- {label}: z {z:.2}, {pct:.1}%\n"));
                    }
                    None => output.push_str(&format!("- {label}: -\n")),
                }
            }
            output.push('\n');
        }
        output.push_str(&format!(
            "Overall: {}\n",
            summary.overall.classification.as_str()
        ));
        output
    }
}

/// Return all registered batteries.
pub fn all_batteries() -> Vec<Box<dyn Battery>> {
    vec![Box::new(batteries::standard::StandardBattery)]
}

/// Look up a battery by ID.
pub fn get_battery(id: &str) -> Option<Box<dyn Battery>> {
    all_batteries().into_iter().find(|b| b.id() == id)
}

pub fn require_battery(id: &str) -> Result<Box<dyn Battery>, NormsError> {
    get_battery(id).ok_or_else(|| NormsError::UnknownBattery(id.to_string()))
}
