// Single-metric mode: any failure is fatal and becomes the only result.

use crate::catalog;
use crate::error::CheckError;
use crate::evaluator::Evaluator;
use crate::models::{EvaluationResult, Severity, ThresholdSet};
use crate::snmp_repo::Collector;

pub async fn run_single<C: Collector>(
    collector: &C,
    evaluator: &Evaluator,
    name: &str,
    thresholds: ThresholdSet,
    invert: bool,
) -> Result<EvaluationResult, CheckError> {
    let def = catalog::lookup(name).ok_or_else(|| CheckError::UnknownMetric(name.to_string()))?;
    let raw = collector.fetch(def.oid).await?;
    tracing::debug!(metric = def.name, raw = %raw, "reading collected");
    evaluator.evaluate_raw(def, &raw, thresholds, invert)
}

/// Stdout line and exit status for a single-metric outcome.
pub fn render(outcome: &Result<EvaluationResult, CheckError>) -> (Severity, String) {
    match outcome {
        Ok(result) => (result.severity, result.render()),
        Err(e) => (e.severity(), e.render()),
    }
}
