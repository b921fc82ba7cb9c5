// "Check all" mode: one GET per catalog entry, strictly sequential, never batched.
// A failing sensor is recorded as CRITICAL and the sweep moves on.

use std::time::Instant;

use crate::catalog::{self, MetricDefinition};
use crate::evaluator::Evaluator;
use crate::models::{AggregateReport, ThresholdSet};
use crate::snmp_repo::Collector;

/// Sweep the whole catalog with default thresholds and no inversion.
pub async fn run_all<C: Collector>(collector: &C, evaluator: &Evaluator) -> AggregateReport {
    run_over(catalog::all(), collector, evaluator).await
}

/// Sweep an explicit list of definitions, in the order given.
pub async fn run_over<C: Collector>(
    definitions: &[MetricDefinition],
    collector: &C,
    evaluator: &Evaluator,
) -> AggregateReport {
    let started = Instant::now();
    let mut report = AggregateReport::new();

    for def in definitions {
        let raw = match collector.fetch(def.oid).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(metric = def.name, error = %e, "collection failed");
                report.record_failure(def.name, &e);
                continue;
            }
        };
        match evaluator.evaluate_raw(def, &raw, ThresholdSet::NONE, false) {
            Ok(result) => report.record(result),
            Err(e) => {
                tracing::warn!(metric = def.name, error = %e, "evaluation failed");
                report.record_failure(def.name, &e);
            }
        }
    }

    tracing::debug!(
        operation = "sweep",
        metrics = definitions.len(),
        problems = report.problems.len(),
        severity = %report.severity,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Sweep finished"
    );
    report
}
