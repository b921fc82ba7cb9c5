// Sweep-mode aggregate: running max severity, problem list, perfdata list

use super::{EvaluationResult, Severity};

/// Rendered when a sweep finds no problems.
pub const ALL_HEALTHY_MESSAGE: &str = "Overall device health OK.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateReport {
    pub severity: Severity,
    /// Messages of non-OK metrics, in catalog order.
    pub problems: Vec<String>,
    /// Non-empty perfdata fragments, in catalog order, regardless of severity.
    pub perfdata: Vec<String>,
}

impl AggregateReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one successful evaluation into the report.
    pub fn record(&mut self, result: EvaluationResult) {
        if !result.perfdata.is_empty() {
            self.perfdata.push(result.perfdata);
        }
        if !result.severity.is_ok() {
            self.severity = self.severity.max(result.severity);
            self.problems.push(result.message);
        }
    }

    /// A metric that could not be collected or decoded counts as CRITICAL.
    pub fn record_failure(&mut self, metric: &str, detail: impl std::fmt::Display) {
        self.severity = self.severity.max(Severity::Critical);
        self.problems.push(format!("{}=ERRO({})", metric, detail));
    }

    pub fn is_healthy(&self) -> bool {
        self.problems.is_empty()
    }

    /// The summary part of the stdout line, without severity or perfdata.
    pub fn summary(&self) -> String {
        if self.is_healthy() {
            ALL_HEALTHY_MESSAGE.to_string()
        } else {
            format!(
                "{} problems found: {}",
                self.problems.len(),
                self.problems.join(", ")
            )
        }
    }

    pub fn render(&self) -> String {
        format!(
            "{}: {} | {}",
            self.severity,
            self.summary(),
            self.perfdata.join(" ")
        )
    }
}
