// Check result models: severity, decoded values, per-metric and aggregate reports

mod evaluation;
mod report;
mod severity;

pub use evaluation::{EvaluationResult, ThresholdSet, TypedValue, format_float};
pub use report::{ALL_HEALTHY_MESSAGE, AggregateReport};
pub use severity::Severity;
