// Error kinds surfaced by a check. Single-metric mode treats all of them as fatal;
// sweep mode folds Collection/Decode into a per-metric CRITICAL entry.

use crate::decoder::DecodeError;
use crate::models::Severity;
use crate::snmp_repo::CollectionError;

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error("Value '{}' for {metric} is not {}.", .source.raw, .source.expectation())]
    Decode {
        metric: String,
        #[source]
        source: DecodeError,
    },

    #[error("Unknown metric '{0}'.")]
    UnknownMetric(String),

    #[error("Unexpected plugin error: {0}")]
    Unexpected(String),
}

impl CheckError {
    pub fn decode(metric: &str, source: DecodeError) -> Self {
        Self::Decode {
            metric: metric.to_string(),
            source,
        }
    }

    pub fn unexpected(err: impl std::fmt::Display) -> Self {
        Self::Unexpected(err.to_string())
    }

    /// Status reported when this error ends a single-metric check.
    pub fn severity(&self) -> Severity {
        match self {
            CheckError::Collection(_) | CheckError::Decode { .. } | CheckError::UnknownMetric(_) => {
                Severity::Critical
            }
            CheckError::Unexpected(_) => Severity::Unknown,
        }
    }

    /// Stdout line for a failed single-metric check (no perfdata section).
    pub fn render(&self) -> String {
        format!("{}: {}", self.severity(), self)
    }
}
