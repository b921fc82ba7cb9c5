// Decoded values, threshold pairs and per-metric evaluation output

use super::Severity;

/// A reading after kind-specific decoding and scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypedValue {
    Float(f64),
    Integer(i64),
}

/// Optional warning/critical bounds. Breach is `value >= bound`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThresholdSet {
    pub warning: Option<f64>,
    pub critical: Option<f64>,
}

impl ThresholdSet {
    pub const NONE: ThresholdSet = ThresholdSet {
        warning: None,
        critical: None,
    };

    pub fn new(warning: Option<f64>, critical: Option<f64>) -> Self {
        Self { warning, critical }
    }

    pub fn is_empty(&self) -> bool {
        self.warning.is_none() && self.critical.is_none()
    }

    /// Critical is checked before warning.
    pub fn classify(&self, value: f64) -> Severity {
        if self.critical.is_some_and(|c| value >= c) {
            Severity::Critical
        } else if self.warning.is_some_and(|w| value >= w) {
            Severity::Warning
        } else {
            Severity::Ok
        }
    }
}

/// Outcome of evaluating one metric. `perfdata` is empty for state metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    pub severity: Severity,
    pub message: String,
    pub perfdata: String,
}

impl EvaluationResult {
    /// Single-metric stdout line; the pipe is always present.
    pub fn render(&self) -> String {
        format!("{}: {} |{}", self.severity, self.message, self.perfdata)
    }
}

/// Formats a float the way perfdata consumers expect it: whole numbers keep
/// one decimal place (`40.0`), everything else uses the shortest round-trip form.
pub fn format_float(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_float_keeps_one_decimal_for_whole_numbers() {
        assert_eq!(format_float(40.0), "40.0");
        assert_eq!(format_float(-3.0), "-3.0");
        assert_eq!(format_float(21.5), "21.5");
        assert_eq!(format_float(0.25), "0.25");
    }

    #[test]
    fn classify_is_inclusive_and_critical_first() {
        let t = ThresholdSet::new(Some(40.0), Some(50.0));
        assert_eq!(t.classify(39.9), Severity::Ok);
        assert_eq!(t.classify(40.0), Severity::Warning);
        assert_eq!(t.classify(50.0), Severity::Critical);

        // Inverted bounds: critical still wins.
        let t = ThresholdSet::new(Some(60.0), Some(50.0));
        assert_eq!(t.classify(65.0), Severity::Critical);
    }

    #[test]
    fn classify_without_bounds_is_ok() {
        assert_eq!(ThresholdSet::NONE.classify(1e9), Severity::Ok);
        assert!(ThresholdSet::NONE.is_empty());
        assert!(!ThresholdSet::new(None, Some(1.0)).is_empty());
    }
}
