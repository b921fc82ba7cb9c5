// Threshold / state evaluation for one metric reading

use crate::catalog::{self, MetricDefinition, ValueKind};
use crate::config::DefaultThresholds;
use crate::decoder;
use crate::error::CheckError;
use crate::models::{EvaluationResult, Severity, ThresholdSet, TypedValue, format_float};

/// Evaluates readings against explicit thresholds, per-family defaults, or the
/// 0/1 state rule.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    defaults: DefaultThresholds,
}

impl Evaluator {
    pub fn new(defaults: DefaultThresholds) -> Self {
        Self { defaults }
    }

    /// Look up `name`, decode `raw` and evaluate it.
    pub fn evaluate(
        &self,
        name: &str,
        raw: &str,
        thresholds: ThresholdSet,
        invert: bool,
    ) -> Result<EvaluationResult, CheckError> {
        let def = catalog::lookup(name).ok_or_else(|| CheckError::UnknownMetric(name.to_string()))?;
        self.evaluate_raw(def, raw, thresholds, invert)
    }

    pub fn evaluate_raw(
        &self,
        def: &MetricDefinition,
        raw: &str,
        thresholds: ThresholdSet,
        invert: bool,
    ) -> Result<EvaluationResult, CheckError> {
        let value = decoder::decode(raw, def.kind, def.unit)
            .map_err(|e| CheckError::decode(def.name, e))?;
        Ok(self.evaluate_value(def, value, thresholds, invert))
    }

    /// `thresholds` only apply to ScaledFloat metrics and `invert` only to
    /// IntegerState ones; each is accepted and ignored for the other kind.
    pub fn evaluate_value(
        &self,
        def: &MetricDefinition,
        value: TypedValue,
        thresholds: ThresholdSet,
        invert: bool,
    ) -> EvaluationResult {
        match (def.kind, value) {
            (ValueKind::ScaledFloat, TypedValue::Float(v)) => {
                let thresholds = if thresholds.is_empty() {
                    self.default_thresholds(def.name)
                } else {
                    thresholds
                };
                evaluate_float(def, v, thresholds)
            }
            (ValueKind::IntegerState, TypedValue::Integer(v)) => evaluate_state(def, v, invert),
            _ => EvaluationResult {
                severity: Severity::Unknown,
                message: format!("Unknown metric type for {}", def.name),
                perfdata: String::new(),
            },
        }
    }

    /// Family defaults by name: "Temp" is checked before "Umid"; anything else
    /// gets no bounds.
    pub fn default_thresholds(&self, name: &str) -> ThresholdSet {
        if name.contains("Temp") {
            self.defaults.temperature.into()
        } else if name.contains("Umid") {
            self.defaults.humidity.into()
        } else {
            ThresholdSet::NONE
        }
    }
}

fn evaluate_float(def: &MetricDefinition, value: f64, thresholds: ThresholdSet) -> EvaluationResult {
    let shown = format_float(value);
    let bound = |b: Option<f64>| b.map(format_float).unwrap_or_default();
    EvaluationResult {
        severity: thresholds.classify(value),
        message: format!("{}={}{}", def.name, shown, def.unit),
        perfdata: format!(
            "'{}'={}{};{};{};;",
            def.name,
            shown,
            def.unit,
            bound(thresholds.warning),
            bound(thresholds.critical)
        ),
    }
}

fn evaluate_state(def: &MetricDefinition, value: i64, invert: bool) -> EvaluationResult {
    let normal = if invert { 1 } else { 0 };
    let (severity, state) = if value == normal {
        (Severity::Ok, "normal")
    } else {
        (Severity::Critical, "alarm")
    };
    EvaluationResult {
        severity,
        message: format!(
            "{} in {} state ({} = {})",
            def.name, state, def.description, value
        ),
        perfdata: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(name: &str) -> &'static MetricDefinition {
        catalog::lookup(name).unwrap()
    }

    #[test]
    fn mismatched_value_kind_is_unknown_not_a_panic() {
        let r = Evaluator::default().evaluate_value(
            def("TempAC1"),
            TypedValue::Integer(1),
            ThresholdSet::NONE,
            false,
        );
        assert_eq!(r.severity, Severity::Unknown);
        assert_eq!(r.message, "Unknown metric type for TempAC1");
        assert!(r.perfdata.is_empty());
    }

    #[test]
    fn names_outside_both_families_get_no_defaults() {
        let e = Evaluator::default();
        assert_eq!(e.default_thresholds("StatusAC1"), ThresholdSet::NONE);
        // Case-sensitive.
        assert_eq!(e.default_thresholds("tempFoo"), ThresholdSet::NONE);
        assert_eq!(
            e.default_thresholds("TempUmid"),
            ThresholdSet::new(Some(40.0), Some(50.0))
        );
    }

    #[test]
    fn float_without_family_emits_perfdata_with_empty_bounds() {
        let custom = MetricDefinition {
            name: "Voltage1",
            oid: ".1",
            kind: ValueKind::ScaledFloat,
            unit: "V",
            description: "Supply voltage",
        };
        let r = Evaluator::default().evaluate_value(
            &custom,
            TypedValue::Float(1000.0),
            ThresholdSet::NONE,
            false,
        );
        assert_eq!(r.severity, Severity::Ok);
        assert_eq!(r.perfdata, "'Voltage1'=1000.0V;;;;");
    }
}
