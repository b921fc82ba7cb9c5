// Raw SNMP text -> typed value

use crate::catalog::ValueKind;
use crate::models::TypedValue;

/// Units the device reports in tenths (215 means 21.5).
const TENTHS_UNITS: [&str; 2] = ["°C", "%"];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("value '{raw}' is not {}", expectation(.kind))]
pub struct DecodeError {
    pub raw: String,
    pub kind: ValueKind,
}

impl DecodeError {
    /// "numeric" or "an integer", for user-facing messages.
    pub fn expectation(&self) -> &'static str {
        expectation(&self.kind)
    }
}

fn expectation(kind: &ValueKind) -> &'static str {
    match kind {
        ValueKind::ScaledFloat => "numeric",
        ValueKind::IntegerState => "an integer",
    }
}

pub fn decode(raw: &str, kind: ValueKind, unit: &str) -> Result<TypedValue, DecodeError> {
    let text = raw.trim();
    let err = || DecodeError {
        raw: raw.to_string(),
        kind,
    };
    match kind {
        ValueKind::ScaledFloat => {
            let value: f64 = text.parse().map_err(|_| err())?;
            if TENTHS_UNITS.contains(&unit) {
                Ok(TypedValue::Float(round_tenth(value / 10.0)))
            } else {
                Ok(TypedValue::Float(value))
            }
        }
        ValueKind::IntegerState => text.parse().map(TypedValue::Integer).map_err(|_| err()),
    }
}

fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_tenths_for_temperature_and_humidity() {
        assert_eq!(
            decode("215", ValueKind::ScaledFloat, "°C"),
            Ok(TypedValue::Float(21.5))
        );
        assert_eq!(
            decode("655", ValueKind::ScaledFloat, "%"),
            Ok(TypedValue::Float(65.5))
        );
        assert_eq!(
            decode("-32", ValueKind::ScaledFloat, "°C"),
            Ok(TypedValue::Float(-3.2))
        );
    }

    #[test]
    fn fractional_raw_values_round_to_one_decimal() {
        assert_eq!(
            decode("215.6", ValueKind::ScaledFloat, "°C"),
            Ok(TypedValue::Float(21.6))
        );
        assert_eq!(
            decode("215.4", ValueKind::ScaledFloat, "°C"),
            Ok(TypedValue::Float(21.5))
        );
    }

    #[test]
    fn other_units_are_not_scaled() {
        assert_eq!(
            decode("215", ValueKind::ScaledFloat, "V"),
            Ok(TypedValue::Float(215.0))
        );
        assert_eq!(
            decode("12.75", ValueKind::ScaledFloat, ""),
            Ok(TypedValue::Float(12.75))
        );
    }

    #[test]
    fn integer_state_is_not_scaled() {
        assert_eq!(
            decode("1", ValueKind::IntegerState, ""),
            Ok(TypedValue::Integer(1))
        );
        assert_eq!(
            decode(" 0\n", ValueKind::IntegerState, ""),
            Ok(TypedValue::Integer(0))
        );
    }

    #[test]
    fn empty_or_garbage_is_an_error_not_zero() {
        for raw in ["", "   ", "abc", "No Such Object available on this agent at this OID"] {
            assert!(decode(raw, ValueKind::ScaledFloat, "°C").is_err(), "{raw:?}");
            assert!(decode(raw, ValueKind::IntegerState, "").is_err(), "{raw:?}");
        }
        // A float is not an integer state.
        let err = decode("1.0", ValueKind::IntegerState, "").unwrap_err();
        assert_eq!(err.to_string(), "value '1.0' is not an integer");
    }
}
