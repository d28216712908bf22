//! Input values from the host transport
//!
//! This module defines:
//! - InputValue: tagged union over the scalar kinds the host can hand us
//!
//! The host transport carries exactly four shapes: a boolean, an IEEE-754
//! double, a UTF-8 string, or nothing at all. Integers and timestamps do not
//! exist on the transport; they arrive as doubles and are only distinguished
//! by an explicit [`TypeHint`](crate::TypeHint). The variant is decided once
//! at the boundary and pattern-matched exhaustively from then on; no runtime
//! type-name checks inside the coercion logic.

use serde::{Deserialize, Serialize};

/// A loosely-typed scalar as delivered by the host
///
/// ## Type Equality
///
/// Float comparison follows IEEE-754 semantics: `NaN != NaN`, `-0.0 == 0.0`.
/// Different variants are never equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InputValue {
    /// Boolean value
    Bool(bool),
    /// 64-bit floating point (the transport's only numeric kind)
    Number(f64),
    /// UTF-8 text
    Text(String),
    /// No value supplied (empty cell, missing argument)
    Absent,
}

impl PartialEq for InputValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (InputValue::Bool(a), InputValue::Bool(b)) => a == b,
            // IEEE-754: NaN != NaN, -0.0 == 0.0
            (InputValue::Number(a), InputValue::Number(b)) => a == b,
            (InputValue::Text(a), InputValue::Text(b)) => a == b,
            (InputValue::Absent, InputValue::Absent) => true,
            _ => false,
        }
    }
}

impl InputValue {
    /// The variant name, used as the diagnostic payload of failed coercions
    pub fn type_name(&self) -> &'static str {
        match self {
            InputValue::Bool(_) => "Bool",
            InputValue::Number(_) => "Number",
            InputValue::Text(_) => "Text",
            InputValue::Absent => "Absent",
        }
    }
}

impl From<bool> for InputValue {
    fn from(b: bool) -> Self {
        InputValue::Bool(b)
    }
}

impl From<f64> for InputValue {
    fn from(f: f64) -> Self {
        InputValue::Number(f)
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        InputValue::Text(s.to_string())
    }
}

impl From<String> for InputValue {
    fn from(s: String) -> Self {
        InputValue::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name() {
        assert_eq!(InputValue::Bool(true).type_name(), "Bool");
        assert_eq!(InputValue::Number(1.0).type_name(), "Number");
        assert_eq!(InputValue::Text(String::new()).type_name(), "Text");
        assert_eq!(InputValue::Absent.type_name(), "Absent");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(InputValue::from(true), InputValue::Bool(true));
        assert_eq!(InputValue::from(2.5), InputValue::Number(2.5));
        assert_eq!(InputValue::from("hi"), InputValue::Text("hi".to_string()));
        assert_eq!(
            InputValue::from(String::from("hi")),
            InputValue::Text("hi".to_string())
        );
    }

    #[test]
    fn test_nan_not_equal_nan() {
        assert_ne!(
            InputValue::Number(f64::NAN),
            InputValue::Number(f64::NAN)
        );
    }

    #[test]
    fn test_negative_zero_equals_zero() {
        assert_eq!(InputValue::Number(-0.0), InputValue::Number(0.0));
    }

    #[test]
    fn test_cross_variant_inequality() {
        assert_ne!(InputValue::Bool(false), InputValue::Number(0.0));
        assert_ne!(InputValue::Absent, InputValue::Text(String::new()));
    }

    #[test]
    fn test_serde_round_trip() {
        for v in [
            InputValue::Bool(true),
            InputValue::Number(3.25),
            InputValue::Text("x".to_string()),
            InputValue::Absent,
        ] {
            let json = serde_json::to_string(&v).unwrap();
            let back: InputValue = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }
}
