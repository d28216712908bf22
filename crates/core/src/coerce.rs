//! Value coercion
//!
//! Converts one loosely-typed [`InputValue`] plus an optional [`TypeHint`]
//! into exactly one wire-representable [`WritePayload`], or fails with a
//! [`CoercionError`] naming the rejected input's kind. Coercion is pure:
//! nothing touches the store until dispatch.
//!
//! ## Rules
//!
//! | Hint | Accepted input | Payload |
//! |------|----------------|---------|
//! | `Auto` | `Bool` / `Number` / `Text` | matching primitive |
//! | `Auto` | `Absent` | error (no implicit null in auto mode) |
//! | `Float` | `Number` | `Float` |
//! | `Int` | `Number` | `Int`, truncated toward zero |
//! | `Timestamp` | `Number` | `Timestamp`, serial biased onto UTC |
//! | `Text` | `Text` | `Text` as UTF-8 bytes |
//! | `Bool` | `Bool` | `Bool` |
//! | `Null` | anything | `Null` (input ignored) |
//!
//! `Int` truncation is deliberate policy: hosts round-trip integers through a
//! float transport, so `3.9` becomes `3` and `-3.9` becomes `-3` rather than
//! rejecting fractional inputs. Non-finite numbers saturate per Rust's
//! float-to-int cast.
//!
//! A failed coercion is never swallowed: the pipeline demotes it to an
//! error write at the same path, so the store still records the attempt.

use crate::serial::SerialCalendar;
use crate::types::TypeHint;
use crate::value::InputValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One typed, wire-representable write request
///
/// Exactly one store primitive exists per variant. Text crosses the boundary
/// as UTF-8 bytes, never as a host-native string object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WritePayload {
    /// Boolean write
    Bool(bool),
    /// 64-bit float write
    Float(f64),
    /// 64-bit integer write
    Int(i64),
    /// UTC timestamp write
    Timestamp(DateTime<Utc>),
    /// UTF-8 text write, transmitted as bytes
    Text(Vec<u8>),
    /// Explicit null write
    Null,
    /// Diagnostic error write recording a failed coercion
    Error(String),
}

/// A type mismatch or unrepresentable value found during coercion
///
/// Local and recoverable: the write pipeline converts this into a
/// [`WritePayload::Error`] rather than aborting the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoercionError {
    /// The input's representation does not match what the hint requires
    #[error("cannot coerce {actual} input under {hint:?} hint")]
    TypeMismatch {
        /// The hint in effect
        hint: TypeHint,
        /// The actual input's type name
        actual: &'static str,
    },
    /// The biased serial names no representable instant
    #[error("timestamp serial {serial} is out of range")]
    TimestampOutOfRange {
        /// The host serial as supplied, before biasing
        serial: f64,
    },
}

impl CoercionError {
    /// The diagnostic text published to the store as an error write
    ///
    /// For a type mismatch this is the rejected input's type name, so the
    /// store's record at the path names what the host actually sent.
    pub fn diagnostic(&self) -> String {
        match self {
            CoercionError::TypeMismatch { actual, .. } => (*actual).to_string(),
            CoercionError::TimestampOutOfRange { .. } => self.to_string(),
        }
    }
}

/// Coerce one input under one hint into one payload
///
/// Pure and side-effect-free; the calendar supplies the fixed serial-to-UTC
/// bias computed at initialization.
pub fn coerce(
    input: InputValue,
    hint: TypeHint,
    calendar: &SerialCalendar,
) -> Result<WritePayload, CoercionError> {
    match hint {
        TypeHint::Auto => match input {
            InputValue::Bool(b) => Ok(WritePayload::Bool(b)),
            InputValue::Number(f) => Ok(WritePayload::Float(f)),
            InputValue::Text(s) => Ok(WritePayload::Text(s.into_bytes())),
            InputValue::Absent => Err(CoercionError::TypeMismatch {
                hint,
                actual: InputValue::Absent.type_name(),
            }),
        },
        TypeHint::Float => match input {
            InputValue::Number(f) => Ok(WritePayload::Float(f)),
            other => Err(mismatch(hint, &other)),
        },
        TypeHint::Int => match input {
            InputValue::Number(f) => Ok(WritePayload::Int(f.trunc() as i64)),
            other => Err(mismatch(hint, &other)),
        },
        TypeHint::Timestamp => match input {
            InputValue::Number(serial) => calendar
                .to_utc(serial)
                .map(WritePayload::Timestamp)
                .ok_or(CoercionError::TimestampOutOfRange { serial }),
            other => Err(mismatch(hint, &other)),
        },
        TypeHint::Text => match input {
            InputValue::Text(s) => Ok(WritePayload::Text(s.into_bytes())),
            other => Err(mismatch(hint, &other)),
        },
        TypeHint::Bool => match input {
            InputValue::Bool(b) => Ok(WritePayload::Bool(b)),
            other => Err(mismatch(hint, &other)),
        },
        // Null ignores the input entirely
        TypeHint::Null => Ok(WritePayload::Null),
    }
}

fn mismatch(hint: TypeHint, input: &InputValue) -> CoercionError {
    CoercionError::TypeMismatch { hint, actual: input.type_name() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serial::serial_to_datetime;
    use proptest::prelude::*;

    fn utc() -> SerialCalendar {
        SerialCalendar::utc()
    }

    // ====================================================================
    // Auto mode
    // ====================================================================

    #[test]
    fn test_auto_matches_input_variant() {
        assert_eq!(
            coerce(InputValue::Bool(true), TypeHint::Auto, &utc()),
            Ok(WritePayload::Bool(true))
        );
        assert_eq!(
            coerce(InputValue::Number(2.5), TypeHint::Auto, &utc()),
            Ok(WritePayload::Float(2.5))
        );
        assert_eq!(
            coerce(InputValue::from("hi"), TypeHint::Auto, &utc()),
            Ok(WritePayload::Text(b"hi".to_vec()))
        );
    }

    #[test]
    fn test_auto_absent_is_error_not_null() {
        let err = coerce(InputValue::Absent, TypeHint::Auto, &utc()).unwrap_err();
        assert_eq!(
            err,
            CoercionError::TypeMismatch { hint: TypeHint::Auto, actual: "Absent" }
        );
        assert_eq!(err.diagnostic(), "Absent");
    }

    // ====================================================================
    // Explicit hints
    // ====================================================================

    #[test]
    fn test_explicit_hints_accept_matching_input() {
        assert_eq!(
            coerce(InputValue::Number(1.5), TypeHint::Float, &utc()),
            Ok(WritePayload::Float(1.5))
        );
        assert_eq!(
            coerce(InputValue::Bool(false), TypeHint::Bool, &utc()),
            Ok(WritePayload::Bool(false))
        );
        assert_eq!(
            coerce(InputValue::from("text"), TypeHint::Text, &utc()),
            Ok(WritePayload::Text(b"text".to_vec()))
        );
    }

    #[test]
    fn test_mismatch_names_actual_input_kind() {
        let err = coerce(InputValue::from("3"), TypeHint::Int, &utc()).unwrap_err();
        assert_eq!(
            err,
            CoercionError::TypeMismatch { hint: TypeHint::Int, actual: "Text" }
        );
        assert_eq!(err.diagnostic(), "Text");

        let err = coerce(InputValue::Bool(true), TypeHint::Timestamp, &utc()).unwrap_err();
        assert_eq!(
            err,
            CoercionError::TypeMismatch { hint: TypeHint::Timestamp, actual: "Bool" }
        );

        let err = coerce(InputValue::Number(1.0), TypeHint::Text, &utc()).unwrap_err();
        assert_eq!(err.diagnostic(), "Number");
    }

    #[test]
    fn test_int_truncates_toward_zero() {
        assert_eq!(
            coerce(InputValue::Number(3.9), TypeHint::Int, &utc()),
            Ok(WritePayload::Int(3))
        );
        assert_eq!(
            coerce(InputValue::Number(-3.9), TypeHint::Int, &utc()),
            Ok(WritePayload::Int(-3))
        );
        assert_eq!(
            coerce(InputValue::Number(0.0), TypeHint::Int, &utc()),
            Ok(WritePayload::Int(0))
        );
    }

    #[test]
    fn test_timestamp_zero_bias_is_unbiased_serial() {
        let got = coerce(InputValue::Number(45134.5), TypeHint::Timestamp, &utc()).unwrap();
        assert_eq!(got, WritePayload::Timestamp(serial_to_datetime(45134.5).unwrap()));
    }

    #[test]
    fn test_timestamp_bias_applied_before_conversion() {
        // Host five hours behind UTC: bias of 5/24 shifts the serial forward
        let cal = SerialCalendar::with_offset_days(5.0 / 24.0);
        let got = coerce(InputValue::Number(45134.5), TypeHint::Timestamp, &cal).unwrap();
        assert_eq!(
            got,
            WritePayload::Timestamp(serial_to_datetime(45134.5 + 5.0 / 24.0).unwrap())
        );
    }

    #[test]
    fn test_timestamp_out_of_range() {
        let err = coerce(InputValue::Number(-2.0), TypeHint::Timestamp, &utc()).unwrap_err();
        assert_eq!(err, CoercionError::TimestampOutOfRange { serial: -2.0 });
        assert!(err.diagnostic().contains("out of range"));
    }

    #[test]
    fn test_null_ignores_input() {
        for input in [
            InputValue::Bool(true),
            InputValue::Number(1.0),
            InputValue::from("x"),
            InputValue::Absent,
        ] {
            assert_eq!(coerce(input, TypeHint::Null, &utc()), Ok(WritePayload::Null));
        }
    }

    #[test]
    fn test_text_crosses_as_utf8_bytes() {
        let got = coerce(InputValue::from("héllo"), TypeHint::Auto, &utc()).unwrap();
        assert_eq!(got, WritePayload::Text("héllo".as_bytes().to_vec()));
    }

    // ====================================================================
    // Properties
    // ====================================================================

    proptest! {
        #[test]
        fn prop_auto_scalars_never_fail(f in proptest::num::f64::ANY) {
            prop_assert!(coerce(InputValue::Number(f), TypeHint::Auto, &utc()).is_ok());
        }

        #[test]
        fn prop_int_hint_equals_trunc(f in -1.0e15f64..1.0e15) {
            let got = coerce(InputValue::Number(f), TypeHint::Int, &utc()).unwrap();
            prop_assert_eq!(got, WritePayload::Int(f.trunc() as i64));
        }

        #[test]
        fn prop_int_hint_rejects_text(s in ".*") {
            let err = coerce(InputValue::Text(s), TypeHint::Int, &utc()).unwrap_err();
            prop_assert_eq!(err.diagnostic(), "Text");
        }
    }
}
