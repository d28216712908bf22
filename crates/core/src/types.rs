//! Hint and delivery-kind enumerations
//!
//! This module defines:
//! - TypeHint: caller-supplied override of automatic coercion
//! - RequestKind: single-attempt vs store-managed-retry delivery
//!
//! ## Hint spellings
//!
//! Hosts pass the hint as a plain string argument, so `TypeHint` implements
//! `FromStr` over the spellings hosts actually use (case-insensitive):
//!
//! | Spelling | Hint |
//! |----------|------|
//! | `""`, `auto` | `Auto` |
//! | `double`, `float` | `Float` |
//! | `int` | `Int` |
//! | `timestamp` | `Timestamp` |
//! | `string`, `text` | `Text` |
//! | `bool` | `Bool` |
//! | `null` | `Null` |

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Caller-supplied coercion override
///
/// `Auto` derives the write kind from the input variant alone. The explicit
/// hints require the matching input representation; `Int` and `Timestamp`
/// both require a `Number` input, because the host transport has no native
/// integer or date kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TypeHint {
    /// Derive the write kind from the input variant
    #[default]
    Auto,
    /// Write a 64-bit float; requires a `Number` input
    Float,
    /// Write a 64-bit integer, truncating toward zero; requires a `Number` input
    Int,
    /// Write a UTC timestamp decoded from a serial date; requires a `Number` input
    Timestamp,
    /// Write UTF-8 text; requires a `Text` input
    Text,
    /// Write a boolean; requires a `Bool` input
    Bool,
    /// Write an explicit null, ignoring the input entirely
    Null,
}

/// Error parsing a host-supplied hint string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type hint: {0:?}")]
pub struct HintParseError(pub String);

impl FromStr for TypeHint {
    type Err = HintParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(TypeHint::Auto),
            "double" | "float" => Ok(TypeHint::Float),
            "int" => Ok(TypeHint::Int),
            "timestamp" => Ok(TypeHint::Timestamp),
            "string" | "text" => Ok(TypeHint::Text),
            "bool" => Ok(TypeHint::Bool),
            "null" => Ok(TypeHint::Null),
            other => Err(HintParseError(other.to_string())),
        }
    }
}

/// Delivery semantics requested for a single write
///
/// The store client owns all retry machinery; this flag merely selects its
/// policy. `Retrying` may block under backpressure from the client's queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RequestKind {
    /// One delivery attempt; transient failure surfaces as a status code
    #[default]
    Immediate,
    /// The store client keeps attempting delivery past transient failure
    Retrying,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_spellings() {
        assert_eq!("".parse::<TypeHint>().unwrap(), TypeHint::Auto);
        assert_eq!("auto".parse::<TypeHint>().unwrap(), TypeHint::Auto);
        assert_eq!("double".parse::<TypeHint>().unwrap(), TypeHint::Float);
        assert_eq!("float".parse::<TypeHint>().unwrap(), TypeHint::Float);
        assert_eq!("int".parse::<TypeHint>().unwrap(), TypeHint::Int);
        assert_eq!("timestamp".parse::<TypeHint>().unwrap(), TypeHint::Timestamp);
        assert_eq!("string".parse::<TypeHint>().unwrap(), TypeHint::Text);
        assert_eq!("text".parse::<TypeHint>().unwrap(), TypeHint::Text);
        assert_eq!("bool".parse::<TypeHint>().unwrap(), TypeHint::Bool);
        assert_eq!("null".parse::<TypeHint>().unwrap(), TypeHint::Null);
    }

    #[test]
    fn test_hint_case_insensitive() {
        assert_eq!("Double".parse::<TypeHint>().unwrap(), TypeHint::Float);
        assert_eq!("TIMESTAMP".parse::<TypeHint>().unwrap(), TypeHint::Timestamp);
    }

    #[test]
    fn test_hint_unknown_rejected() {
        let err = "datetime".parse::<TypeHint>().unwrap_err();
        assert_eq!(err, HintParseError("datetime".to_string()));
        assert!(err.to_string().contains("datetime"));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(TypeHint::default(), TypeHint::Auto);
        assert_eq!(RequestKind::default(), RequestKind::Immediate);
    }
}
