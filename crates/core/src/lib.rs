//! Core types for cellwire
//!
//! This crate defines the foundational types of the marshalling layer:
//! - StorePath: opaque path key into the store's hierarchical namespace
//! - InputValue: tagged union over the host transport's scalar kinds
//! - TypeHint: caller-supplied coercion override
//! - RequestKind: Immediate vs Retrying delivery
//! - WritePayload: the coerced, wire-representable write request
//! - WriteStatus / Outcome: the store's status-code contract
//! - SerialCalendar: fractional-day serial timestamps and the UTC offset bias
//!
//! Everything here is pure and call-scoped; dispatch against a live store
//! happens in `cellwire-client`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod coerce;
pub mod path;
pub mod serial;
pub mod status;
pub mod types;
pub mod value;

pub use coerce::{coerce, CoercionError, WritePayload};
pub use path::StorePath;
pub use serial::{serial_to_datetime, SerialCalendar};
pub use status::{Outcome, WriteStatus};
pub use types::{HintParseError, RequestKind, TypeHint};
pub use value::InputValue;
