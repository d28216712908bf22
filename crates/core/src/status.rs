//! The store's status-code contract
//!
//! This module defines:
//! - WriteStatus: the raw signed code returned by every store primitive
//! - Outcome: the closed caller-visible interpretation of a status
//!
//! ## Contract
//!
//! Two sentinel codes are reserved; every other code is store-defined and
//! passes through verbatim for the caller to render with the store's own
//! error vocabulary:
//!
//! | Code | Meaning | Outcome |
//! |------|---------|---------|
//! | `-1` | write applied synchronously | `Applied` |
//! | `-2` | write queued, confirmation pending | `Uncertain` |
//! | anything else | store-defined error | `Passthrough(code)` |
//!
//! Which store conditions produce `-1` versus `-2` is defined entirely by the
//! store client (typically `-2` means a `Retrying` request was queued behind
//! backpressure); integrators must document their client's choice.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw status code returned by a store write or refresh primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WriteStatus(pub i16);

impl WriteStatus {
    /// The write was applied synchronously
    pub const APPLIED: WriteStatus = WriteStatus(-1);
    /// The write was accepted and queued; confirmation is pending
    pub const QUEUED: WriteStatus = WriteStatus(-2);

    /// Raw code
    pub fn code(self) -> i16 {
        self.0
    }

    /// Interpret this status into the caller-visible outcome
    ///
    /// Pure and total: every code maps to exactly one `Outcome`, and no code
    /// is an error of this function itself.
    pub fn interpret(self) -> Outcome {
        match self {
            WriteStatus::APPLIED => Outcome::Applied,
            WriteStatus::QUEUED => Outcome::Uncertain,
            WriteStatus(code) => Outcome::Passthrough(code),
        }
    }
}

impl fmt::Display for WriteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller-visible result of a write or refresh
///
/// `Uncertain` is not an error: the operation was accepted but cannot be
/// confirmed synchronously, and the caller decides whether to re-check state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The operation was applied
    Applied,
    /// The operation was accepted; confirmation is pending
    Uncertain,
    /// A store-defined code, preserved verbatim
    Passthrough(i16),
}

impl Outcome {
    /// True for `Applied`
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }
}
