//! The store-client boundary
//!
//! [`StoreClient`] is the injected collaborator that actually talks to the
//! external store. The marshalling layer calls exactly one typed primitive
//! per write and never looks inside the returned status beyond the sentinel
//! contract in [`WriteStatus`].
//!
//! ## Contract
//!
//! - One primitive per [`WritePayload`](cellwire_core::WritePayload) variant,
//!   each `(path, value, kind) -> WriteStatus`
//! - `kind` selects the client's own retry policy; no retry happens above it
//! - Subscription establishment, teardown, and live-update delivery are owned
//!   entirely by the client; this layer only issues refresh requests
//! - The client is the single shared mutable resource and must be safe for
//!   concurrent use by independent callers; this layer takes no locks
//! - Any primitive may block (e.g. under queue backpressure for `Retrying`
//!   writes to a slow destination); timeout policy lives in the client

use cellwire_core::{RequestKind, StorePath, WriteStatus};
use chrono::{DateTime, Utc};

/// Typed write and refresh primitives of the external store
pub trait StoreClient: Send + Sync {
    /// Write a boolean
    fn write_bool(&self, path: &StorePath, value: bool, kind: RequestKind) -> WriteStatus;

    /// Write a 64-bit float
    fn write_float(&self, path: &StorePath, value: f64, kind: RequestKind) -> WriteStatus;

    /// Write a 64-bit integer
    fn write_int(&self, path: &StorePath, value: i64, kind: RequestKind) -> WriteStatus;

    /// Write a UTC timestamp
    fn write_timestamp(
        &self,
        path: &StorePath,
        value: DateTime<Utc>,
        kind: RequestKind,
    ) -> WriteStatus;

    /// Write UTF-8 text, transmitted as a byte sequence
    fn write_text(&self, path: &StorePath, value: &[u8], kind: RequestKind) -> WriteStatus;

    /// Write an explicit null
    fn write_null(&self, path: &StorePath, kind: RequestKind) -> WriteStatus;

    /// Write a diagnostic error value
    fn write_error(&self, path: &StorePath, message: &str, kind: RequestKind) -> WriteStatus;

    /// Re-establish the subscription rooted at `path`
    ///
    /// Idempotent: refreshing an already-fresh subscription is a no-op that
    /// reports applied.
    fn refresh_path(&self, path: &StorePath) -> WriteStatus;

    /// Re-establish all currently active subscriptions
    fn refresh_all(&self) -> WriteStatus;
}
