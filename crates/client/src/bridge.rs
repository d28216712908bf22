//! The write pipeline
//!
//! [`WriteBridge`] is the caller-facing surface: coerce one input, dispatch
//! exactly one store primitive, interpret the status. It owns no state beyond
//! the injected client and the serial calendar fixed at construction.
//!
//! ## Desugaring
//!
//! | Caller call | Store primitive |
//! |-------------|-----------------|
//! | `write(path, Bool, Auto, kind)` | `write_bool` |
//! | `write(path, Number, Auto, kind)` | `write_float` |
//! | `write(path, Number, Int, kind)` | `write_int` |
//! | `write(path, Number, Timestamp, kind)` | `write_timestamp` |
//! | `write(path, Text, _, kind)` | `write_text` (UTF-8 bytes) |
//! | `write(path, _, Null, kind)` | `write_null` |
//! | failed coercion | `write_error` (diagnostic text) |
//! | `refresh(Some(path))` | `refresh_path` |
//! | `refresh(None)` | `refresh_all` |
//!
//! Every `write` issues exactly one store mutation attempt, never zero and
//! never two; a failed coercion still reaches the store as an error write at
//! the same path. No buffering, batching, or local retry: `RequestKind`
//! passes through unchanged and the client applies its own policy. Nothing
//! here is fatal; every code path returns an [`Outcome`].

use crate::store::StoreClient;
use cellwire_core::{
    coerce, InputValue, Outcome, RequestKind, SerialCalendar, StorePath, TypeHint, WritePayload,
    WriteStatus,
};
use tracing::{debug, warn};

/// Coercion, dispatch, and refresh against one injected store client
///
/// Synchronous; may block inside the client. Safe for concurrent use from
/// multiple threads provided the client honors its own concurrency contract.
#[derive(Debug)]
pub struct WriteBridge<C> {
    client: C,
    calendar: SerialCalendar,
}

impl<C: StoreClient> WriteBridge<C> {
    /// Build a bridge over `client` with a fixed serial calendar
    ///
    /// Compute the calendar once at host startup (for local-time hosts, via
    /// [`SerialCalendar::from_local_offset`]); it is not re-evaluated per call.
    pub fn new(client: C, calendar: SerialCalendar) -> Self {
        WriteBridge { client, calendar }
    }

    /// The injected store client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Coerce `input` under `hint` and write it to `path`
    ///
    /// A coercion failure is demoted to an error write carrying the rejected
    /// input's type name, so the store still records the attempt.
    pub fn write(
        &self,
        path: &StorePath,
        input: InputValue,
        hint: TypeHint,
        kind: RequestKind,
    ) -> Outcome {
        let payload = match coerce(input, hint, &self.calendar) {
            Ok(payload) => payload,
            Err(err) => {
                debug!(path = %path, %err, "coercion failed, publishing error write");
                WritePayload::Error(err.diagnostic())
            }
        };
        let status = self.dispatch(path, payload, kind);
        self.interpret(path, status)
    }

    /// Route one payload to its store primitive
    ///
    /// Exactly one primitive per variant; `kind` passes through unchanged.
    pub fn dispatch(&self, path: &StorePath, payload: WritePayload, kind: RequestKind) -> WriteStatus {
        match payload {
            WritePayload::Bool(v) => self.client.write_bool(path, v, kind),
            WritePayload::Float(v) => self.client.write_float(path, v, kind),
            WritePayload::Int(v) => self.client.write_int(path, v, kind),
            WritePayload::Timestamp(v) => self.client.write_timestamp(path, v, kind),
            WritePayload::Text(v) => self.client.write_text(path, &v, kind),
            WritePayload::Null => self.client.write_null(path, kind),
            WritePayload::Error(msg) => self.client.write_error(path, &msg, kind),
        }
    }

    /// Re-establish one subscription, or all of them
    ///
    /// `Some(path)` refreshes the subscription rooted at that path; `None`
    /// refreshes every active subscription. Idempotent from the caller's
    /// perspective; the result is interpreted identically to a write.
    pub fn refresh(&self, path: Option<&StorePath>) -> Outcome {
        let status = match path {
            Some(path) => self.client.refresh_path(path),
            None => self.client.refresh_all(),
        };
        match status.interpret() {
            Outcome::Passthrough(code) => {
                warn!(path = path.map(StorePath::as_str), code, "refresh rejected by store");
                Outcome::Passthrough(code)
            }
            outcome => outcome,
        }
    }

    fn interpret(&self, path: &StorePath, status: WriteStatus) -> Outcome {
        let outcome = status.interpret();
        match outcome {
            Outcome::Passthrough(code) => {
                warn!(path = %path, code, "store rejected write")
            }
            Outcome::Uncertain => {
                debug!(path = %path, "write queued, confirmation pending")
            }
            Outcome::Applied => debug!(path = %path, "write applied"),
        }
        outcome
    }
}
