//! Cellwire - typed value marshalling for a path-addressed pub/sub store
//!
//! Cellwire lets a spreadsheet-like host push typed scalar values into an
//! external hierarchical publish/subscribe store, and refresh the live
//! subscriptions it established. The host hands over loosely-typed scalars;
//! cellwire coerces each one into exactly one wire-representable write,
//! routes it to the matching store primitive, and interprets the store's
//! compact status-code contract.
//!
//! # Quick Start
//!
//! ```ignore
//! use cellwire::{
//!     InputValue, Outcome, RequestKind, SerialCalendar, StorePath, TypeHint, WriteBridge,
//! };
//!
//! // `client` is your store's `StoreClient` implementation
//! let bridge = WriteBridge::new(client, SerialCalendar::from_local_offset());
//!
//! let path = StorePath::from("/desk/eurusd/bid");
//! match bridge.write(&path, InputValue::Number(1.0843), TypeHint::Auto, RequestKind::Immediate) {
//!     Outcome::Applied => {}
//!     Outcome::Uncertain => { /* queued; re-check if it matters */ }
//!     Outcome::Passthrough(code) => eprintln!("store error {code}"),
//! }
//!
//! // Re-establish every active subscription
//! bridge.refresh(None);
//! ```
//!
//! # Architecture
//!
//! `cellwire-core` holds the pure value model and coercion; `cellwire-client`
//! holds the store boundary trait and the dispatch pipeline. The store itself
//! is an injected collaborator; its wire protocol, retry machinery, and
//! update delivery are out of scope here.

pub use cellwire_client::testing;
pub use cellwire_client::{StoreClient, WriteBridge};
pub use cellwire_core::{
    coerce, serial_to_datetime, CoercionError, HintParseError, InputValue, Outcome, RequestKind,
    SerialCalendar, StorePath, TypeHint, WritePayload, WriteStatus,
};
