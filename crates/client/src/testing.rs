//! In-memory store client for tests
//!
//! [`MemoryStore`] records every primitive invocation and answers with a
//! scriptable status (default [`WriteStatus::APPLIED`]). Like the real store
//! client, it establishes a subscription implicitly on the first write to a
//! path; refreshes of known and unknown paths alike succeed, which is one
//! legitimate reading of the Applied/Uncertain boundary being the client's
//! to define.

use crate::store::StoreClient;
use cellwire_core::{RequestKind, StorePath, WriteStatus};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};

/// One recorded primitive invocation
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedWrite {
    /// `write_bool`
    Bool(bool),
    /// `write_float`
    Float(f64),
    /// `write_int`
    Int(i64),
    /// `write_timestamp`
    Timestamp(DateTime<Utc>),
    /// `write_text`
    Text(Vec<u8>),
    /// `write_null`
    Null,
    /// `write_error`
    Error(String),
}

#[derive(Default)]
struct Inner {
    writes: HashMap<String, Vec<(RecordedWrite, RequestKind)>>,
    subscribed: HashSet<String>,
    path_refreshes: HashMap<String, usize>,
    all_refreshes: usize,
    response: Option<WriteStatus>,
}

/// Recording in-memory [`StoreClient`]
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Empty store answering every call with `APPLIED`
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Answer every subsequent call with `status`
    pub fn respond_with(&self, status: WriteStatus) {
        self.inner.lock().response = Some(status);
    }

    /// All writes recorded at `path`, in call order
    pub fn writes(&self, path: &StorePath) -> Vec<RecordedWrite> {
        self.inner
            .lock()
            .writes
            .get(path.as_str())
            .map(|v| v.iter().map(|(w, _)| w.clone()).collect())
            .unwrap_or_default()
    }

    /// The request kinds recorded at `path`, in call order
    pub fn kinds(&self, path: &StorePath) -> Vec<RequestKind> {
        self.inner
            .lock()
            .writes
            .get(path.as_str())
            .map(|v| v.iter().map(|(_, k)| *k).collect())
            .unwrap_or_default()
    }

    /// Total writes recorded across all paths
    pub fn write_count(&self) -> usize {
        self.inner.lock().writes.values().map(Vec::len).sum()
    }

    /// Whether a subscription exists for `path`
    pub fn is_subscribed(&self, path: &StorePath) -> bool {
        self.inner.lock().subscribed.contains(path.as_str())
    }

    /// Times `refresh_path` was called for `path`
    pub fn path_refreshes(&self, path: &StorePath) -> usize {
        self.inner
            .lock()
            .path_refreshes
            .get(path.as_str())
            .copied()
            .unwrap_or(0)
    }

    /// Times `refresh_all` was called
    pub fn all_refreshes(&self) -> usize {
        self.inner.lock().all_refreshes
    }

    fn record(&self, path: &StorePath, write: RecordedWrite, kind: RequestKind) -> WriteStatus {
        let mut inner = self.inner.lock();
        // First write to a path establishes its subscription
        inner.subscribed.insert(path.as_str().to_string());
        inner
            .writes
            .entry(path.as_str().to_string())
            .or_default()
            .push((write, kind));
        inner.response.unwrap_or(WriteStatus::APPLIED)
    }
}

impl StoreClient for MemoryStore {
    fn write_bool(&self, path: &StorePath, value: bool, kind: RequestKind) -> WriteStatus {
        self.record(path, RecordedWrite::Bool(value), kind)
    }

    fn write_float(&self, path: &StorePath, value: f64, kind: RequestKind) -> WriteStatus {
        self.record(path, RecordedWrite::Float(value), kind)
    }

    fn write_int(&self, path: &StorePath, value: i64, kind: RequestKind) -> WriteStatus {
        self.record(path, RecordedWrite::Int(value), kind)
    }

    fn write_timestamp(
        &self,
        path: &StorePath,
        value: DateTime<Utc>,
        kind: RequestKind,
    ) -> WriteStatus {
        self.record(path, RecordedWrite::Timestamp(value), kind)
    }

    fn write_text(&self, path: &StorePath, value: &[u8], kind: RequestKind) -> WriteStatus {
        self.record(path, RecordedWrite::Text(value.to_vec()), kind)
    }

    fn write_null(&self, path: &StorePath, kind: RequestKind) -> WriteStatus {
        self.record(path, RecordedWrite::Null, kind)
    }

    fn write_error(&self, path: &StorePath, message: &str, kind: RequestKind) -> WriteStatus {
        self.record(path, RecordedWrite::Error(message.to_string()), kind)
    }

    fn refresh_path(&self, path: &StorePath) -> WriteStatus {
        let mut inner = self.inner.lock();
        // Refresh establishes the subscription if it was missing
        inner.subscribed.insert(path.as_str().to_string());
        *inner
            .path_refreshes
            .entry(path.as_str().to_string())
            .or_insert(0) += 1;
        inner.response.unwrap_or(WriteStatus::APPLIED)
    }

    fn refresh_all(&self) -> WriteStatus {
        let mut inner = self.inner.lock();
        inner.all_refreshes += 1;
        inner.response.unwrap_or(WriteStatus::APPLIED)
    }
}
