use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;
use vigil_common::{Severity, StatusRecord};

/// Which timestamp a read hands back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadMode {
    /// Stamp the returned copy with the time of the read.
    Refresh,
    /// Return the time of the last mutation.
    Raw,
}

/// Shared handle to the process status record.
///
/// Clones point at the same record. Writes replace the whole record under a
/// write lock, so readers never observe a code from one update paired with a
/// message or timestamp from another.
#[derive(Clone, Debug, Default)]
pub struct StatusHolder {
    record: Arc<RwLock<StatusRecord>>,
}

impl StatusHolder {
    pub fn new() -> Self {
        Self {
            record: Arc::new(RwLock::new(StatusRecord::initial())),
        }
    }

    pub fn set(&self, code: Severity, message: impl Into<String>) {
        let record = StatusRecord::new(code, message);
        debug!("Status set to {} ({})", record.code, record.message);
        *self.record.write() = record;
    }

    pub fn ok(&self, message: impl Into<String>) {
        self.set(Severity::Ok, message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.set(Severity::Warning, message);
    }

    pub fn critical(&self, message: impl Into<String>) {
        self.set(Severity::Critical, message);
    }

    pub fn unknown(&self, message: impl Into<String>) {
        self.set(Severity::Unknown, message);
    }

    /// Current record with the timestamp set to now. The stored timestamp is
    /// left untouched so raw reads keep reporting the last mutation.
    pub fn current(&self) -> StatusRecord {
        self.record.read().refreshed()
    }

    /// Current record exactly as last written.
    pub fn snapshot(&self) -> StatusRecord {
        self.record.read().clone()
    }

    pub fn read(&self, mode: ReadMode) -> StatusRecord {
        match mode {
            ReadMode::Refresh => self.current(),
            ReadMode::Raw => self.snapshot(),
        }
    }
}
