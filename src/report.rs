//! Worker error reports and the bounded reporting channel.

use crate::pool::WorkerId;
use crossbeam_channel::{bounded, Receiver, Sender};
use std::fmt;

/// Immutable record of one worker-side failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    worker: WorkerId,
    cause: String,
}

impl ErrorReport {
    /// Create a report attributing `cause` to `worker`.
    pub fn new<S: Into<String>>(worker: WorkerId, cause: S) -> Self {
        ErrorReport {
            worker,
            cause: cause.into(),
        }
    }

    /// The worker the failure is attributed to.
    pub fn worker(&self) -> WorkerId {
        self.worker
    }

    /// Human-readable failure description.
    pub fn cause(&self) -> &str {
        &self.cause
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "worker {}: {}", self.worker, self.cause)
    }
}

/// Bounded fan-in channel for error reports.
///
/// Capacity is sized to the worker count as a best-effort buffer, not a
/// correctness guarantee. Sending never blocks: a full channel hands the
/// report back to the caller, which falls back to the progress sink.
#[derive(Debug, Clone)]
pub struct ErrorChannel {
    tx: Sender<ErrorReport>,
    rx: Receiver<ErrorReport>,
}

impl ErrorChannel {
    /// Create a channel buffering at most `capacity` reports.
    pub fn new(capacity: usize) -> Self {
        let (tx, rx) = bounded(capacity);
        ErrorChannel { tx, rx }
    }

    /// Non-blocking send. A rejected report is returned to the caller for
    /// the fallback path instead of being dropped.
    pub fn try_report(&self, report: ErrorReport) -> std::result::Result<(), ErrorReport> {
        self.tx.try_send(report).map_err(|e| e.into_inner())
    }

    /// Non-blocking read of the oldest pending report, if any.
    pub fn take(&self) -> Option<ErrorReport> {
        self.rx.try_recv().ok()
    }
}
