//! Per-task processing seam.

use super::worker::WorkerId;
use crate::error::Result;
use crate::task::Task;
use std::thread;
use std::time::Duration;

/// Processing step a worker applies to each task it pulls.
///
/// Returning an error marks the task as failed; the worker converts the
/// error into a report and stops pulling further tasks. An
/// [`Error::InvalidTask`](crate::Error::InvalidTask) result is the one
/// exception: the worker reports it and moves on to the next task.
pub trait Processor: Send + Sync {
    /// Process one task on behalf of `worker`.
    fn process(&self, worker: WorkerId, task: &Task) -> Result<()>;
}

/// Default processor: sleeps for a fixed duration per task to model
/// blocking work, then succeeds.
#[derive(Debug, Clone)]
pub struct DelayProcessor {
    delay: Duration,
}

impl DelayProcessor {
    /// Create a processor that sleeps `delay` per task.
    pub fn new(delay: Duration) -> Self {
        DelayProcessor { delay }
    }
}

impl Processor for DelayProcessor {
    fn process(&self, _worker: WorkerId, _task: &Task) -> Result<()> {
        thread::sleep(self.delay);
        Ok(())
    }
}
