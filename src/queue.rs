//! Closable bounded FIFO queue shared between the coordinator and workers.

use crate::error::{Error, Result};
use crate::task::Task;
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use parking_lot::Mutex;

/// Fixed-capacity FIFO of tasks with an explicit one-time close transition.
///
/// The coordinator enqueues during a single population phase, then closes
/// the queue; workers block on [`dequeue`](TaskQueue::dequeue) until a task
/// arrives or the queue is both closed and drained. Every buffered task is
/// delivered before closure becomes observable, so no task is ever lost and
/// each is handed to exactly one consumer.
pub struct TaskQueue {
    tx: Mutex<Option<Sender<Task>>>,
    rx: Receiver<Task>,
}

impl TaskQueue {
    /// Create a queue holding at most `capacity` tasks.
    pub fn new(capacity: usize) -> Self {
        let (tx, rx) = bounded(capacity);
        TaskQueue {
            tx: Mutex::new(Some(tx)),
            rx,
        }
    }

    /// Add a task at the tail without blocking.
    ///
    /// Fails if the queue has been closed or is at capacity. Population is
    /// expected to pre-size the capacity so the latter never happens.
    pub fn enqueue(&self, task: Task) -> Result<()> {
        let guard = self.tx.lock();
        let tx = guard
            .as_ref()
            .ok_or_else(|| Error::queue("enqueue after close"))?;
        tx.try_send(task).map_err(|e| match e {
            TrySendError::Full(_) => Error::queue("queue full"),
            TrySendError::Disconnected(_) => Error::queue("enqueue after close"),
        })
    }

    /// One-time transition: no further tasks will ever arrive.
    ///
    /// A second close is a caller error.
    pub fn close(&self) -> Result<()> {
        match self.tx.lock().take() {
            Some(tx) => {
                drop(tx);
                Ok(())
            }
            None => Err(Error::queue("queue already closed")),
        }
    }

    /// Remove the task at the head, in enqueue order.
    ///
    /// Blocks while the queue is open and empty. Returns `None` only once
    /// the queue is closed and fully drained; never suspends after that.
    pub fn dequeue(&self) -> Option<Task> {
        self.rx.recv().ok()
    }
}

impl std::fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskQueue")
            .field("closed", &self.tx.lock().is_none())
            .field("len", &self.rx.len())
            .finish()
    }
}
