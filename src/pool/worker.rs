//! Worker loop: drain the shared queue to exhaustion.

use super::processor::Processor;
use crate::error::Error;
use crate::queue::TaskQueue;
use crate::report::{ErrorChannel, ErrorReport};
use crate::sink::ProgressSink;
use std::sync::Arc;

pub type WorkerId = usize;

pub(crate) struct Worker {
    pub id: WorkerId,
    queue: Arc<TaskQueue>,
    errors: ErrorChannel,
    sink: Arc<dyn ProgressSink>,
    processor: Arc<dyn Processor>,
}

impl Worker {
    pub fn new(
        id: WorkerId,
        queue: Arc<TaskQueue>,
        errors: ErrorChannel,
        sink: Arc<dyn ProgressSink>,
        processor: Arc<dyn Processor>,
    ) -> Self {
        Worker {
            id,
            queue,
            errors,
            sink,
            processor,
        }
    }

    // main loop
    pub fn run(&self) {
        self.sink.emit(&format!("worker {} started", self.id));

        while let Some(task) = self.queue.dequeue() {
            // defensive: a task with no label is malformed
            if task.label().is_empty() {
                self.forward(ErrorReport::new(self.id, "received task with empty label"));
                continue;
            }

            match self.processor.process(self.id, &task) {
                Ok(()) => {
                    self.sink
                        .emit(&format!("worker {} processed {}", self.id, task));
                }
                // a task rejected as invalid is reported and skipped
                Err(e @ Error::InvalidTask(_)) => {
                    self.forward(ErrorReport::new(self.id, e.to_string()));
                }
                // a fault ends this worker's loop; the rest of the pool
                // keeps draining the queue
                Err(e) => {
                    self.forward(ErrorReport::new(self.id, e.to_string()));
                    return;
                }
            }
        }

        self.sink.emit(&format!("worker {} completed all tasks", self.id));
    }

    // non-blocking send with sink fallback; never blocks the loop
    fn forward(&self, report: ErrorReport) {
        if let Err(report) = self.errors.try_report(report) {
            self.sink
                .emit(&format!("worker {} error (channel full): {}", self.id, report));
        }
    }
}
