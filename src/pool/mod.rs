//! Worker pool coordination.
//!
//! This module provides the pool coordinator and worker loop: a fixed set
//! of worker threads drains a closable FIFO queue of pre-generated tasks,
//! with a bounded, never-blocking channel for error reports.

pub mod processor;
pub mod worker;

pub use processor::{DelayProcessor, Processor};
pub use worker::WorkerId;

use crate::config::Config;
use crate::error::Result;
use crate::queue::TaskQueue;
use crate::report::{ErrorChannel, ErrorReport};
use crate::sink::{ConsoleSink, ProgressSink};
use crate::task::Task;
use std::sync::Arc;
use std::thread;
use worker::Worker;

/// Fixed-size worker pool draining a closable task queue to exhaustion.
///
/// The coordinator populates the queue in a single phase, closes it, spawns
/// the workers, joins them all, then surfaces at most one pending error
/// report. A fault in one worker never prevents the others from draining.
pub struct Pool {
    config: Config,
    sink: Arc<dyn ProgressSink>,
    processor: Arc<dyn Processor>,
}

impl Pool {
    /// Create a pool from a validated config, emitting to stdout and using
    /// the fixed-delay processor.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let processor = Arc::new(DelayProcessor::new(config.task_delay));
        Ok(Pool {
            config,
            sink: Arc::new(ConsoleSink),
            processor,
        })
    }

    /// Replace the progress sink.
    pub fn with_sink(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Replace the per-task processing step.
    pub fn with_processor(mut self, processor: Arc<dyn Processor>) -> Self {
        self.processor = processor;
        self
    }

    /// Populate the queue, drain it with a fixed set of workers, then
    /// surface at most one pending error report.
    ///
    /// Returns the drained report, if any. The report is advisory; `run`
    /// still succeeds when a worker faulted.
    pub fn run(&self) -> Result<Option<ErrorReport>> {
        let workers = self.config.worker_threads();
        let tasks = self.config.tasks;

        let queue = Arc::new(TaskQueue::new(tasks));
        let errors = ErrorChannel::new(workers);

        self.sink
            .emit(&format!("initializing queue with {} tasks", tasks));
        for i in 1..=tasks {
            let task = Task::new(format!("Task {}", i));
            self.sink.emit(&format!("queued {}", task));
            queue.enqueue(task)?;
        }

        // single population phase; nothing more will ever arrive
        queue.close()?;

        self.sink.emit(&format!("starting {} workers", workers));

        let mut handles = Vec::with_capacity(workers);
        for id in 1..=workers {
            let worker = Worker::new(
                id,
                queue.clone(),
                errors.clone(),
                self.sink.clone(),
                self.processor.clone(),
            );
            let name = format!("{}-{}", self.config.thread_name_prefix, id);
            let mut builder = thread::Builder::new().name(name);
            if let Some(stack_size) = self.config.stack_size {
                builder = builder.stack_size(stack_size);
            }
            let handle = builder.spawn(move || worker.run())?;
            handles.push((id, handle));
        }

        // completion barrier: every worker signals by returning
        for (id, handle) in handles {
            if handle.join().is_err() {
                let report = ErrorReport::new(id, "worker thread panicked");
                if let Err(report) = errors.try_report(report) {
                    self.sink
                        .emit(&format!("worker {} error (channel full): {}", id, report));
                }
            }
        }

        self.sink.emit("all workers completed");

        // at most one pending report is surfaced; extras stay unread
        let first_error = errors.take();
        match &first_error {
            Some(report) => self.sink.emit(&format!("error occurred: {}", report)),
            None => self.sink.emit("no errors reported"),
        }

        Ok(first_error)
    }
}

impl std::fmt::Debug for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pool")
            .field("workers", &self.config.worker_threads())
            .field("tasks", &self.config.tasks)
            .finish()
    }
}
