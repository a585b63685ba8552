//! CREWPOOL - a fixed-size worker pool over a closable task queue
//!
//! A small demonstration runtime: a coordinator pre-populates a bounded
//! FIFO queue with labeled tasks, closes it, and a fixed crew of worker
//! threads drains it to exhaustion with simulated per-task latency and
//! best-effort error reporting.
//!
//! # Quick Start
//!
//! ```no_run
//! use crewpool::{Config, Pool};
//! use std::time::Duration;
//!
//! let config = Config::builder()
//!     .workers(3)
//!     .tasks(10)
//!     .task_delay(Duration::from_millis(200))
//!     .build()
//!     .unwrap();
//!
//! let report = Pool::new(config).unwrap().run().unwrap();
//! match report {
//!     Some(report) => println!("one worker failed: {}", report),
//!     None => println!("all tasks processed"),
//! }
//! ```
//!
//! # Design
//!
//! - **Closable queue**: enqueue happens in a single population phase; a
//!   one-time close makes exhaustion observable to every consumer.
//! - **Fixed crew**: worker count is set up front; no scaling, no retries.
//! - **Best-effort reporting**: a bounded error channel that never blocks a
//!   producer; overflow falls back to the progress sink.
//! - **Advisory failures**: the coordinator surfaces at most one report and
//!   the process still finishes normally.

// Lint configuration
#![warn(missing_docs, missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod pool;
pub mod prelude;
pub mod queue;
pub mod report;
pub mod sink;
pub mod task;

// Re-export key types at crate root
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use pool::{DelayProcessor, Pool, Processor, WorkerId};
pub use queue::TaskQueue;
pub use report::{ErrorChannel, ErrorReport};
pub use sink::{CaptureSink, ConsoleSink, ProgressSink};
pub use task::Task;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_small_pool_drains_everything() {
        let sink = Arc::new(CaptureSink::new());
        let config = Config::builder()
            .workers(2)
            .tasks(4)
            .task_delay(Duration::from_millis(0))
            .build()
            .unwrap();

        let report = Pool::new(config)
            .unwrap()
            .with_sink(sink.clone())
            .run()
            .unwrap();

        assert!(report.is_none());
        let processed = sink
            .lines()
            .iter()
            .filter(|l| l.contains(" processed "))
            .count();
        assert_eq!(processed, 4);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = Config {
            workers: Some(0),
            ..Config::default()
        };
        assert!(Pool::new(config).is_err());
    }
}
